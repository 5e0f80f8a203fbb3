use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/loading.module.css");

/// Centered spinner.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class=css::wrap role="status" aria-label="Loading">
            <div class=css::spinner></div>
        </div>
    }
}
