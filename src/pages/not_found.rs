use leptos::prelude::*;

use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1>"Page not found"</h1>
            <p class=css::muted>{format!("Nothing lives at /{path}.")}</p>
            <a href=AppRoute::Home.to_hash()>"Back to home"</a>
        </section>
    }
}
