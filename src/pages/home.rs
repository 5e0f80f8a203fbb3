use leptos::prelude::*;

use crate::config::{HOME_TAGLINE, HOME_TITLE};

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class=css::hero>
            <h1>{HOME_TITLE}</h1>
            <p>{HOME_TAGLINE}</p>
        </section>
    }
}
