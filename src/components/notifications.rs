//! Toast notifications.
//!
//! Toasts are pushed through [`AppContext::notify`], which also schedules
//! their removal. Each one can be dismissed early.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Notification, Tone};

stylance::import_crate_style!(css, "src/components/notifications.module.css");

#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let items = move || ctx.notifications.with(|n| n.items().to_vec());

    view! {
        <div class=css::stack aria-live="polite">
            <For each=items key=|n| n.id let:notification>
                <Toast notification=notification />
            </For>
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = notification.id;
    let tone_class = match notification.tone {
        Tone::Success => css::success,
        Tone::Error => css::error,
    };

    view! {
        <div class=format!("{} {}", css::toast, tone_class) role="alert">
            <span class=css::message>{notification.message}</span>
            <button
                class=css::dismiss
                aria-label="Dismiss"
                on:click=move |_| ctx.notifications.update(|n| n.dismiss(id))
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
