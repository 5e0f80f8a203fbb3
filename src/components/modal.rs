//! Modal dialogs.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/modal.module.css");

/// Overlay with a titled panel. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())>
            <div class=css::panel role="dialog" on:click=|ev| ev.stop_propagation()>
                <header class=css::header>
                    <h2>{title}</h2>
                    <button class=css::close aria-label="Close" on:click=move |_| on_close.run(())>
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into, optional)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class=css::message>{message}</p>
            <div class=css::actions>
                <button class=css::secondary on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    class=css::danger
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    <Icon icon=ic::TRASH />
                    <span>"Delete"</span>
                </button>
            </div>
        </Modal>
    }
}
