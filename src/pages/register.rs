//! Registration form. A successful registration logs the new account in.

use gamedesk_core::models::RegisterRequest;
use gamedesk_core::session;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::models::AppRoute;
use crate::utils::LocalStore;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: confirmation.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = match api.register_and_login(&request).await {
                Ok(credential) => session::sign_in(&LocalStore, &credential).map_err(|e| e.to_string()),
                Err(err) => Err(err.user_message().to_string()),
            };
            match result {
                Ok(()) => {
                    ctx.success("Registration successful!");
                    ctx.navigate(AppRoute::Home);
                }
                Err(message) => ctx.error(message),
            }
            pending.try_set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class=css::field>
                <span>{label}</span>
                <input
                    type=kind
                    required
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class=css::auth>
            <form class=css::form on:submit=on_submit>
                <h1>"Register"</h1>
                {field("Name", "text", name)}
                {field("Email", "email", email)}
                {field("Password", "password", password)}
                {field("Confirm password", "password", confirmation)}
                <button class=css::primary type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Registering..." } else { "Register" }}
                </button>
                <p class=css::muted>
                    "Already registered? "
                    <a href=AppRoute::Login.to_hash()>"Login"</a>
                </p>
            </form>
        </section>
    }
}
