//! Login form.

use gamedesk_core::api::login_error_message;
use gamedesk_core::models::LoginRequest;
use gamedesk_core::session;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::models::AppRoute;
use crate::utils::LocalStore;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.login(&request).await {
                Ok(credential) => match session::sign_in(&LocalStore, &credential) {
                    Ok(()) => {
                        ctx.success("Login successful!");
                        ctx.navigate(AppRoute::Home);
                    }
                    Err(err) => ctx.error(err.to_string()),
                },
                Err(err) => ctx.error(login_error_message(&err)),
            }
            pending.try_set(false);
        });
    };

    view! {
        <section class=css::auth>
            <form class=css::form on:submit=on_submit>
                <h1>"Login"</h1>
                <label class=css::field>
                    <span>"Email"</span>
                    <input
                        type="email"
                        required
                        autocomplete="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Password"</span>
                    <input
                        type="password"
                        required
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class=css::primary type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class=css::muted>
                    "No account yet? "
                    <a href=AppRoute::Register.to_hash()>"Register"</a>
                </p>
            </form>
        </section>
    }
}
