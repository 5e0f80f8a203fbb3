//! Single user: view, edit, delete.

use gamedesk_core::models::{User, UserUpdate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::{ConfirmDialog, Loading, use_session};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn UserDetailPage(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let user = LocalResource::new(move || {
        let api = ctx.api();
        let credential = session.credential();
        async move { api.user(&credential, id).await }
    });
    session.watch(user);

    let editing = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_delete = Callback::new(move |_: ()| {
        busy.set(true);
        let api = ctx.api();
        let credential = session.credential();
        spawn_local(async move {
            match api.delete_user(&credential, id).await {
                Ok(()) => {
                    ctx.success("User deleted.");
                    if session.recheck(&api, &credential).await {
                        ctx.navigate(AppRoute::Users);
                    }
                }
                Err(err) => session.report(&err),
            }
            busy.try_set(false);
            confirm_delete.try_set(false);
        });
    });

    view! {
        <section class=css::page>
            <header class=css::page_header>
                <a class=css::back href=AppRoute::Users.to_hash()>
                    <Icon icon=ic::BACK />
                    <span>"Users"</span>
                </a>
            </header>
            {move || match user.get() {
                None => view! { <Loading /> }.into_any(),
                Some(Err(_)) => view! { <p class=css::muted>"Could not load user."</p> }.into_any(),
                Some(Ok(None)) => view! { <p class=css::muted>"User not found."</p> }.into_any(),
                Some(Ok(Some(found))) if editing.get() => view! {
                    <EditUser
                        user=found
                        on_done=Callback::new(move |saved: bool| {
                            editing.set(false);
                            if saved {
                                user.refetch();
                            }
                        })
                    />
                }
                    .into_any(),
                Some(Ok(Some(found))) => view! {
                    <article class=css::card>
                        <h1>{found.name}</h1>
                        <p class=css::muted>{found.email}</p>
                        <div class=css::actions>
                            <button class=css::secondary on:click=move |_| editing.set(true)>
                                <Icon icon=ic::EDIT />
                                <span>"Edit"</span>
                            </button>
                            <button class=css::danger on:click=move |_| confirm_delete.set(true)>
                                <Icon icon=ic::TRASH />
                                <span>"Delete"</span>
                            </button>
                        </div>
                    </article>
                }
                    .into_any(),
            }}
            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Delete user"
                    message="Are you sure you want to delete this user?"
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |_: ()| confirm_delete.set(false))
                    busy=busy
                />
            </Show>
        </section>
    }
}

/// Inline edit form. `on_done` receives `true` after a successful save.
#[component]
fn EditUser(user: User, on_done: Callback<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let id = user.id;
    let name = RwSignal::new(user.name);
    let email = RwSignal::new(user.email);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);

        let update = UserUpdate {
            name: name.get_untracked(),
            email: email.get_untracked(),
        };
        let api = ctx.api();
        let credential = session.credential();
        spawn_local(async move {
            match api.update_user(&credential, id, &update).await {
                Ok(()) => {
                    ctx.success("User updated.");
                    if !saving.is_disposed() {
                        on_done.run(true);
                    }
                }
                Err(err) => session.report(&err),
            }
            saving.try_set(false);
        });
    };

    view! {
        <form class=format!("{} {}", css::card, css::form) on:submit=on_submit>
            <label class=css::field>
                <span>"Name"</span>
                <input
                    type="text"
                    required
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span>"Email"</span>
                <input
                    type="email"
                    required
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <div class=css::actions>
                <button class=css::secondary type="button" on:click=move |_| on_done.run(false)>
                    "Cancel"
                </button>
                <button class=css::primary type="submit" disabled=move || saving.get()>
                    <Icon icon=ic::SAVE />
                    <span>"Save"</span>
                </button>
            </div>
        </form>
    }
}
