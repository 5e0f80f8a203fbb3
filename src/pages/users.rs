//! User list with delete confirmation.

use gamedesk_core::models::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::{ConfirmDialog, Loading, use_session};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let users = LocalResource::new(move || {
        let api = ctx.api();
        let credential = session.credential();
        async move { api.users(&credential).await }
    });
    session.watch(users);

    let to_delete = RwSignal::new(None::<User>);
    let deleting = RwSignal::new(false);

    let on_confirm = Callback::new(move |_: ()| {
        let Some(user) = to_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        let api = ctx.api();
        let credential = session.credential();
        spawn_local(async move {
            match api.delete_user(&credential, user.id).await {
                Ok(()) => {
                    ctx.success(format!("Deleted {}.", user.name));
                    if session.recheck(&api, &credential).await && !deleting.is_disposed() {
                        users.refetch();
                    }
                }
                Err(err) => session.report(&err),
            }
            deleting.try_set(false);
            to_delete.try_set(None);
        });
    });

    view! {
        <section class=css::page>
            <header class=css::page_header>
                <h1>"Users"</h1>
            </header>
            {move || match users.get() {
                None => view! { <Loading /> }.into_any(),
                Some(Err(_)) => view! { <p class=css::muted>"Could not load users."</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class=css::muted>"No users yet."</p> }.into_any()
                }
                Some(Ok(list)) => view! {
                    <table class=css::table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|user| view! { <UserRow user=user to_delete=to_delete /> })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any(),
            }}
            <Show when=move || to_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete user"
                    message=to_delete
                        .get_untracked()
                        .map(|u| format!("Are you sure you want to delete {}?", u.name))
                        .unwrap_or_default()
                    on_confirm=on_confirm
                    on_cancel=Callback::new(move |_: ()| to_delete.set(None))
                    busy=deleting
                />
            </Show>
        </section>
    }
}

#[component]
fn UserRow(user: User, to_delete: RwSignal<Option<User>>) -> impl IntoView {
    let href = AppRoute::User { id: user.id }.to_hash();
    let name = user.name.clone();
    let email = user.email.clone();

    view! {
        <tr>
            <td>
                <a href=href>{name}</a>
            </td>
            <td>{email}</td>
            <td class=css::row_actions>
                <button
                    class=css::icon_button
                    aria-label="Delete user"
                    on:click=move |_| to_delete.set(Some(user.clone()))
                >
                    <Icon icon=ic::TRASH />
                </button>
            </td>
        </tr>
    }
}
