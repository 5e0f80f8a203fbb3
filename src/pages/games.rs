//! Game catalog: list, create with optional cover image, delete.

use gamedesk_core::api::IMAGE_FIELD;
use gamedesk_core::http::Multipart;
use gamedesk_core::models::{Game, NewGame};
use gamedesk_core::{Credential, StatusError};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::{Api, AppContext};
use crate::components::icons as ic;
use crate::components::{ConfirmDialog, Loading, Modal, use_session};
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Cover image shown enlarged.
#[derive(Clone, PartialEq)]
struct Preview {
    url: String,
    name: String,
}

#[component]
pub fn GamesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let games = LocalResource::new(move || {
        let api = ctx.api();
        let credential = session.credential();
        async move { api.games(&credential).await }
    });
    session.watch(games);

    let creating = RwSignal::new(false);
    let preview = RwSignal::new(None::<Preview>);
    let to_delete = RwSignal::new(None::<Game>);
    let deleting = RwSignal::new(false);

    let on_confirm = Callback::new(move |_: ()| {
        let Some(game) = to_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        let api = ctx.api();
        let credential = session.credential();
        spawn_local(async move {
            match api.delete_game(&credential, game.id).await {
                Ok(()) => {
                    ctx.success(format!("Deleted {}.", game.name));
                    if !deleting.is_disposed() {
                        games.refetch();
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
                <h1>"Games"</h1>
                <button class=css::primary on:click=move |_| creating.set(true)>
                    <Icon icon=ic::PLUS />
                    <span>"New game"</span>
                </button>
            </header>
            {move || match games.get() {
                None => view! { <Loading /> }.into_any(),
                Some(Err(_)) => view! { <p class=css::muted>"Could not load games."</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class=css::muted>"No games yet."</p> }.into_any()
                }
                Some(Ok(list)) => view! {
                    <ul class=css::grid>
                        {list
                            .into_iter()
                            .map(|game| {
                                view! { <GameCard game=game preview=preview to_delete=to_delete /> }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any(),
            }}
            <Show when=move || preview.with(Option::is_some)>
                {move || {
                    preview
                        .get()
                        .map(|p| {
                            view! {
                                <Modal title=p.name.clone() on_close=Callback::new(move |_: ()| preview.set(None))>
                                    <img class=css::preview src=p.url alt=p.name />
                                </Modal>
                            }
                        })
                }}
            </Show>
            <Show when=move || creating.get()>
                <CreateGame on_done=Callback::new(move |created: bool| {
                    creating.set(false);
                    if created {
                        games.refetch();
                    }
                }) />
            </Show>
            <Show when=move || to_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete game"
                    message=to_delete
                        .get_untracked()
                        .map(|g| format!("Are you sure you want to delete {}?", g.name))
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
fn GameCard(
    game: Game,
    preview: RwSignal<Option<Preview>>,
    to_delete: RwSignal<Option<Game>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let href = AppRoute::Game { id: game.id }.to_hash();
    let image = game
        .image()
        .map(|path| ctx.api.with_value(|api| api.storage_url(path)));
    let name = game.name.clone();
    let description = game.description.clone();

    let thumbnail = match image {
        Some(url) => {
            let target = Preview {
                url: url.clone(),
                name: name.clone(),
            };
            view! {
                <button class=css::thumb on:click=move |_| preview.set(Some(target.clone()))>
                    <img src=url alt=name.clone() />
                </button>
            }
            .into_any()
        }
        None => view! {
            <div class=css::thumb_empty>
                <Icon icon=ic::IMAGE />
            </div>
        }
        .into_any(),
    };

    view! {
        <li class=css::card>
            {thumbnail}
            <a class=css::title href=href>{name}</a>
            <p class=css::muted>{description}</p>
            <div class=css::actions>
                <button
                    class=css::icon_button
                    aria-label="Delete game"
                    on:click=move |_| to_delete.set(Some(game.clone()))
                >
                    <Icon icon=ic::TRASH />
                </button>
            </div>
        </li>
    }
}

/// Modal form for a new game. `on_done` receives `true` once it is saved.
#[component]
fn CreateGame(on_done: Callback<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let file_input = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        error.set(None);

        let file = file_input.get_untracked().and_then(|input| dom::selected_file(&input));
        let name_value = name.get_untracked();
        let description_value = description.get_untracked();
        let api = ctx.api();
        let credential = session.credential();

        spawn_local(async move {
            let image_path = match file {
                Some(file) => match upload(&api, &credential, &file).await {
                    Ok(path) => Some(path),
                    Err(err) => {
                        error.try_set(Some(err.user_message().to_string()));
                        session.report(&err);
                        None
                    }
                },
                None => Some(String::new()),
            };

            if let Some(image_path) = image_path {
                let game = NewGame {
                    name: name_value,
                    description: description_value,
                    image_path,
                };
                match api.create_game(&credential, &game).await {
                    Ok(()) => {
                        ctx.success("Game created.");
                        if !saving.is_disposed() {
                            on_done.run(true);
                        }
                    }
                    Err(err) => {
                        error.try_set(Some(err.user_message().to_string()));
                        session.report(&err);
                    }
                }
            }
            saving.try_set(false);
        });
    };

    view! {
        <Modal title="New game" on_close=Callback::new(move |_: ()| on_done.run(false))>
            <form class=css::form on:submit=on_submit>
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
                    <span>"Description"</span>
                    <textarea
                        rows="4"
                        prop:value=description
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class=css::field>
                    <span>"Image"</span>
                    <input type="file" accept="image/*" node_ref=file_input />
                </label>
                {move || error.get().map(|message| view! { <p class=css::error>{message}</p> })}
                <div class=css::actions>
                    <button class=css::secondary type="button" on:click=move |_| on_done.run(false)>
                        "Cancel"
                    </button>
                    <button class=css::primary type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Read the picked file and upload it, returning its storage path.
async fn upload(
    api: &Api,
    credential: &Credential,
    file: &web_sys::File,
) -> Result<String, StatusError> {
    let bytes = dom::read_file(file).await.map_err(StatusError::unexpected)?;
    let content_type = match file.type_() {
        kind if kind.is_empty() => "application/octet-stream".to_string(),
        kind => kind,
    };
    let form = Multipart::new().file(IMAGE_FIELD, file.name(), content_type, bytes);
    api.upload_image(credential, form).await
}
