use gamedesk_core::models::{Game, NewGame};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::{Loading, use_session};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

#[component]
pub fn GameDetailPage(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let game = LocalResource::new(move || {
        let api = ctx.api();
        let credential = session.credential();
        async move { api.game(&credential, id).await }
    });
    session.watch(game);

    let editing = RwSignal::new(false);

    view! {
        <section class=css::page>
            <header class=css::page_header>
                <a class=css::back href=AppRoute::Games.to_hash()>
                    <Icon icon=ic::BACK />
                    <span>"Games"</span>
                </a>
            </header>
            {move || match game.get() {
                None => view! { <Loading /> }.into_any(),
                Some(Err(_)) => view! { <p class=css::muted>"Could not load game."</p> }.into_any(),
                Some(Ok(None)) => view! { <p class=css::muted>"Game not found."</p> }.into_any(),
                Some(Ok(Some(found))) if editing.get() => view! {
                    <EditGame
                        game=found
                        on_done=Callback::new(move |saved: bool| {
                            editing.set(false);
                            if saved {
                                game.refetch();
                            }
                        })
                    />
                }
                    .into_any(),
                Some(Ok(Some(found))) => {
                    let image = found
                        .image()
                        .map(|path| ctx.api.with_value(|api| api.storage_url(path)));
                    view! {
                        <article class=css::card>
                            {image.map(|src| view! { <img class=css::cover src=src alt=found.name.clone() /> })}
                            <h1>{found.name.clone()}</h1>
                            <p>{found.description.clone()}</p>
                            <div class=css::actions>
                                <button class=css::secondary on:click=move |_| editing.set(true)>
                                    <Icon icon=ic::EDIT />
                                    <span>"Edit"</span>
                                </button>
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn EditGame(game: Game, on_done: Callback<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let id = game.id;
    let image_path = game.image().unwrap_or_default().to_string();
    let name = RwSignal::new(game.name);
    let description = RwSignal::new(game.description);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);

        let update = NewGame {
            name: name.get_untracked(),
            description: description.get_untracked(),
            image_path: image_path.clone(),
        };
        let api = ctx.api();
        let credential = session.credential();
        spawn_local(async move {
            match api.update_game(&credential, id, &update).await {
                Ok(()) => {
                    ctx.success("Game updated.");
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
                <span>"Description"</span>
                <textarea
                    rows="4"
                    prop:value=description
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
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
