//! Chrome around protected pages: top navigation and logout.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::use_session;
use crate::config::APP_NAME;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = use_session();

    let link = move |target: AppRoute, label: &'static str, icon: icondata::Icon| {
        let href = target.to_hash();
        let class = move || {
            let current = ctx.route.get();
            let active = match (&target, &current) {
                (AppRoute::Users, AppRoute::User { .. }) => true,
                (AppRoute::Games, AppRoute::Game { .. }) => true,
                _ => current == target,
            };
            if active {
                format!("{} {}", css::link, css::active)
            } else {
                css::link.to_string()
            }
        };
        view! {
            <a href=href class=class>
                <Icon icon=icon />
                <span>{label}</span>
            </a>
        }
    };

    view! {
        <div class=css::shell>
            <nav class=css::nav>
                <span class=css::brand>{APP_NAME}</span>
                <div class=css::links>
                    {link(AppRoute::Home, "Home", ic::HOME)}
                    {link(AppRoute::Games, "Games", ic::GAMES)}
                    {link(AppRoute::Users, "Users", ic::USERS)}
                </div>
                <button class=css::logout on:click=move |_| session.logout()>
                    <Icon icon=ic::LOGOUT />
                    <span>"Logout"</span>
                </button>
            </nav>
            <main class=css::content>{children()}</main>
        </div>
    }
}
