//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `AppContext::route` mirrors `#/path`
//! - **Guard stays mounted across protected routes**: moving between
//!   protected pages does not re-verify the session
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::{Layout, Notifications, RequireSession};
use crate::models::AppRoute;
use crate::pages::{
    GameDetailPage, GamesPage, HomePage, LoginPage, NotFoundPage, RegisterPage, UserDetailPage,
    UsersPage,
};

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/login`, `#/register` → public pages
/// - everything else → rendered behind [`RequireSession`]
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move |_| log::debug!("route: {}", route.get().to_hash()));

    let public = Memo::new(move |_| route.get().is_public());

    view! {
        <Notifications />
        {move || {
            if public.get() {
                view! { <PublicPage /> }.into_any()
            } else {
                view! {
                    <RequireSession>
                        <Layout>
                            <ProtectedPage />
                        </Layout>
                    </RequireSession>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn PublicPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || match ctx.route.get() {
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        _ => view! { <LoginPage /> }.into_any(),
    }
}

#[component]
fn ProtectedPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || match ctx.route.get() {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::User { id } => view! { <UserDetailPage id=id /> }.into_any(),
        AppRoute::Games => view! { <GamesPage /> }.into_any(),
        AppRoute::Game { id } => view! { <GameDetailPage id=id /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
        AppRoute::Login | AppRoute::Register => ().into_any(),
    }
}
