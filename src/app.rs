//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup following Leptos conventions.

use gamedesk_core::{ApiClient, AppConfig};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AppRouter;
use crate::models::{AppRoute, Notifications, Tone};
use crate::utils::{BrowserTransport, dom};
use gamedesk_core::config::NOTIFICATION_TIMEOUT_MS;

/// API client used by every view.
pub type Api = ApiClient<BrowserTransport>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and available from any child
/// component via `use_context::<AppContext>()`.
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client, configured once at startup.
    pub api: StoredValue<Api>,
    /// Current route, mirrored from the URL hash.
    pub route: RwSignal<AppRoute>,
    /// Visible toast notifications.
    pub notifications: RwSignal<Notifications>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: StoredValue::new(ApiClient::new(config, BrowserTransport)),
            route: RwSignal::new(AppRoute::current()),
            notifications: RwSignal::new(Notifications::default()),
        }
    }

    /// A handle to the API client for use inside async blocks.
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// Navigate to `route`, adding a history entry.
    pub fn navigate(&self, route: AppRoute) {
        dom::set_hash(&route.to_hash());
        self.route.set(route);
    }

    /// Navigate to `route`, replacing the current history entry.
    pub fn redirect(&self, route: AppRoute) {
        dom::replace_hash(&route.to_hash());
        self.route.set(route);
    }

    /// Show a notification that dismisses itself after a delay.
    pub fn notify(&self, tone: Tone, message: impl Into<String>) {
        let notifications = self.notifications;
        let Some(id) = notifications.try_update(|n| n.push(tone, message)) else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            notifications.try_update(|n| n.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Tone::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.notify(Tone::Error, message);
    }
}

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
