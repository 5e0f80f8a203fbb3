//! Session gate for protected pages.
//!
//! [`RequireSession`] drives a [`SessionGuard`] once per mount: it reads the
//! stored token, verifies it, and either renders its children or sends the
//! visitor to the login page. Children reach the resolved credential through
//! [`SessionContext`].

use gamedesk_core::session::{self, SessionGuard, SessionPhase};
use gamedesk_core::{Credential, StatusError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{Api, AppContext};
use crate::components::Loading;
use crate::models::AppRoute;
use crate::utils::LocalStore;

// ============================================================================
// SessionContext
// ============================================================================

/// Resolved session, provided to everything rendered behind the guard.
#[derive(Clone, Copy)]
pub struct SessionContext {
    credential: StoredValue<Credential>,
    phase: RwSignal<SessionPhase>,
    app: AppContext,
}

impl SessionContext {
    pub fn credential(&self) -> Credential {
        self.credential.get_value()
    }

    /// Forget the stored token and go to the login page.
    pub fn invalidate(&self) {
        self.phase.try_set(session::invalidate(&LocalStore));
    }

    pub fn logout(&self) {
        self.invalidate();
        self.app.success("Logged out.");
    }

    /// Route a failed privileged call: a rejected token ends the session,
    /// anything else becomes an error notification.
    pub fn report(&self, err: &StatusError) {
        if err.is_unauthorized() {
            log::info!("credential rejected, ending session");
            self.invalidate();
        } else {
            self.app.error(err.user_message());
        }
    }

    /// Re-verify `credential` after an account was deleted.
    ///
    /// Returns `false`, ending the session, when the backend no longer
    /// accepts it: the signed-in account deleted itself.
    pub async fn recheck(&self, api: &Api, credential: &Credential) -> bool {
        match api.verify_session(credential).await {
            Err(err) if err.is_unauthorized() => {
                log::info!("signed-in account was deleted");
                self.invalidate();
                false
            }
            _ => true,
        }
    }

    /// [`report`](Self::report) every failed load of `resource`.
    pub fn watch<T>(&self, resource: LocalResource<Result<T, StatusError>>)
    where
        T: Clone + 'static,
    {
        let session = *self;
        Effect::new(move |_| {
            if let Some(Err(err)) = resource.get() {
                session.report(&err);
            }
        });
    }
}

/// Session of the enclosing [`RequireSession`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext must be provided by RequireSession")
}

// ============================================================================
// RequireSession
// ============================================================================

/// Render `children` only for a verified session.
///
/// Shows a loading indicator while the token is checked. Without a token,
/// or once the backend rejects it and it is cleared, the login page
/// replaces the current history entry.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let phase = RwSignal::new(SessionPhase::Unchecked);

    let api = ctx.api();
    spawn_local(async move {
        let mut guard = SessionGuard::new(api.config().verification);
        let store = LocalStore;

        if let Some(credential) = guard.begin(&store) {
            phase.try_set(guard.phase().clone());
            let outcome = api.verify_session(&credential).await;
            if phase.is_disposed() {
                log::debug!("guard unmounted, dropping verification result");
                return;
            }
            guard.settle(&store, &credential, outcome);
        }
        phase.try_set(guard.phase().clone());
    });

    Effect::new(move |_| {
        if phase.with(SessionPhase::is_redirecting) {
            ctx.redirect(AppRoute::Login);
        }
    });

    move || match phase.get() {
        SessionPhase::Resolved(credential) => {
            provide_context(SessionContext {
                credential: StoredValue::new(credential),
                phase,
                app: ctx,
            });
            children().into_any()
        }
        _ => view! { <Loading /> }.into_any(),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gamedesk_core::{AppConfig, CredentialStore};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_missing_token_shows_placeholder_then_login() {
        let _ = leptos::task::Executor::init_wasm_bindgen();
        LocalStore.clear().unwrap();

        let document = document();
        let root = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&root).unwrap();

        let captured = Rc::new(Cell::new(None::<AppContext>));
        let handle = {
            let captured = Rc::clone(&captured);
            mount_to(root.clone(), move || {
                let ctx = AppContext::new(AppConfig::default());
                provide_context(ctx);
                captured.set(Some(ctx));
                view! {
                    <RequireSession>
                        <p>"guarded content"</p>
                    </RequireSession>
                }
            })
        };
        let ctx = captured.get().unwrap();

        assert!(root.inner_html().contains("role=\"status\""));
        assert!(!root.inner_html().contains("guarded content"));

        for _ in 0..5 {
            TimeoutFuture::new(10).await;
        }

        assert_eq!(ctx.route.get_untracked(), AppRoute::Login);
        assert!(!root.inner_html().contains("guarded content"));
        assert!(LocalStore.load().is_none());

        drop(handle);
        root.remove();
    }
}
