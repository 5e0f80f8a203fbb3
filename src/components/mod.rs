//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`session`] - Session gate for protected pages
//! - [`layout`] - Navigation chrome
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`notifications`] - Toasts
//! - [`modal`] - Dialogs

pub mod icons;
mod layout;
mod loading;
mod modal;
mod notifications;
pub mod router;
pub mod session;

pub use layout::Layout;
pub use loading::Loading;
pub use modal::{ConfirmDialog, Modal};
pub use notifications::Notifications;
pub use router::AppRouter;
pub use session::{RequireSession, SessionContext, use_session};
