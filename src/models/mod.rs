//! Data models and types for the application.
//!
//! Contains UI-side types for:
//! - [`AppRoute`] - Hash-based navigation
//! - [`Notifications`], [`Tone`] - Toast notifications
//!
//! Backend resources live in `gamedesk_core::models`.

mod notification;
mod route;

pub use notification::{Notification, Notifications, Tone};
pub use route::AppRoute;
