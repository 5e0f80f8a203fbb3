//! Platform-independent core of the gamedesk admin front-end.
//!
//! This crate provides:
//! - [`http`] - request construction and the shared [`RequestClient`]
//! - [`session`] - credential storage and the [`SessionGuard`] state machine
//! - [`api`] - typed endpoints for users, games and images
//! - [`error`] - [`StatusError`] and its [`ErrorKind`] classification
//!
//! Nothing here touches the browser; the web crate supplies a
//! [`Transport`] and a [`CredentialStore`] backed by `fetch` and
//! `localStorage`.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod session;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use api::ApiClient;
pub use config::AppConfig;
pub use error::{ErrorKind, StatusError};
pub use http::{RequestClient, Transport};
pub use session::{Credential, CredentialStore, SessionGuard, SessionPhase};
