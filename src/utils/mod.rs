//! Browser glue for the core crate.
//!
//! Provides:
//! - [`BrowserTransport`] - Fetch API transport for the request client
//! - [`LocalStore`] - localStorage-backed credential store
//! - [`dom`] - window, storage, file and hash helpers

pub mod dom;
mod fetch;
mod storage;

pub use fetch::BrowserTransport;
pub use storage::LocalStore;
