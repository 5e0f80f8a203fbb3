//! Outbound HTTP: request construction and the shared request client.
//!
//! - [`prepare`] - resolve URL, headers and body for one call
//! - [`RequestClient`] - send through a [`Transport`] and normalize errors

mod client;
mod request;

pub use client::{Payload, RawResponse, RequestClient, Transport};
pub use request::{
    ACCEPT, AUTHORIZATION, Body, CONTENT_TYPE, JSON_MIME, Method, Multipart, Part,
    PreparedRequest, RequestOptions, WireBody, prepare, with_query,
};
