//! The request client: one network call per invocation, uniform decoding,
//! every failure normalized into [`StatusError`].

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::request::{JSON_MIME, PreparedRequest, RequestOptions, prepare};
use crate::error::{StatusError, TransportError};

/// Response as read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains(JSON_MIME))
    }
}

/// Something that can execute a prepared request.
///
/// Futures are not required to be `Send`; the browser runs everything on
/// one thread.
pub trait Transport {
    fn send(
        &self,
        request: PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// Decoded success body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
    /// No body (e.g. 204 No Content).
    Empty,
}

impl Payload {
    /// Decode into `T`. Text decodes as a JSON string, an empty body as `null`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, StatusError> {
        let value = match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
            Self::Empty => Value::Null,
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Single chokepoint for outbound backend calls.
#[derive(Debug, Clone)]
pub struct RequestClient<T> {
    transport: T,
}

impl<T: Transport> RequestClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Issue one request and decode the response.
    pub async fn fetch(&self, url: &str, options: RequestOptions) -> Result<Payload, StatusError> {
        let request = prepare(url, options)?;
        let method = request.method;
        log::debug!("{method} {}", request.url);

        let response = self.transport.send(request).await.map_err(|err| {
            log::warn!("{method} {url} failed: {err}");
            StatusError::from(err)
        })?;

        if !response.is_success() {
            log::debug!("{method} {url} -> {}", response.status);
            return Err(StatusError::from_response(&response.body, response.status));
        }

        if response.body.trim().is_empty() {
            return Ok(Payload::Empty);
        }

        if response.is_json() {
            let value = serde_json::from_str(&response.body)?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(response.body))
        }
    }

    /// [`fetch`](Self::fetch) and decode the body into `D`.
    pub async fn fetch_json<D: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<D, StatusError> {
        self.fetch(url, options).await?.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::{AUTHORIZATION, CONTENT_TYPE, Method, WireBody};
    use crate::mock::MockTransport;
    use serde_json::json;

    fn client(transport: &MockTransport) -> RequestClient<MockTransport> {
        RequestClient::new(transport.clone())
    }

    #[tokio::test]
    async fn test_delete_with_credential_no_content() {
        let transport = MockTransport::new();
        transport.respond(204, None, "");

        let result = client(&transport)
            .fetch(
                "https://api.test/users/42",
                RequestOptions::new().method(Method::Delete).credential("abc"),
            )
            .await;

        assert_eq!(result, Ok(Payload::Empty));
        let sent = transport.single_request();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, "https://api.test/users/42");
        assert_eq!(sent.header(AUTHORIZATION), Some("Bearer abc"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_server_error_carries_body_and_status() {
        let transport = MockTransport::new();
        transport.respond(500, Some("text/plain"), "boom");

        let options = RequestOptions::new()
            .method(Method::Post)
            .json(&json!({ "name": "x" }))
            .unwrap();
        let err = client(&transport)
            .fetch("https://api.test/games", options)
            .await
            .unwrap_err();

        assert_eq!(err, StatusError::new("boom", 500));
        let sent = transport.single_request();
        assert_eq!(sent.header(CONTENT_TYPE), Some(JSON_MIME));
        assert_eq!(sent.body, Some(WireBody::Text(r#"{"name":"x"}"#.into())));
    }

    #[tokio::test]
    async fn test_every_failure_status_is_preserved() {
        for status in [400, 401, 403, 404, 409, 422, 429, 500, 502, 503] {
            let transport = MockTransport::new();
            transport.respond(status, None, "");
            let err = client(&transport)
                .fetch("/x", RequestOptions::new())
                .await
                .unwrap_err();
            assert_eq!(err.status, status);
            assert_eq!(err.message, "Request failed");
        }
    }

    #[tokio::test]
    async fn test_json_response_decoded() {
        let transport = MockTransport::new();
        transport.respond(200, Some("application/json; charset=utf-8"), r#"{"id":1}"#);

        let payload = client(&transport).fetch("/x", RequestOptions::new()).await;
        assert_eq!(payload, Ok(Payload::Json(json!({ "id": 1 }))));
    }

    #[tokio::test]
    async fn test_text_response_returned_raw() {
        let transport = MockTransport::new();
        transport.respond(200, Some("text/html"), "<p>ok</p>");

        let payload = client(&transport).fetch("/x", RequestOptions::new()).await;
        assert_eq!(payload, Ok(Payload::Text("<p>ok</p>".into())));
    }

    #[tokio::test]
    async fn test_malformed_json_becomes_server_error() {
        let transport = MockTransport::new();
        transport.respond(200, Some("application/json"), "{not json");

        let err = client(&transport)
            .fetch("/x", RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.status, 500);
        assert!(err.message.starts_with("JSON parse error"));
    }

    #[tokio::test]
    async fn test_network_failure_wrapped() {
        let transport = MockTransport::new();
        transport.fail(TransportError::Network("Failed to fetch".into()));

        let err = client(&transport)
            .fetch("/x", RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err, StatusError::new("Failed to fetch", 500));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_json_typed() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Token {
            token: String,
        }

        let transport = MockTransport::new();
        transport.respond(200, Some("application/json"), r#"{"token":"t0k"}"#);

        let token: Token = client(&transport)
            .fetch_json("/login", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(token.token, "t0k");
    }

    #[test]
    fn test_payload_decode_empty_as_unit() {
        assert_eq!(Payload::Empty.decode::<()>(), Ok(()));
        assert_eq!(Payload::Empty.decode::<Option<u32>>(), Ok(None));
    }
}
