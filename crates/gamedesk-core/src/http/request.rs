//! Request construction.
//!
//! [`prepare`] turns a URL plus [`RequestOptions`] into a fully resolved
//! [`PreparedRequest`] without touching the network, so header and body
//! rules can be checked natively.

use serde::Serialize;
use serde_json::Value;

use crate::error::StatusError;

pub const ACCEPT: &str = "Accept";
pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

// =============================================================================
// Method
// =============================================================================

/// HTTP verbs the backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Body
// =============================================================================

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// A multipart form payload, forwarded to the transport untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multipart {
    parts: Vec<Part>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(Part::File {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Structured data, serialized as JSON.
    Json(Value),
    /// Binary form data, sent as-is.
    Multipart(Multipart),
}

/// Body as it leaves the request builder.
#[derive(Debug, Clone, PartialEq)]
pub enum WireBody {
    Text(String),
    Multipart(Multipart),
}

// =============================================================================
// Options
// =============================================================================

/// Per-call configuration for the request client.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub credential: Option<String>,
    pub body: Option<Body>,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attach a bearer token. A blank token sends no `Authorization` header.
    pub fn credential(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(token.into());
        self
    }

    /// Serialize `data` as the JSON body. A value that serializes to `null`
    /// sends no body.
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self, StatusError> {
        self.body = Some(Body::Json(serde_json::to_value(data)?));
        Ok(self)
    }

    pub fn multipart(mut self, form: Multipart) -> Self {
        self.body = Some(Body::Multipart(form));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }
}

// =============================================================================
// Prepared request
// =============================================================================

/// A request with its final URL, headers and encoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<WireBody>,
}

impl PreparedRequest {
    /// Look up a header value, ignoring name case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Insert or replace a header, ignoring name case.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    match headers
        .iter_mut()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        Some(entry) => entry.1 = value,
        None => headers.push((name.to_string(), value)),
    }
}

/// Append query parameters, joining with `&` when the URL already has a query.
pub fn with_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

/// Resolve `options` against `url`.
///
/// Header precedence: `Accept` is a default that explicit headers may
/// replace; `Authorization` comes from the credential and `Content-Type`
/// from a JSON body, both applied last.
pub fn prepare(url: &str, options: RequestOptions) -> Result<PreparedRequest, StatusError> {
    let RequestOptions {
        method,
        credential,
        body,
        headers: extra,
        params,
    } = options;

    let mut headers = vec![(ACCEPT.to_string(), JSON_MIME.to_string())];
    for (name, value) in extra {
        set_header(&mut headers, &name, value);
    }

    if let Some(token) = credential.filter(|token| !token.trim().is_empty()) {
        set_header(&mut headers, AUTHORIZATION, format!("Bearer {token}"));
    }

    let body = match body {
        Some(Body::Json(Value::Null)) | None => None,
        Some(Body::Json(value)) => {
            set_header(&mut headers, CONTENT_TYPE, JSON_MIME.to_string());
            Some(WireBody::Text(serde_json::to_string(&value)?))
        }
        Some(Body::Multipart(form)) => Some(WireBody::Multipart(form)),
    };

    Ok(PreparedRequest {
        method,
        url: with_query(url, &params),
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let req = prepare("https://api.test/games", RequestOptions::new()).unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "https://api.test/games");
        assert_eq!(req.header(ACCEPT), Some(JSON_MIME));
        assert_eq!(req.header(AUTHORIZATION), None);
        assert_eq!(req.header(CONTENT_TYPE), None);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_bearer_header_exact() {
        for token in ["abc", "1|Xy9.Zz", "token with spaces"] {
            let req = prepare("/users", RequestOptions::new().credential(token)).unwrap();
            assert_eq!(req.header("authorization"), Some(format!("Bearer {token}").as_str()));
        }
    }

    #[test]
    fn test_empty_credential_omits_authorization() {
        for token in ["", "   "] {
            let req = prepare("/users", RequestOptions::new().credential(token)).unwrap();
            assert_eq!(req.header(AUTHORIZATION), None);
        }
    }

    #[test]
    fn test_null_json_sends_no_body() {
        let opts = RequestOptions::new()
            .method(Method::Post)
            .json(&Value::Null)
            .unwrap();
        let req = prepare("/games", opts).unwrap();
        assert!(req.body.is_none());
        assert_eq!(req.header(CONTENT_TYPE), None);

        let req = prepare("/games", RequestOptions::new().json(&None::<u32>).unwrap()).unwrap();
        assert!(req.body.is_none());
    }

    #[test]
    fn test_json_body_round_trips() {
        let value = json!({ "name": "x", "tags": ["a", "b"], "nested": { "n": 1.5 } });
        let req = prepare("/games", RequestOptions::new().method(Method::Post).json(&value).unwrap())
            .unwrap();

        assert_eq!(req.header(CONTENT_TYPE), Some(JSON_MIME));
        let Some(WireBody::Text(text)) = &req.body else {
            panic!("expected text body");
        };
        let decoded: Value = serde_json::from_str(text).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_multipart_forwarded_without_content_type() {
        let form = Multipart::new().file("image", "cover.png", "image/png", vec![0x89, 0x50, 0x4e]);
        let req = prepare("/upload-image", RequestOptions::new().multipart(form.clone())).unwrap();

        assert_eq!(req.header(CONTENT_TYPE), None);
        assert_eq!(req.body, Some(WireBody::Multipart(form)));
    }

    #[test]
    fn test_explicit_accept_wins() {
        let req = prepare("/x", RequestOptions::new().header("accept", "text/plain")).unwrap();
        assert_eq!(req.header(ACCEPT), Some("text/plain"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_extra_headers_merged() {
        let req = prepare("/x", RequestOptions::new().header("X-Locale", "nl")).unwrap();
        assert_eq!(req.header("x-locale"), Some("nl"));
        assert_eq!(req.header(ACCEPT), Some(JSON_MIME));
    }

    #[test]
    fn test_query_params() {
        let opts = RequestOptions::new().param("page", 2).param("q", "tom & jerry");
        let req = prepare("/games", opts).unwrap();
        assert_eq!(req.url, "/games?page=2&q=tom+%26+jerry");

        let req = prepare("/games?sort=name", RequestOptions::new().param("page", 1)).unwrap();
        assert_eq!(req.url, "/games?sort=name&page=1");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::default().as_str(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(Method::Patch.as_str(), "PATCH");
    }
}
