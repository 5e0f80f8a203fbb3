//! Recording transport for tests.
//!
//! Responses are queued up front and handed out in order; every request is
//! kept for inspection. A transport with an empty queue never resolves,
//! which models a backend that hangs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::{Future, pending};
use std::pin::Pin;
use std::rc::Rc;

use crate::error::TransportError;
use crate::http::{PreparedRequest, RawResponse, Transport};

#[derive(Debug, Default)]
struct Inner {
    queue: VecDeque<Result<RawResponse, TransportError>>,
    requests: Vec<PreparedRequest>,
}

/// In-memory [`Transport`] with canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(&self, status: u16, content_type: Option<&str>, body: &str) {
        self.inner.borrow_mut().queue.push_back(Ok(RawResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }));
    }

    /// Queue a JSON response.
    pub fn respond_json(&self, status: u16, body: &str) {
        self.respond(status, Some("application/json"), body);
    }

    /// Queue a transport failure.
    pub fn fail(&self, err: TransportError) {
        self.inner.borrow_mut().queue.push_back(Err(err));
    }

    /// All requests sent so far.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.inner.borrow().requests.clone()
    }

    /// The only request sent so far.
    ///
    /// # Panics
    /// Panics unless exactly one request was sent.
    pub fn single_request(&self) -> PreparedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

impl Transport for MockTransport {
    fn send(
        &self,
        request: PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        let next = inner.queue.pop_front();

        let fut: Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>>>> = match next {
            Some(result) => Box::pin(async move { result }),
            None => Box::pin(pending()),
        };
        fut
    }
}
