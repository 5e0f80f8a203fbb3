//! End-to-end session and request flows against a recording transport.

use gamedesk_core::config::AppConfig;
use gamedesk_core::http::{AUTHORIZATION, Method, Payload, RequestClient, RequestOptions};
use gamedesk_core::mock::MockTransport;
use gamedesk_core::session::{CredentialStore, MemoryStore, Verification};
use gamedesk_core::{ApiClient, Credential, SessionGuard, SessionPhase, StatusError};
use serde_json::json;

fn api(transport: &MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(AppConfig::new("https://api.test"), transport.clone())
}

#[tokio::test]
async fn no_credential_redirects_without_network() {
    let store = MemoryStore::new();
    let transport = MockTransport::new();
    let mut guard = SessionGuard::new(Verification::Remote);

    let phase = guard.resolve(&store, &api(&transport)).await;

    assert_eq!(phase, &SessionPhase::Redirecting);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn verified_credential_resolves() {
    let store = MemoryStore::with_token("abc");
    let transport = MockTransport::new();
    transport.respond_json(200, r#"{"message":"ok"}"#);
    let mut guard = SessionGuard::new(Verification::Remote);

    let phase = guard.resolve(&store, &api(&transport)).await;

    assert_eq!(phase.credential().map(Credential::as_str), Some("abc"));
    let sent = transport.single_request();
    assert_eq!(sent.url, "https://api.test/verification");
    assert_eq!(sent.header(AUTHORIZATION), Some("Bearer abc"));
}

#[tokio::test]
async fn rejected_credential_is_cleared_and_stays_cleared() {
    let store = MemoryStore::with_token("abc");
    let transport = MockTransport::new();
    transport.respond(401, None, "Unauthenticated.");

    let mut guard = SessionGuard::new(Verification::Remote);
    assert!(guard.resolve(&store, &api(&transport)).await.is_redirecting());
    assert!(store.load().is_none());

    // A later mount goes straight to login.
    let mut remount = SessionGuard::new(Verification::Remote);
    assert!(remount.resolve(&store, &api(&transport)).await.is_redirecting());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn unanswered_verification_never_grants_access() {
    let store = MemoryStore::with_token("abc");
    let transport = MockTransport::new();
    let client = api(&transport);
    let mut guard = SessionGuard::new(Verification::Remote);

    let credential = guard.begin(&store).expect("credential needs verification");
    assert_eq!(guard.phase(), &SessionPhase::Checking);

    // The transport never answers: poll once and give up.
    let verify = std::pin::pin!(gamedesk_core::session::Verifier::verify(&client, &credential));
    let waker = std::task::Waker::noop();
    let mut cx = std::task::Context::from_waker(waker);
    assert!(verify.poll(&mut cx).is_pending());
    assert!(!guard.phase().is_resolved());
}

#[tokio::test]
async fn unauthorized_privileged_call_ends_session() {
    let store = MemoryStore::with_token("abc");
    let transport = MockTransport::new();
    transport.respond_json(200, "{}");
    transport.respond(401, None, "Unauthenticated.");
    let client = api(&transport);

    let mut guard = SessionGuard::new(Verification::Remote);
    let credential = guard
        .resolve(&store, &client)
        .await
        .credential()
        .cloned()
        .expect("resolved");

    let err = client.users(&credential).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(guard.invalidate(&store).is_redirecting());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn delete_user_with_credential() {
    let transport = MockTransport::new();
    transport.respond(204, None, "");
    let client = RequestClient::new(transport.clone());

    let result = client
        .fetch(
            "https://api.test/users/42",
            RequestOptions::new().method(Method::Delete).credential("abc"),
        )
        .await;

    assert_eq!(result, Ok(Payload::Empty));
    let sent = transport.single_request();
    assert_eq!(sent.header(AUTHORIZATION), Some("Bearer abc"));
    assert!(sent.body.is_none());
}

#[tokio::test]
async fn json_body_against_server_error() {
    let transport = MockTransport::new();
    transport.respond(500, Some("text/plain"), "boom");
    let client = RequestClient::new(transport.clone());

    let options = RequestOptions::new()
        .method(Method::Post)
        .json(&json!({ "name": "x" }))
        .expect("serializable");
    let err = client
        .fetch("https://api.test/games", options)
        .await
        .unwrap_err();

    assert_eq!(err, StatusError::new("boom", 500));
}
