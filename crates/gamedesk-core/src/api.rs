//! Typed backend API.
//!
//! One method per endpoint, all going through the shared [`RequestClient`].
//! Methods that look up a single resource return `Ok(None)` when the
//! backend answers 404 or `null`, so views can render an inline
//! "not found" state instead of an error.

use std::future::Future;

use crate::config::AppConfig;
use crate::error::StatusError;
use crate::http::{Method, Multipart, RequestClient, RequestOptions, Transport};
use crate::models::{
    Game, LoginRequest, NewGame, RegisterRequest, TokenResponse, UploadResponse, User, UserUpdate,
};
use crate::session::{Credential, Verifier};

/// Multipart field name the upload endpoint expects.
pub const IMAGE_FIELD: &str = "image";

/// Client for the admin backend.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    client: RequestClient<T>,
    config: AppConfig,
}

fn authed(credential: &Credential) -> RequestOptions {
    RequestOptions::new().credential(credential.as_str())
}

/// Map a missing resource to `None`.
fn optional<D>(result: Result<Option<D>, StatusError>) -> Result<Option<D>, StatusError> {
    match result {
        Err(err) if err.is_not_found() => Ok(None),
        other => other,
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: AppConfig, transport: T) -> Self {
        Self {
            client: RequestClient::new(transport),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn send(&self, path: &str, options: RequestOptions) -> Result<(), StatusError> {
        self.client.fetch(&self.url(path), options).await.map(|_| ())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange email and password for a credential.
    pub async fn login(&self, request: &LoginRequest) -> Result<Credential, StatusError> {
        let options = RequestOptions::new().method(Method::Post).json(request)?;
        let response: TokenResponse = self.client.fetch_json(&self.url("/login"), options).await?;
        Credential::new(response.token)
            .ok_or_else(|| StatusError::unexpected("login response carried no token"))
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), StatusError> {
        let options = RequestOptions::new().method(Method::Post).json(request)?;
        self.send("/register", options).await
    }

    /// Register, then log in with the same email and password.
    pub async fn register_and_login(
        &self,
        request: &RegisterRequest,
    ) -> Result<Credential, StatusError> {
        self.register(request).await?;
        self.login(&request.login()).await
    }

    /// Confirm the credential is still accepted.
    pub async fn verify_session(&self, credential: &Credential) -> Result<(), StatusError> {
        self.send("/verification", authed(credential)).await
    }

    // =========================================================================
    // Users
    // =========================================================================

    pub async fn users(&self, credential: &Credential) -> Result<Vec<User>, StatusError> {
        self.client
            .fetch_json(&self.url("/users"), authed(credential))
            .await
    }

    pub async fn user(&self, credential: &Credential, id: u64) -> Result<Option<User>, StatusError> {
        optional(
            self.client
                .fetch_json(&self.url(&format!("/users/{id}")), authed(credential))
                .await,
        )
    }

    pub async fn update_user(
        &self,
        credential: &Credential,
        id: u64,
        update: &UserUpdate,
    ) -> Result<(), StatusError> {
        let options = authed(credential).method(Method::Put).json(update)?;
        self.send(&format!("/users/{id}"), options).await
    }

    pub async fn delete_user(&self, credential: &Credential, id: u64) -> Result<(), StatusError> {
        let options = authed(credential).method(Method::Delete);
        self.send(&format!("/users/{id}"), options).await
    }

    // =========================================================================
    // Games
    // =========================================================================

    pub async fn games(&self, credential: &Credential) -> Result<Vec<Game>, StatusError> {
        self.client
            .fetch_json(&self.url("/games"), authed(credential))
            .await
    }

    pub async fn game(&self, credential: &Credential, id: u64) -> Result<Option<Game>, StatusError> {
        optional(
            self.client
                .fetch_json(&self.url(&format!("/games/{id}")), authed(credential))
                .await,
        )
    }

    pub async fn create_game(&self, credential: &Credential, game: &NewGame) -> Result<(), StatusError> {
        let options = authed(credential).method(Method::Post).json(game)?;
        self.send("/games", options).await
    }

    pub async fn update_game(
        &self,
        credential: &Credential,
        id: u64,
        game: &NewGame,
    ) -> Result<(), StatusError> {
        let options = authed(credential).method(Method::Put).json(game)?;
        self.send(&format!("/games/{id}"), options).await
    }

    pub async fn delete_game(&self, credential: &Credential, id: u64) -> Result<(), StatusError> {
        let options = authed(credential).method(Method::Delete);
        self.send(&format!("/games/{id}"), options).await
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Upload an image and return its storage path.
    pub async fn upload_image(
        &self,
        credential: &Credential,
        form: Multipart,
    ) -> Result<String, StatusError> {
        let options = authed(credential).method(Method::Post).multipart(form);
        let response: UploadResponse = self
            .client
            .fetch_json(&self.url("/upload-image"), options)
            .await?;
        Ok(response.path)
    }

    /// Public URL of a stored asset.
    pub fn storage_url(&self, path: &str) -> String {
        self.url(&format!("/storage/{}", path.trim_start_matches('/')))
    }
}

impl<T: Transport> Verifier for ApiClient<T> {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<(), StatusError>> {
        self.verify_session(credential)
    }
}

/// Friendlier wording for the messages the login endpoint is known to send.
pub fn login_error_message(err: &StatusError) -> String {
    match err.message.as_str() {
        "Email doesn't exist" => "Email doesn't exist. Please register first.".to_string(),
        "Password is incorrect" => "Password is incorrect. Please try again.".to_string(),
        _ => err.user_message().to_string(),
    }
}
