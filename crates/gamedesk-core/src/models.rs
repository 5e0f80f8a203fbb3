//! Backend resource and payload types.

use serde::{Deserialize, Serialize};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Path under `/storage`, empty or missing when the game has no image.
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Game {
    /// Storage path of the cover image, if one was uploaded.
    pub fn image(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|path| !path.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    /// Credentials for the login that follows a successful registration.
    pub fn login(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

/// Body for creating or replacing a game. `image_path` is empty when no
/// image was uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGame {
    pub name: String,
    pub description: String,
    pub image_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub path: String,
}
