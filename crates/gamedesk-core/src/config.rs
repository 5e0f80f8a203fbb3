//! Application configuration.
//!
//! Values come from the compile-time environment and are read once at
//! startup through [`AppConfig::from_env`].

use std::str::FromStr;

use crate::session::Verification;

// =============================================================================
// Constants
// =============================================================================

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Backend used when `GAMEDESK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// How long a notification stays on screen before dismissing itself.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

// =============================================================================
// AppConfig
// =============================================================================

/// Runtime configuration shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash.
    pub api_base_url: String,
    pub verification: Verification,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            verification: Verification::Remote,
            log_level: log::Level::Info,
        }
    }

    /// Configuration baked in at compile time.
    ///
    /// - `GAMEDESK_API_URL`: backend base URL
    /// - `GAMEDESK_VERIFY_SESSION`: `false` trusts stored tokens without a round trip
    /// - `GAMEDESK_LOG`: console log level
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GAMEDESK_API_URL"),
            option_env!("GAMEDESK_VERIFY_SESSION"),
            option_env!("GAMEDESK_LOG"),
        )
    }

    /// Build from raw variable values; unset or unparsable values keep
    /// their defaults.
    pub fn from_values(api_url: Option<&str>, verify: Option<&str>, level: Option<&str>) -> Self {
        let mut config = match api_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };

        if let Some(flag) = verify.and_then(parse_flag) {
            config.verification = if flag {
                Verification::Remote
            } else {
                Verification::Skip
            };
        }

        if let Some(level) = level.and_then(|l| log::Level::from_str(l.trim()).ok()) {
            config.log_level = level;
        }

        config
    }

    /// Absolute URL for a backend path such as `"/users/42"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.verification, Verification::Remote);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::new("https://example.test/api/");
        assert_eq!(config.api_base_url, "https://example.test/api");
        assert_eq!(config.endpoint("/users/42"), "https://example.test/api/users/42");
        assert_eq!(config.endpoint("games"), "https://example.test/api/games");
    }

    #[test]
    fn test_blank_url_uses_default() {
        let config = AppConfig::from_values(Some("  "), None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_verification_flag() {
        let off = AppConfig::from_values(None, Some("false"), None);
        assert_eq!(off.verification, Verification::Skip);
        let on = AppConfig::from_values(None, Some("YES"), None);
        assert_eq!(on.verification, Verification::Remote);
        let junk = AppConfig::from_values(None, Some("maybe"), None);
        assert_eq!(junk.verification, Verification::Remote);
    }

    #[test]
    fn test_log_level() {
        let config = AppConfig::from_values(None, None, Some("debug"));
        assert_eq!(config.log_level, log::Level::Debug);
        let config = AppConfig::from_values(None, None, Some("loud"));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
