//! UI configuration.
//!
//! Backend settings live in `gamedesk_core::config`; this module only holds
//! presentation constants.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "Laravel Casus";

/// Landing page heading.
pub const HOME_TITLE: &str = "Laravel API";

/// Landing page text.
pub const HOME_TAGLINE: &str =
    "Mijn wonderbaarlijk mooie app welke een API gemaakt in Laravel gebruikt.";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
