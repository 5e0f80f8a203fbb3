//! Hash-based routing.
//!
//! URL format: `#/users/42`. The hash is the source of truth; the router
//! mirrors it into a signal.

use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash
    Home,
    Login,
    Register,
    Users,
    User { id: u64 },
    Games,
    Game { id: u64 },
    /// Anything else, kept for display.
    NotFound { path: String },
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["users"] => Self::Users,
            ["games"] => Self::Games,
            ["users", id] => match id.parse() {
                Ok(id) => Self::User { id },
                Err(_) => Self::not_found(path),
            },
            ["games", id] => match id.parse() {
                Ok(id) => Self::Game { id },
                Err(_) => Self::not_found(path),
            },
            _ => Self::not_found(path),
        }
    }

    fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Login => "#/login".to_string(),
            Self::Register => "#/register".to_string(),
            Self::Users => "#/users".to_string(),
            Self::User { id } => format!("#/users/{}", id),
            Self::Games => "#/games".to_string(),
            Self::Game { id } => format!("#/games/{}", id),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_hash("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_hash("#/users/"), AppRoute::Users);
        assert_eq!(AppRoute::from_hash("#/users/42"), AppRoute::User { id: 42 });
        assert_eq!(AppRoute::from_hash("#/games"), AppRoute::Games);
        assert_eq!(AppRoute::from_hash("#/games/7"), AppRoute::Game { id: 7 });
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(
            AppRoute::from_hash("#/users/abc"),
            AppRoute::NotFound {
                path: "users/abc".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/settings"),
            AppRoute::NotFound {
                path: "settings".to_string()
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(AppRoute::Login.to_hash(), "#/login");
        assert_eq!(AppRoute::User { id: 42 }.to_hash(), "#/users/42");
        assert_eq!(AppRoute::Game { id: 3 }.to_hash(), "#/games/3");
    }

    #[test]
    fn test_hash_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Register,
            AppRoute::Users,
            AppRoute::Games,
            AppRoute::User { id: 1 },
        ] {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_public_routes() {
        assert!(AppRoute::Login.is_public());
        assert!(AppRoute::Register.is_public());
        assert!(!AppRoute::Home.is_public());
        assert!(!AppRoute::Game { id: 1 }.is_public());
    }
}
