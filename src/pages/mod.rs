//! Top-level pages, one per route.
//!
//! - [`LoginPage`], [`RegisterPage`] - public
//! - everything else renders behind `RequireSession`

mod game_detail;
mod games;
mod home;
mod login;
mod not_found;
mod register;
mod user_detail;
mod users;

pub use game_detail::GameDetailPage;
pub use games::GamesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use user_detail::UserDetailPage;
pub use users::UsersPage;
