//! HTTP request handlers.

pub mod auth_handler;
pub mod carta_handler;
pub mod evento_handler;
pub mod member_handler;
pub mod user_handler;
pub mod welcome_handler;

pub use auth_handler::{auth_protected_routes, auth_routes};
pub use carta_handler::carta_routes;
pub use evento_handler::evento_routes;
pub use member_handler::member_routes;
pub use user_handler::{ranking_routes, user_admin_routes, user_routes};
pub use welcome_handler::welcome;
