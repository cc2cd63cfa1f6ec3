//! Business logic services.
//!
//! Each service owns one resource's use cases and talks to persistence
//! through repository traits, keeping handlers free of business rules.

mod auth_service;
mod carta_service;
mod container;
mod evento_service;
mod member_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use carta_service::{CartaManager, CartaService};
pub use container::Services;
pub use evento_service::{EventoDraft, EventoManager, EventoService};
pub use member_service::{MemberManager, MemberService};
pub use user_service::{UserManager, UserService};
