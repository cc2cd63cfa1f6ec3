//! Domain layer - Core business entities and their flat JSON projections.
//!
//! Resources are pure record -> field-map projections with a fixed field
//! order; they carry no derived data.

pub mod carta;
pub mod evento;
pub mod member;
pub mod password;
pub mod user;

pub use carta::{Carta, CartaInput, CartaResource};
pub use evento::{format_fecha_inicio, parse_fecha_inicio, Evento, EventoInput, EventoResource};
pub use member::{Member, MemberInput, MemberResource};
pub use password::Password;
pub use user::{User, UserResource, UserRole};
