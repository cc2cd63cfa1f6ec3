//! Repository layer - Data access abstraction
//!
//! Repositories take validated input structs and return domain records or
//! typed failures; no handler or service touches the ORM directly.

pub(crate) mod entities;

mod carta_repository;
mod evento_repository;
mod member_repository;
mod user_repository;

pub use carta_repository::{CartaRepository, CartaStore};
pub use evento_repository::{EventoRepository, EventoStore};
pub use member_repository::{MemberRepository, MemberStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use carta_repository::MockCartaRepository;
#[cfg(test)]
pub use evento_repository::MockEventoRepository;
#[cfg(test)]
pub use member_repository::MockMemberRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
