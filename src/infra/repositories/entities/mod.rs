//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod carta;
pub mod evento;
pub mod evento_user;
pub mod member;
pub mod user;
