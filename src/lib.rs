//! Clash Community API - card-game community backend.
//!
//! REST backend for a card-game community site: public player rankings, an
//! admin-managed card catalog, schedulable events with user subscription and
//! team-member profiles. Every endpoint follows the same pipeline: validate
//! the request, mutate through a repository, answer with the uniform
//! `{ok, data, message}` envelope.
//!
//! # Layers
//!
//! - **cli / commands**: clap-driven entry points (`serve`, `migrate`, `seed`)
//! - **config**: environment configuration and constants
//! - **domain**: entities and flat resource projections
//! - **services**: business rules behind traits, one per resource
//! - **infra**: SeaORM entities, repositories, migrations, seeder
//! - **api**: axum routes, handlers, middleware, extractors, OpenAPI
//! - **types**: the response envelope
//! - **errors**: AppError and the single error-to-envelope mapping
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert fixture data
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
