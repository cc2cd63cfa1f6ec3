//! Infrastructure: database access, migrations, repositories and fixtures.

pub mod db;
pub mod repositories;
pub mod seed;

pub use db::Database;
