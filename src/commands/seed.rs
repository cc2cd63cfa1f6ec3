//! Seed command - inserts development fixture data.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{seed, Database};

/// Execute the seed command. Migrations run first so a fresh database works.
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await;

    seed::run(db.connection()).await?;
    tracing::info!("Database seeded");

    Ok(())
}
