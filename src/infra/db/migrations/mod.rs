//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users_table;
mod m20240301_000002_create_cartas_table;
mod m20240301_000003_create_eventos_table;
mod m20240301_000004_create_evento_user_table;
mod m20240301_000005_create_members_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users_table::Migration),
            Box::new(m20240301_000002_create_cartas_table::Migration),
            Box::new(m20240301_000003_create_eventos_table::Migration),
            Box::new(m20240301_000004_create_evento_user_table::Migration),
            Box::new(m20240301_000005_create_members_table::Migration),
        ]
    }
}
