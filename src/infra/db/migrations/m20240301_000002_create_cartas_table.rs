//! Migration: Create the cartas catalog table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cartas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cartas::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Cartas::Photo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Cartas::Nombre)
                            .string_len(40)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Cartas::Role).string().not_null())
                    .col(ColumnDef::new(Cartas::CosteElixir).small_integer().not_null())
                    .col(
                        ColumnDef::new(Cartas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cartas::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cartas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cartas {
    Table,
    Id,
    Photo,
    Nombre,
    Role,
    CosteElixir,
    CreatedAt,
    UpdatedAt,
}
