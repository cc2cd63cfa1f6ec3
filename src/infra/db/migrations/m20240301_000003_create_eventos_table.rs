//! Migration: Create the eventos table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Eventos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Eventos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Eventos::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Eventos::Nombre)
                            .string_len(40)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Eventos::Tipo).string().not_null())
                    .col(ColumnDef::new(Eventos::FechaInicio).timestamp().not_null())
                    .col(ColumnDef::new(Eventos::Duracion).string().not_null())
                    .col(
                        ColumnDef::new(Eventos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Eventos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eventos_user_id")
                            .from(Eventos::Table, Eventos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Eventos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Eventos {
    Table,
    Id,
    UserId,
    Nombre,
    Tipo,
    FechaInicio,
    Duracion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
