//! Migration: Create the evento_user subscription pivot.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventoUser::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EventoUser::EventoId).uuid().not_null())
                    .col(ColumnDef::new(EventoUser::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(EventoUser::EventoId)
                            .col(EventoUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evento_user_evento_id")
                            .from(EventoUser::Table, EventoUser::EventoId)
                            .to(Eventos::Table, Eventos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evento_user_user_id")
                            .from(EventoUser::Table, EventoUser::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventoUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EventoUser {
    Table,
    EventoId,
    UserId,
}

#[derive(Iden)]
enum Eventos {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
