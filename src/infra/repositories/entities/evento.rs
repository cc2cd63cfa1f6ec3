//! Evento database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Evento;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eventos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Creator
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub nombre: String,
    pub tipo: String,
    pub fecha_inicio: DateTime,
    pub duracion: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    Creator,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Evento {
    fn from(model: Model) -> Self {
        Evento {
            id: model.id,
            user_id: model.user_id,
            nombre: model.nombre,
            tipo: model.tipo,
            fecha_inicio: model.fecha_inicio,
            duracion: model.duracion,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
