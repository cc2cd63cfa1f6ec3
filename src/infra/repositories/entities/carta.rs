//! Carta database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Carta;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cartas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub photo: String,
    #[sea_orm(unique)]
    pub nombre: String,
    pub role: String,
    pub coste_elixir: i16,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Carta {
    fn from(model: Model) -> Self {
        Carta {
            id: model.id,
            photo: model.photo,
            nombre: model.nombre,
            role: model.role,
            coste_elixir: model.coste_elixir,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
