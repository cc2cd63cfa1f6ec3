//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub partidas_jugadas: i32,
    pub partidas_ganadas: i32,
    pub partidas_empatadas: i32,
    pub partidas_perdidas: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::evento::Entity")]
    Eventos,
}

impl Related<super::evento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Eventos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role: UserRole::from(model.role.as_str()),
            partidas_jugadas: model.partidas_jugadas,
            partidas_ganadas: model.partidas_ganadas,
            partidas_empatadas: model.partidas_empatadas,
            partidas_perdidas: model.partidas_perdidas,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
