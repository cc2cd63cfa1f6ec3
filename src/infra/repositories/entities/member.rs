//! Member database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Member;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub role: String,
    #[sea_orm(column_name = "descripcion")]
    pub desc: String,
    pub photo: String,
    pub website: String,
    #[sea_orm(unique)]
    pub email: String,
    pub linkedin: Option<String>,
    pub dribbble: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Member {
    fn from(model: Model) -> Self {
        Member {
            id: model.id,
            name: model.name,
            role: model.role,
            desc: model.desc,
            photo: model.photo,
            website: model.website,
            email: model.email,
            linkedin: model.linkedin,
            dribbble: model.dribbble,
        }
    }
}
