//! Member repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::member::{self, ActiveModel, Entity as MemberEntity};
use crate::domain::{Member, MemberInput};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Member repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// All members, table order
    async fn list(&self) -> AppResult<Vec<Member>>;

    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>>;

    /// Email uniqueness check among members, optionally excluding one row
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    /// Overwrite an existing member's profile fields
    async fn update(&self, id: Uuid, input: MemberInput) -> AppResult<()>;

    /// Delete a member
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of MemberRepository
pub struct MemberStore {
    db: DatabaseConnection,
}

impl MemberStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for MemberStore {
    async fn list(&self) -> AppResult<Vec<Member>> {
        let models = MemberEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Member::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        let result = MemberEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Member::from))
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = MemberEntity::find().filter(member::Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(member::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn update(&self, id: Uuid, input: MemberInput) -> AppResult<()> {
        let member = MemberEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = member.into();
        active.name = Set(input.name);
        active.role = Set(input.role);
        active.desc = Set(input.desc);
        active.photo = Set(input.photo);
        active.website = Set(input.website);
        active.email = Set(input.email);
        active.linkedin = Set(input.linkedin);
        active.dribbble = Set(input.dribbble);

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = MemberEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
