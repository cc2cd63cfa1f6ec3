//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::ROLE_USER;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find all users with an exact display name
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<User>>;

    /// Check name uniqueness, optionally excluding one record's own row
    async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    /// Check email uniqueness, optionally excluding one record's own row
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    /// Create a new user with zeroed match counters
    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: String,
    ) -> AppResult<User>;

    /// Rename a user
    async fn update_name(&self, id: Uuid, name: String) -> AppResult<()>;

    /// Change a user's email address
    async fn update_email(&self, id: Uuid, email: String) -> AppResult<()>;

    /// Admin update of name, email and credentials in one write
    async fn update_account(
        &self,
        id: Uuid,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<()>;

    /// Delete a user
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// All users ordered by partidas_ganadas descending
    async fn list_ranking(&self) -> AppResult<Vec<User>>;

    /// Users holding the plain `user` role
    async fn list_players(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: Uuid) -> AppResult<user::Model> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Name.eq(name))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn name_exists(&self, name: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = UserEntity::find().filter(user::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(user::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = UserEntity::find().filter(user::Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(user::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: String,
    ) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role),
            partidas_jugadas: Set(0),
            partidas_ganadas: Set(0),
            partidas_empatadas: Set(0),
            partidas_perdidas: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update_name(&self, id: Uuid, name: String) -> AppResult<()> {
        let mut active: ActiveModel = self.fetch(id).await?.into();
        active.name = Set(name);
        active.updated_at = Set(chrono::Utc::now());

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn update_email(&self, id: Uuid, email: String) -> AppResult<()> {
        let mut active: ActiveModel = self.fetch(id).await?.into();
        active.email = Set(email);
        active.updated_at = Set(chrono::Utc::now());

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn update_account(
        &self,
        id: Uuid,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<()> {
        let mut active: ActiveModel = self.fetch(id).await?.into();
        active.name = Set(name);
        active.email = Set(email);
        active.password_hash = Set(password_hash);
        active.updated_at = Set(chrono::Utc::now());

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list_ranking(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_desc(user::Column::PartidasGanadas)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn list_players(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Role.eq(ROLE_USER))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
