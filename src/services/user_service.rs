//! User service.
//!
//! Rankings, player search and account maintenance. Uniqueness rules are
//! checked here so handlers only translate results into the envelope.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// All users ordered by partidas_ganadas descending
    async fn ranking(&self) -> AppResult<Vec<User>>;

    /// Users carrying the searched display name; empty is a validation error
    async fn search_by_name(&self, name: &str) -> AppResult<Vec<User>>;

    /// Accounts holding the plain `user` role
    async fn list_players(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Rename a user; display names stay unique, the user's own row excluded
    async fn update_name(&self, id: Uuid, name: String) -> AppResult<()>;

    /// Change a user's email address
    async fn update_email(&self, id: Uuid, email: String) -> AppResult<()>;

    /// Admin update of name, email and password in one write
    async fn update_account(
        &self,
        id: Uuid,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<()>;

    /// Delete a user account
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn ranking(&self) -> AppResult<Vec<User>> {
        self.users.list_ranking().await
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        let matches = self.users.find_by_name(name).await?;
        if matches.is_empty() {
            return Err(AppError::field("name", "El jugador no existe"));
        }
        Ok(matches)
    }

    async fn list_players(&self) -> AppResult<Vec<User>> {
        self.users.list_players().await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_name(&self, id: Uuid, name: String) -> AppResult<()> {
        self.users.find_by_id(id).await?.ok_or_not_found()?;
        // Own row excluded so resubmitting the current name is a no-op
        if self.users.name_exists(&name, Some(id)).await? {
            return Err(AppError::field(
                "name",
                "El nombre de usuario ya está en uso",
            ));
        }
        self.users.update_name(id, name).await
    }

    async fn update_email(&self, id: Uuid, email: String) -> AppResult<()> {
        self.users.find_by_id(id).await?.ok_or_not_found()?;
        if self.users.email_taken(&email, Some(id)).await? {
            return Err(AppError::field(
                "email",
                "El correo electrónico ya está en uso",
            ));
        }
        self.users.update_email(id, email).await
    }

    async fn update_account(
        &self,
        id: Uuid,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<()> {
        self.users.find_by_id(id).await?.ok_or_not_found()?;
        if self.users.email_taken(&email, Some(id)).await? {
            return Err(AppError::field(
                "email",
                "El correo electrónico ya está en uso",
            ));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.users.update_account(id, name, email, password_hash).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.users.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infra::repositories::MockUserRepository;
    use chrono::Utc;

    fn player(name: &str, ganadas: i32) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: "hash".into(),
            role: UserRole::User,
            partidas_jugadas: ganadas,
            partidas_ganadas: ganadas,
            partidas_empatadas: 0,
            partidas_perdidas: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn search_for_missing_player_is_a_validation_error() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_name().returning(|_| Ok(Vec::new()));

        let service = UserManager::new(Arc::new(users));
        let result = service.search_by_name("fantasma").await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(
                    errors.get("name").unwrap(),
                    &vec!["El jugador no existe".to_string()]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_returns_all_homonyms() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_name()
            .returning(|_| Ok(vec![player("Sultan", 10), player("Sultan", 3)]));

        let service = UserManager::new(Arc::new(users));
        let found = service.search_by_name("Sultan").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn rename_to_taken_name_is_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|_| Ok(Some(player("Berto", 5))));
        users.expect_name_exists().returning(|_, _| Ok(true));
        users.expect_update_name().never();

        let service = UserManager::new(Arc::new(users));
        let result = service.update_name(Uuid::new_v4(), "Sultan".into()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn rename_excludes_own_row_so_resubmitting_the_current_name_passes() {
        let user = player("Berto", 5);
        let id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        users
            .expect_name_exists()
            .withf(move |name, exclude| name == "Berto" && *exclude == Some(id))
            .returning(|_, _| Ok(false));
        users.expect_update_name().returning(|_, _| Ok(()));

        let service = UserManager::new(Arc::new(users));
        service.update_name(id, "Berto".into()).await.unwrap();
    }

    #[tokio::test]
    async fn rename_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(users));
        let result = service.update_name(Uuid::new_v4(), "Sultan".into()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn email_update_ignores_own_row_in_uniqueness_check() {
        let user = player("Berto", 5);
        let id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        users
            .expect_email_taken()
            .withf(move |_, exclude| *exclude == Some(id))
            .returning(|_, _| Ok(false));
        users
            .expect_update_email()
            .returning(|_, _| Ok(()));

        let service = UserManager::new(Arc::new(users));
        service
            .update_email(id, "berto@example.com".into())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn account_update_hashes_the_new_password() {
        let user = player("Berto", 5);
        let id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        users.expect_email_taken().returning(|_, _| Ok(false));
        users
            .expect_update_account()
            .withf(|_, _, _, hash| hash.starts_with("$argon2"))
            .returning(|_, _, _, _| Ok(()));

        let service = UserManager::new(Arc::new(users));
        service
            .update_account(id, "Berto".into(), "berto@example.com".into(), "nueva-clave".into())
            .await
            .unwrap();
    }
}
