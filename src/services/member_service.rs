//! Team member profile service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Member, MemberInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::{MemberRepository, UserRepository};

/// Member service trait for dependency injection.
#[async_trait]
pub trait MemberService: Send + Sync {
    /// All team member profiles
    async fn list(&self) -> AppResult<Vec<Member>>;

    /// Get member by ID
    async fn get(&self, id: Uuid) -> AppResult<Member>;

    /// Update a member profile; the email must stay unique across
    /// members and user accounts alike
    async fn update(&self, id: Uuid, input: MemberInput) -> AppResult<()>;

    /// Delete a member profile
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of MemberService.
pub struct MemberManager {
    members: Arc<dyn MemberRepository>,
    users: Arc<dyn UserRepository>,
}

impl MemberManager {
    pub fn new(members: Arc<dyn MemberRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { members, users }
    }
}

#[async_trait]
impl MemberService for MemberManager {
    async fn list(&self) -> AppResult<Vec<Member>> {
        self.members.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<Member> {
        self.members.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: Uuid, input: MemberInput) -> AppResult<()> {
        self.members.find_by_id(id).await?.ok_or_not_found()?;

        // Member emails share a namespace with player accounts.
        let taken = self.members.email_taken(&input.email, Some(id)).await?
            || self.users.email_taken(&input.email, None).await?;
        if taken {
            return Err(AppError::field(
                "email",
                "El correo electrónico ya está en uso",
            ));
        }

        self.members.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.members.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockMemberRepository, MockUserRepository};

    fn member(email: &str) -> Member {
        Member {
            id: Uuid::new_v4(),
            name: "Ana García".into(),
            role: "Frontend".into(),
            desc: "Interfaz de la comunidad".into(),
            photo: "ana.png".into(),
            website: "https://ana.example.com".into(),
            email: email.into(),
            linkedin: None,
            dribbble: None,
        }
    }

    fn input(email: &str) -> MemberInput {
        MemberInput {
            name: "Ana García".into(),
            role: "Frontend".into(),
            desc: "Interfaz de la comunidad".into(),
            photo: "ana.png".into(),
            website: "https://ana.example.com".into(),
            email: email.into(),
            linkedin: None,
            dribbble: None,
        }
    }

    #[tokio::test]
    async fn update_rejects_email_held_by_a_player_account() {
        let existing = member("ana@example.com");
        let id = existing.id;

        let mut members = MockMemberRepository::new();
        members
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        members.expect_email_taken().returning(|_, _| Ok(false));
        members.expect_update().never();

        let mut users = MockUserRepository::new();
        users.expect_email_taken().returning(|_, _| Ok(true));

        let service = MemberManager::new(Arc::new(members), Arc::new(users));
        let result = service.update(id, input("elprimo@example.com")).await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert!(errors.get("email").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_keeps_own_email() {
        let existing = member("ana@example.com");
        let id = existing.id;

        let mut members = MockMemberRepository::new();
        members
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        members
            .expect_email_taken()
            .withf(move |_, exclude| *exclude == Some(id))
            .returning(|_, _| Ok(false));
        members.expect_update().returning(|_, _| Ok(()));

        let mut users = MockUserRepository::new();
        users.expect_email_taken().returning(|_, _| Ok(false));

        let service = MemberManager::new(Arc::new(members), Arc::new(users));
        service.update(id, input("ana@example.com")).await.unwrap();
    }

    #[tokio::test]
    async fn update_of_missing_member_is_not_found() {
        let mut members = MockMemberRepository::new();
        members.expect_find_by_id().returning(|_| Ok(None));
        let users = MockUserRepository::new();

        let service = MemberManager::new(Arc::new(members), Arc::new(users));
        let result = service.update(Uuid::new_v4(), input("ana@example.com")).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
