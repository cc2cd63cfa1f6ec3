//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_USER};

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity with per-player match counters
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub partidas_jugadas: i32,
    pub partidas_ganadas: i32,
    pub partidas_empatadas: i32,
    pub partidas_perdidas: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Flat user projection for rankings and admin listings.
///
/// Deliberately excludes the password hash: credentials never leave
/// the persistence layer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResource {
    /// Unique user identifier
    pub id: Uuid,
    /// Player display name
    #[schema(example = "ElPrimo99")]
    pub name: String,
    /// User email address
    #[schema(example = "jugador@example.com")]
    pub email: String,
    pub partidas_jugadas: i32,
    pub partidas_ganadas: i32,
    pub partidas_empatadas: i32,
    pub partidas_perdidas: i32,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            partidas_jugadas: user.partidas_jugadas,
            partidas_ganadas: user.partidas_ganadas,
            partidas_empatadas: user.partidas_empatadas,
            partidas_perdidas: user.partidas_perdidas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        // Unknown values default to user
        assert_eq!(UserRole::from("moderator"), UserRole::User);
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn resource_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test".into(),
            email: "test@example.com".into(),
            password_hash: "secret-hash".into(),
            role: UserRole::User,
            partidas_jugadas: 10,
            partidas_ganadas: 6,
            partidas_empatadas: 1,
            partidas_perdidas: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(UserResource::from(user)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["partidas_ganadas"], 6);
    }
}
