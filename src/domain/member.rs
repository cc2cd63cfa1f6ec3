//! Member domain entity, a static team-profile record.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Team member profile, admin-managed, unrelated to authentication
#[derive(Debug, Clone)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub desc: String,
    pub photo: String,
    pub website: String,
    /// Unique across members AND users
    pub email: String,
    pub linkedin: Option<String>,
    pub dribbble: Option<String>,
}

/// Validated member fields, applied on update
#[derive(Debug, Clone)]
pub struct MemberInput {
    pub name: String,
    pub role: String,
    pub desc: String,
    pub photo: String,
    pub website: String,
    pub email: String,
    pub linkedin: Option<String>,
    pub dribbble: Option<String>,
}

/// Flat member projection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MemberResource {
    pub id: Uuid,
    #[schema(example = "Ana García")]
    pub name: String,
    #[schema(example = "Frontend")]
    pub role: String,
    pub desc: String,
    pub photo: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    pub website: String,
    pub linkedin: Option<String>,
    pub dribbble: Option<String>,
}

impl From<Member> for MemberResource {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role,
            desc: member.desc,
            photo: member.photo,
            email: member.email,
            website: member.website,
            linkedin: member.linkedin,
            dribbble: member.dribbble,
        }
    }
}
