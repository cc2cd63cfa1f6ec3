//! Team member handlers, admin only.

use axum::{
    extract::{Path, State},
    routing::{delete, get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{MemberInput, MemberResource};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Member profile update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MemberRequest {
    #[validate(length(min = 1, max = 255, message = "El campo nombre es obligatorio"))]
    #[schema(example = "Ana García")]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "El campo role es obligatorio"))]
    #[schema(example = "Frontend")]
    pub role: String,
    #[validate(length(min = 1, message = "El campo descripción es obligatorio"))]
    pub desc: String,
    #[validate(length(min = 1, message = "El campo foto es obligatorio"))]
    pub photo: String,
    #[validate(url(message = "El sitio web debe ser una URL válida"))]
    pub website: String,
    #[validate(
        email(message = "El correo electrónico no es válido"),
        length(max = 255, message = "El correo electrónico es demasiado largo")
    )]
    pub email: String,
    #[validate(url(message = "El perfil de LinkedIn debe ser una URL válida"))]
    pub linkedin: Option<String>,
    #[validate(url(message = "El perfil de Dribbble debe ser una URL válida"))]
    pub dribbble: Option<String>,
}

impl From<MemberRequest> for MemberInput {
    fn from(request: MemberRequest) -> Self {
        Self {
            name: request.name,
            role: request.role,
            desc: request.desc,
            photo: request.photo,
            website: request.website,
            email: request.email,
            linkedin: request.linkedin,
            dribbble: request.dribbble,
        }
    }
}

/// Member list payload, keyed the way the team page consumes it
#[derive(Debug, Serialize, ToSchema)]
pub struct MiembrosPayload {
    pub miembros: Vec<MemberResource>,
}

/// Admin-only member routes
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/:id/actualizar-miembro", put(update))
        .route("/:id/eliminar-miembro", delete(remove))
}

/// All team member profiles
#[utoipa::path(
    get,
    path = "/miembros",
    tag = "Miembros",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Team member profiles"))
)]
pub async fn index(State(state): State<AppState>) -> AppResult<ApiResponse<MiembrosPayload>> {
    let members = state.member_service.list().await?;
    Ok(ApiResponse::success(MiembrosPayload {
        miembros: members.into_iter().map(MemberResource::from).collect(),
    }))
}

/// Overwrite a member profile
#[utoipa::path(
    put,
    path = "/miembros/{id}/actualizar-miembro",
    tag = "Miembros",
    security(("bearer_auth" = [])),
    request_body = MemberRequest,
    responses((status = 200, description = "Member updated"), (status = 404, description = "Unknown member"))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<MemberRequest>,
) -> AppResult<ApiResponse<()>> {
    state.member_service.update(id, payload.into()).await?;
    Ok(ApiResponse::message("Miembro actualizado correctamente"))
}

/// Delete a member profile
#[utoipa::path(
    delete,
    path = "/miembros/{id}/eliminar-miembro",
    tag = "Miembros",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Member deleted"), (status = 404, description = "Unknown member"))
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.member_service.delete(id).await?;
    Ok(ApiResponse::message("Miembro eliminado correctamente"))
}
