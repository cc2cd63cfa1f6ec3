//! User handlers: public rankings plus account and admin management.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_self_or_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::UserResource;
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Ranking search request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SearchRequest {
    /// Exact display name to look up
    #[validate(length(min = 1, message = "El campo jugador es obligatorio"))]
    #[schema(example = "ElPrimo99")]
    pub name: String,
}

/// Rename request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNameRequest {
    #[validate(length(min = 1, max = 255, message = "El campo nombre es obligatorio"))]
    pub name: String,
}

/// Email change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmailRequest {
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: String,
}

/// Admin account update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 255, message = "El campo nombre es obligatorio"))]
    pub name: String,
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: String,
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub password: String,
}

/// Public ranking routes
pub fn ranking_routes() -> Router<AppState> {
    Router::new()
        .route("/rankings", get(rankings))
        .route("/rankings", post(search_ranking))
}

/// Account routes for authenticated users
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/actualizar-nombre", put(update_name))
        .route("/:id/actualizar-correo", put(update_email))
        .route("/:id/eliminar-cuenta", delete(delete_account))
}

/// Admin-only user management routes
pub fn user_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players))
        .route("/", post(search_player))
        .route("/:id/actualizar-usuario", put(update_account))
        .route("/:id/eliminar-usuario", delete(delete_user))
}

/// Ranking ordered by won matches
#[utoipa::path(
    get,
    path = "/rankings",
    tag = "Rankings",
    responses((status = 200, description = "Players ordered by partidas_ganadas"))
)]
pub async fn rankings(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<UserResource>>> {
    let users = state.user_service.ranking().await?;
    Ok(ApiResponse::success(
        users.into_iter().map(UserResource::from).collect(),
    ))
}

/// Ranking entries for one display name
#[utoipa::path(
    post,
    path = "/rankings",
    tag = "Rankings",
    request_body = SearchRequest,
    responses((status = 200, description = "Matching players, or a validation envelope"))
)]
pub async fn search_ranking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SearchRequest>,
) -> AppResult<ApiResponse<Vec<UserResource>>> {
    let users = state.user_service.search_by_name(&payload.name).await?;
    Ok(ApiResponse::success(
        users.into_iter().map(UserResource::from).collect(),
    ))
}

/// All accounts holding the plain user role
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Player accounts"))
)]
pub async fn list_players(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<UserResource>>> {
    let users = state.user_service.list_players().await?;
    Ok(ApiResponse::success(
        users.into_iter().map(UserResource::from).collect(),
    ))
}

/// Admin search by display name
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    request_body = SearchRequest,
    responses((status = 200, description = "Matching accounts, or a validation envelope"))
)]
pub async fn search_player(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SearchRequest>,
) -> AppResult<ApiResponse<Vec<UserResource>>> {
    let users = state.user_service.search_by_name(&payload.name).await?;
    Ok(ApiResponse::success(
        users.into_iter().map(UserResource::from).collect(),
    ))
}

/// Rename an account
#[utoipa::path(
    put,
    path = "/usuarios/{id}/actualizar-nombre",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    request_body = UpdateNameRequest,
    responses((status = 200, description = "Name updated"), (status = 403, description = "Not your account"))
)]
pub async fn update_name(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateNameRequest>,
) -> AppResult<ApiResponse<()>> {
    require_self_or_admin(&current, id)?;
    state.user_service.update_name(id, payload.name).await?;
    Ok(ApiResponse::message("Nombre actualizado correctamente"))
}

/// Change an account's email
#[utoipa::path(
    put,
    path = "/usuarios/{id}/actualizar-correo",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    request_body = UpdateEmailRequest,
    responses((status = 200, description = "Email updated"), (status = 403, description = "Not your account"))
)]
pub async fn update_email(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmailRequest>,
) -> AppResult<ApiResponse<()>> {
    require_self_or_admin(&current, id)?;
    state.user_service.update_email(id, payload.email).await?;
    Ok(ApiResponse::message(
        "Correo electrónico actualizado correctamente",
    ))
}

/// Delete the caller's account
#[utoipa::path(
    delete,
    path = "/usuarios/{id}/eliminar-cuenta",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Account deleted"), (status = 403, description = "Not your account"))
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    require_self_or_admin(&current, id)?;
    state.user_service.delete_user(id).await?;
    Ok(ApiResponse::message("Cuenta eliminada correctamente"))
}

/// Admin update of name, email and password
#[utoipa::path(
    put,
    path = "/usuarios/{id}/actualizar-usuario",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    request_body = UpdateAccountRequest,
    responses((status = 200, description = "Account updated"))
)]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateAccountRequest>,
) -> AppResult<ApiResponse<()>> {
    state
        .user_service
        .update_account(id, payload.name, payload.email, payload.password)
        .await?;
    Ok(ApiResponse::message("Usuario actualizado correctamente"))
}

/// Admin delete of any account
#[utoipa::path(
    delete,
    path = "/usuarios/{id}/eliminar-usuario",
    tag = "Usuarios",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Account deleted"))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.user_service.delete_user(id).await?;
    Ok(ApiResponse::message("Usuario eliminado correctamente"))
}
