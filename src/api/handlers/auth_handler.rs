//! Authentication handlers.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserResource;
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::ApiResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Player display name
    #[validate(length(min = 1, max = 255, message = "El campo nombre es obligatorio"))]
    #[schema(example = "ElPrimo99")]
    pub name: String,
    /// User email address
    #[validate(email(message = "El correo electrónico no es válido"))]
    #[schema(example = "jugador@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    #[schema(example = "contraseña-segura", min_length = 8)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "El correo electrónico no es válido"))]
    #[schema(example = "jugador@example.com")]
    pub email: String,
    /// User password
    pub password: String,
}

/// Registration payload: the created account plus its session token
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterPayload {
    pub user: UserResource,
    pub token: TokenResponse,
}

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Routes behind the auth middleware
pub fn auth_protected_routes() -> Router<AppState> {
    Router::new().route("/perfil", get(perfil))
}

/// Register a new player account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created, envelope with user and token"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<ApiResponse<RegisterPayload>> {
    let (user, token) = state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok(ApiResponse::success(RegisterPayload {
        user: UserResource::from(user),
        token,
    }))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, envelope with token"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<ApiResponse<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(ApiResponse::success(token))
}

/// Current user profile
#[utoipa::path(
    get,
    path = "/auth/perfil",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user profile"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn perfil(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<ApiResponse<UserResource>> {
    let user = state.user_service.get_user(current.id).await?;
    Ok(ApiResponse::success(UserResource::from(user)))
}
