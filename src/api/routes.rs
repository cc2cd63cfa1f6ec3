//! Application route configuration.
//!
//! The surface is declared explicitly here: public routes first, then the
//! authenticated groups, then the admin groups. Admin groups layer the role
//! check inside the auth check so a missing token is always a 401 and a
//! missing role a 403.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_protected_routes, auth_routes, carta_routes, evento_routes, member_routes,
    ranking_routes, user_admin_routes, user_routes, welcome,
};
use super::middleware::{admin_middleware, auth_middleware};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let auth = |state: AppState| middleware::from_fn_with_state(state, auth_middleware);

    Router::new()
        // Public surface
        .route("/", get(welcome))
        .route("/health", get(health))
        .merge(ranking_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Authentication: register/login public, perfil behind the token check
        .nest(
            "/auth",
            auth_routes().merge(auth_protected_routes().route_layer(auth(state.clone()))),
        )
        // Account self-management plus the admin user group
        .nest(
            "/usuarios",
            user_routes().route_layer(auth(state.clone())).merge(
                user_admin_routes()
                    .route_layer(middleware::from_fn(admin_middleware))
                    .route_layer(auth(state.clone())),
            ),
        )
        // Eventos: any authenticated user
        .merge(evento_routes().route_layer(auth(state.clone())))
        // Cartas: admin only
        .merge(
            carta_routes()
                .route_layer(middleware::from_fn(admin_middleware))
                .route_layer(auth(state.clone())),
        )
        // Miembros: admin only
        .nest(
            "/miembros",
            member_routes()
                .route_layer(middleware::from_fn(admin_middleware))
                .route_layer(auth(state.clone())),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = match &state.database {
        Some(database) => match database.ping().await {
            Ok(_) => HealthResponse {
                status: "healthy",
                database: "healthy",
                error: None,
            },
            Err(e) => HealthResponse {
                status: "degraded",
                database: "unhealthy",
                error: Some(e.to_string()),
            },
        },
        None => HealthResponse {
            status: "healthy",
            database: "not configured",
            error: None,
        },
    };

    let status_code = if response.status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
