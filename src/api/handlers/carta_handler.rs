//! Carta catalog handlers, admin only.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CartaInput, CartaResource};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Card create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CartaRequest {
    /// Image reference
    #[validate(length(min = 1, message = "Por favor selecciona una foto para la carta."))]
    #[schema(example = "caballero.png")]
    pub photo: String,
    #[validate(length(min = 1, max = 40, message = "El nombre debe tener como máximo 40 caracteres"))]
    #[schema(example = "Caballero")]
    pub nombre: String,
    #[validate(length(min = 1, message = "El campo role es obligatorio"))]
    #[schema(example = "tropa")]
    pub role: String,
    #[validate(range(min = 0, max = 10, message = "El coste de elixir debe estar entre 0 y 10"))]
    #[schema(example = 3)]
    pub coste_elixir: i16,
}

impl From<CartaRequest> for CartaInput {
    fn from(request: CartaRequest) -> Self {
        Self {
            photo: request.photo,
            nombre: request.nombre,
            role: request.role,
            coste_elixir: request.coste_elixir,
        }
    }
}

/// Admin-only carta routes
pub fn carta_routes() -> Router<AppState> {
    Router::new()
        .route("/cartas", get(index))
        .route("/crear_carta", post(create))
        .route("/carta/:id/edit", get(edit))
        .route("/carta/:id/edit", post(update))
        .route("/carta/:id/delete", delete(remove))
}

/// Full card catalog
#[utoipa::path(
    get,
    path = "/cartas",
    tag = "Cartas",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Card catalog"))
)]
pub async fn index(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<CartaResource>>> {
    let cartas = state.carta_service.list().await?;
    Ok(ApiResponse::with_message(
        cartas.into_iter().map(CartaResource::from).collect(),
        "Lista de cartas obtenida correctamente",
    ))
}

/// Add a card to the catalog
#[utoipa::path(
    post,
    path = "/crear_carta",
    tag = "Cartas",
    security(("bearer_auth" = [])),
    request_body = CartaRequest,
    responses((status = 200, description = "Card created, data is null"))
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CartaRequest>,
) -> AppResult<ApiResponse<()>> {
    state.carta_service.create(payload.into()).await?;
    Ok(ApiResponse::message("Carta creada correctamente"))
}

/// Card data for the edit form
#[utoipa::path(
    get,
    path = "/carta/{id}/edit",
    tag = "Cartas",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Card to edit"), (status = 404, description = "Unknown card"))
)]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<CartaResource>> {
    let carta = state.carta_service.get(id).await?;
    Ok(ApiResponse::with_message(
        CartaResource::from(carta),
        "Carta obtenida para edición correctamente",
    ))
}

/// Overwrite a card's fields
#[utoipa::path(
    post,
    path = "/carta/{id}/edit",
    tag = "Cartas",
    security(("bearer_auth" = [])),
    request_body = CartaRequest,
    responses((status = 200, description = "Card updated"), (status = 404, description = "Unknown card"))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CartaRequest>,
) -> AppResult<ApiResponse<()>> {
    state.carta_service.update(id, payload.into()).await?;
    Ok(ApiResponse::message("Carta actualizada correctamente"))
}

/// Remove a card from the catalog
#[utoipa::path(
    delete,
    path = "/carta/{id}/delete",
    tag = "Cartas",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Card deleted"), (status = 404, description = "Unknown card"))
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.carta_service.delete(id).await?;
    Ok(ApiResponse::message("Carta eliminada correctamente"))
}
