//! Evento handlers, available to any authenticated user.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::EventoResource;
use crate::errors::AppResult;
use crate::services::EventoDraft;
use crate::types::ApiResponse;

/// Event create/update request; the date format is checked by the service
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EventoRequest {
    #[validate(length(min = 1, max = 40, message = "El nombre debe tener como máximo 40 caracteres"))]
    #[schema(example = "Torneo de primavera")]
    pub nombre: String,
    #[validate(length(min = 1, message = "El campo tipo es obligatorio"))]
    #[schema(example = "torneo")]
    pub tipo: String,
    /// Start date, `dd/mm/yyyy HH:mm`
    #[validate(length(min = 1, message = "El campo fecha de inicio es obligatorio"))]
    #[schema(example = "01/05/2024 18:00")]
    pub fecha_inicio: String,
    #[validate(length(min = 1, message = "El campo duración es obligatorio"))]
    #[schema(example = "2 horas")]
    pub duracion: String,
}

impl From<EventoRequest> for EventoDraft {
    fn from(request: EventoRequest) -> Self {
        Self {
            nombre: request.nombre,
            tipo: request.tipo,
            fecha_inicio: request.fecha_inicio,
            duracion: request.duracion,
        }
    }
}

/// Evento routes, all behind the auth middleware
pub fn evento_routes() -> Router<AppState> {
    Router::new()
        .route("/eventos", get(index))
        .route("/mis_eventos", get(mine))
        .route("/eventos_inscritos", get(subscribed))
        .route("/crear_evento", post(create))
        .route("/eventos/:id/edit", get(edit))
        .route("/eventos/:id/edit", post(update))
        .route("/eventos/:id/delete", delete(remove))
        .route("/eventos/:id/inscribirse", post(subscribe))
        .route("/eventos/:id/desuscribirse", delete(unsubscribe))
}

fn collect(eventos: Vec<crate::domain::Evento>) -> Vec<EventoResource> {
    eventos.into_iter().map(EventoResource::from).collect()
}

/// Every scheduled event
#[utoipa::path(
    get,
    path = "/eventos",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All events"))
)]
pub async fn index(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<EventoResource>>> {
    let eventos = state.evento_service.list().await?;
    Ok(ApiResponse::with_message(
        collect(eventos),
        "Lista de eventos obtenida correctamente",
    ))
}

/// Events created by the caller
#[utoipa::path(
    get,
    path = "/mis_eventos",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Events the caller created"))
)]
pub async fn mine(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<ApiResponse<Vec<EventoResource>>> {
    let eventos = state.evento_service.created_by(current.id).await?;
    Ok(ApiResponse::with_message(
        collect(eventos),
        "Eventos del usuario obtenidos correctamente",
    ))
}

/// Events the caller is subscribed to
#[utoipa::path(
    get,
    path = "/eventos_inscritos",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Events the caller is subscribed to"))
)]
pub async fn subscribed(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<ApiResponse<Vec<EventoResource>>> {
    let eventos = state.evento_service.subscribed(current.id).await?;
    Ok(ApiResponse::with_message(
        collect(eventos),
        "Eventos inscritos obtenidos correctamente",
    ))
}

/// Create an event; the creator is subscribed automatically
#[utoipa::path(
    post,
    path = "/crear_evento",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    request_body = EventoRequest,
    responses((status = 200, description = "Event created"))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<EventoRequest>,
) -> AppResult<ApiResponse<EventoResource>> {
    let evento = state
        .evento_service
        .create(current.id, payload.into())
        .await?;
    Ok(ApiResponse::with_message(
        EventoResource::from(evento),
        "Evento creado correctamente.",
    ))
}

/// Event data for the edit form
#[utoipa::path(
    get,
    path = "/eventos/{id}/edit",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Event to edit"), (status = 404, description = "Unknown event"))
)]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<EventoResource>> {
    let evento = state.evento_service.get(id).await?;
    Ok(ApiResponse::with_message(
        EventoResource::from(evento),
        "Datos del evento obtenidos correctamente",
    ))
}

/// Overwrite an event's fields
#[utoipa::path(
    post,
    path = "/eventos/{id}/edit",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    request_body = EventoRequest,
    responses((status = 200, description = "Event updated"), (status = 404, description = "Unknown event"))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<EventoRequest>,
) -> AppResult<ApiResponse<()>> {
    state.evento_service.update(id, payload.into()).await?;
    Ok(ApiResponse::message("Evento actualizado correctamente."))
}

/// Delete an event and its subscriptions
#[utoipa::path(
    delete,
    path = "/eventos/{id}/delete",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Event deleted"), (status = 404, description = "Unknown event"))
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.evento_service.delete(id).await?;
    Ok(ApiResponse::message("Evento eliminado correctamente"))
}

/// Subscribe the caller to an event
#[utoipa::path(
    post,
    path = "/eventos/{id}/inscribirse",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Subscribed, or failure envelope when already subscribed"))
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.evento_service.subscribe(id, current.id).await?;
    Ok(ApiResponse::message(
        "Te has inscrito en el evento correctamente.",
    ))
}

/// Remove the caller's subscription
#[utoipa::path(
    delete,
    path = "/eventos/{id}/desuscribirse",
    tag = "Eventos",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Unsubscribed, or failure envelope when not subscribed"))
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.evento_service.unsubscribe(id, current.id).await?;
    Ok(ApiResponse::message(
        "Te has desuscrito del evento correctamente.",
    ))
}
