//! Landing page aggregate.

use axum::extract::State;

use crate::api::AppState;
use crate::domain::MemberResource;
use crate::errors::AppResult;
use crate::types::ApiResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// Landing page payload: card artwork plus the team roster
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomePayload {
    /// Card photo references for the carousel
    pub cartas: Vec<String>,
    pub miembros: Vec<MemberResource>,
}

/// Public welcome aggregate
#[utoipa::path(
    get,
    path = "/",
    tag = "Welcome",
    responses((status = 200, description = "Card photos and team members"))
)]
pub async fn welcome(State(state): State<AppState>) -> AppResult<ApiResponse<WelcomePayload>> {
    let cartas = state.carta_service.photos().await?;
    let members = state.member_service.list().await?;

    Ok(ApiResponse::success(WelcomePayload {
        cartas,
        miembros: members.into_iter().map(MemberResource::from).collect(),
    }))
}
