//! Carta (game card) domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalog card, admin-managed
#[derive(Debug, Clone)]
pub struct Carta {
    pub id: Uuid,
    /// Image reference, unique across the catalog
    pub photo: String,
    pub nombre: String,
    pub role: String,
    pub coste_elixir: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated card fields, applied on create and update
#[derive(Debug, Clone)]
pub struct CartaInput {
    pub photo: String,
    pub nombre: String,
    pub role: String,
    pub coste_elixir: i16,
}

/// Flat card projection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartaResource {
    pub id: Uuid,
    #[schema(example = "caballero.png")]
    pub photo: String,
    #[schema(example = "Caballero")]
    pub nombre: String,
    #[schema(example = "tropa")]
    pub role: String,
    #[schema(example = 3)]
    pub coste_elixir: i16,
}

impl From<Carta> for CartaResource {
    fn from(carta: Carta) -> Self {
        Self {
            id: carta.id,
            photo: carta.photo,
            nombre: carta.nombre,
            role: carta.role,
            coste_elixir: carta.coste_elixir,
        }
    }
}
