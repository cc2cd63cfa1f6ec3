//! Evento domain entity.
//!
//! Event start dates travel as `dd/mm/yyyy HH:MM` strings on the wire and
//! are stored as naive timestamps; parsing failures surface as field-level
//! validation errors, never as 500s.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::FECHA_INICIO_FORMAT;

/// A schedulable event with a creator and subscribed users
#[derive(Debug, Clone)]
pub struct Evento {
    pub id: Uuid,
    /// Creator
    pub user_id: Uuid,
    pub nombre: String,
    pub tipo: String,
    pub fecha_inicio: NaiveDateTime,
    pub duracion: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated event fields, applied on create and update
#[derive(Debug, Clone)]
pub struct EventoInput {
    pub nombre: String,
    pub tipo: String,
    pub fecha_inicio: NaiveDateTime,
    pub duracion: String,
}

/// Parse a wire-format start date (`dd/mm/yyyy HH:MM`).
pub fn parse_fecha_inicio(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, FECHA_INICIO_FORMAT).ok()
}

/// Format a start date back into the wire format.
pub fn format_fecha_inicio(fecha: &NaiveDateTime) -> String {
    fecha.format(FECHA_INICIO_FORMAT).to_string()
}

/// Flat event projection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventoResource {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Torneo de primavera")]
    pub nombre: String,
    #[schema(example = "torneo")]
    pub tipo: String,
    /// Start date in `dd/mm/yyyy HH:MM` format
    #[schema(example = "01/05/2024 18:00")]
    pub fecha_inicio: String,
    #[schema(example = "2 horas")]
    pub duracion: String,
}

impl From<Evento> for EventoResource {
    fn from(evento: Evento) -> Self {
        Self {
            id: evento.id,
            user_id: evento.user_id,
            nombre: evento.nombre,
            tipo: evento.tipo,
            fecha_inicio: format_fecha_inicio(&evento.fecha_inicio),
            duracion: evento.duracion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_format_dates() {
        let fecha = parse_fecha_inicio("01/05/2024 18:30").unwrap();
        assert_eq!(format_fecha_inicio(&fecha), "01/05/2024 18:30");
    }

    #[test]
    fn rejects_other_date_formats() {
        assert!(parse_fecha_inicio("2024-05-01 18:30").is_none());
        assert!(parse_fecha_inicio("01/05/2024").is_none());
        assert!(parse_fecha_inicio("32/01/2024 10:00").is_none());
        assert!(parse_fecha_inicio("").is_none());
    }
}
