//! Centralized error handling.
//!
//! Every handler returns `AppResult<T>`; failures are converted into the
//! uniform response envelope in exactly one place (`IntoResponse` below),
//! so controllers never build error bodies by hand.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("No autenticado")]
    Unauthorized,

    #[error("El usuario no tiene los roles necesarios")]
    Forbidden,

    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    // Resource errors
    #[error("Recurso no encontrado")]
    NotFound,

    // Field-level validation failure: no persistence was attempted
    #[error("Error de validación")]
    Validation(FieldErrors),

    // Handled domain failure, returned as an ok:false envelope with 200
    #[error("{0}")]
    Failure(String),

    // External service errors
    #[error("Error de base de datos")]
    Database(#[from] sea_orm::DbErr),

    #[error("Error de autenticación")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Error interno del servidor")]
    Internal(String),
}

/// Field name to human-readable messages map, mirroring the shape the
/// frontend consumes: `{"errors": {"name": ["..."]}}`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for a field, preserving earlier messages.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    /// Short-circuit helper: `Err(Validation)` when any rule failed.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for e in errs {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("El campo {} no es válido", field));
                out.add(field, message);
            }
        }
        out
    }
}

/// ok:false envelope with a single message
#[derive(Debug, Serialize)]
struct FailureBody {
    ok: bool,
    message: String,
}

/// ok:false envelope carrying the field errors map
#[derive(Debug, Serialize)]
struct ValidationBody {
    ok: bool,
    errors: FieldErrors,
}

impl AppError {
    /// Get HTTP status code.
    ///
    /// Handled failures (validation included) stay at 200: the envelope's
    /// `ok` flag carries the outcome, matching the API the frontend expects.
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Failure(_) => StatusCode::OK,
            AppError::Unauthorized | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Ha ocurrido un error inesperado".to_string()
            }
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "Token no válido o caducado".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Ha ocurrido un error inesperado".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(errors) => {
                (status, Json(ValidationBody { ok: false, errors })).into_response()
            }
            other => {
                let body = FailureBody {
                    ok: false,
                    message: other.user_message(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn failure(msg: impl Into<String>) -> Self {
        AppError::Failure(msg.into())
    }

    pub fn field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, msg);
        AppError::Validation(errors)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
