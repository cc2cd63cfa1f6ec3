//! Validated JSON extractor.
//!
//! Deserializes the body and runs the declarative field rules before the
//! handler sees the payload, so handlers only ever receive valid input.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::{AppError, FieldErrors};

/// JSON extractor that validates the payload on extraction.
///
/// Rule failures surface as the standard `{ok: false, errors: {...}}`
/// envelope without reaching the handler.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.add("body", e.body_text());
            AppError::Validation(errors)
        })?;

        value
            .validate()
            .map_err(|e| AppError::Validation(FieldErrors::from(&e)))?;

        Ok(ValidatedJson(value))
    }
}
