use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Standard success envelope: `{ok, data, message}`.
///
/// `data` is always serialized (null when the endpoint has no payload),
/// `message` is omitted when the handler has nothing to say.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Success with no payload, `data: null` on the wire.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_serializes_null_data() {
        let response = ApiResponse::message("Carta creada correctamente");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["ok"], true);
        assert!(json["data"].is_null());
        assert_eq!(json["message"], "Carta creada correctamente");
    }

    #[test]
    fn success_envelope_omits_missing_message() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("message").is_none());
    }
}
