//! JSON error envelope shared by all API handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// An API error rendered as `{"error": {"status": ..., "message": ...}}`.
///
/// Handlers return this from their error paths so every endpoint produces
/// the same envelope regardless of which service failed.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                status: self.status.as_u16(),
                message: &self.message,
            },
        };
        (self.status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape() {
        let error = ApiError::not_found("Movie not found");
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                status: error.status.as_u16(),
                message: &error.message,
            },
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["error"]["status"], 404);
        assert_eq!(value["error"]["message"], "Movie not found");
    }

    #[test]
    fn constructors_set_status() {
        assert_eq!(
            ApiError::bad_request("x").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("x").status, StatusCode::NOT_FOUND);
        let internal = ApiError::internal();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message, "Internal server error");
    }
}
