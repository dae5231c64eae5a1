//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use netdevices_domain::error::NetDevError;

/// Message returned for any body that is not a device JSON object.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler can fail with, mapped to a status code on the way out.
pub enum ApiError {
    /// A service call failed.
    Domain(NetDevError),
    /// The request body could not be decoded.
    InvalidPayload(serde_json::Error),
}

impl From<NetDevError> for ApiError {
    fn from(err: NetDevError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidPayload(err) => {
                tracing::debug!(error = %err, "rejected request body");
                (StatusCode::BAD_REQUEST, INVALID_PAYLOAD.to_string())
            }
            Self::Domain(NetDevError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(NetDevError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(NetDevError::AlreadyExists(err)) => {
                tracing::error!(error = %err, "unexpected insert collision");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::Domain(NetDevError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
