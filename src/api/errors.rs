use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error contract, applied uniformly: 400 for incomplete client input,
/// 500 for storage failures. Business outcomes (e.g. a failed login) are
/// not errors and never pass through here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, *msg),
            ApiError::Database(e) => {
                // Driver error text stays in the logs, not in the response.
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database query failed")
            }
        };
        let body = Json(json!({ "status": "error", "message": message }));
        (status, body).into_response()
    }
}
