use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docvault::StoreError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}

impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Storage(_) | StoreError::Io(_) => {
                tracing::error!("Document store failure: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ErrorResponse {
            message: err.to_string(),
            status,
        }
    }
}
