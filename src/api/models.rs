use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::TodoError;

// Request structs for JSON payloads. Fields are optional so that absence is
// reported as a domain error rather than a deserialization failure.
#[derive(Deserialize, ToSchema, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Deserialize, ToSchema, Default)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    #[schema(example = "2025-01-01")]
    pub deadline: Option<String>,
}

#[derive(Deserialize, ToSchema, Default)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    #[schema(example = "2025-01-01T12:00:00Z")]
    pub deadline: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for TodoError to implement IntoResponse
pub struct ApiError(pub TodoError);

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            TodoError::UserAlreadyExists(_) => (StatusCode::BAD_REQUEST, "User already exists.".to_string()),
            TodoError::Unauthorized => (
                StatusCode::FORBIDDEN,
                "You don't have permission to be here!".to_string(),
            ),
            TodoError::MissingField(field) => (StatusCode::BAD_REQUEST, format!("{} is required.", field)),
            TodoError::InvalidDeadline(_) => (StatusCode::BAD_REQUEST, "deadline is invalid.".to_string()),
            TodoError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", msg)),
            TodoError::TodoNotFound(_) => (StatusCode::NOT_FOUND, "Todo not found.".to_string()),
            TodoError::StorageError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg)),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
