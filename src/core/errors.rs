use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, PartialEq, Eq)]
pub enum TodoError {
    /// Username is already taken in the directory
    #[error("User {0} already exists")]
    UserAlreadyExists(String),

    /// Identity header is missing or names no registered user
    #[error("Unknown or missing username")]
    Unauthorized,

    /// A required request field is absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Deadline could not be parsed into a timestamp
    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),

    /// Request body is not valid JSON for the route
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No todo with the given ID belongs to the caller
    #[error("Todo {0} not found")]
    TodoNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
