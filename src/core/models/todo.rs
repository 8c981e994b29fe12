use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::TodoError;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
    #[schema(value_type = String, example = "2025-01-01T00:00:00Z")]
    pub deadline: DateTime<Utc>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

/// Fields to replace on an existing todo. `None` leaves the field untouched.
#[derive(Clone, Debug, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

impl TodoPatch {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(deadline) = self.deadline {
            todo.deadline = deadline;
        }
    }
}

/// Parses a client-supplied deadline. Accepts RFC 3339, a naive date-time (read as UTC)
/// or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, TodoError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(TodoError::InvalidDeadline(raw.to_string()))
}
