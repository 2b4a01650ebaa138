use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Represents the priority of a task.
/// Corresponds to the `task_priority` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl TaskPriority {
    /// Parses a lowercase priority name. Returns `None` for anything outside
    /// the accepted set, which callers surface as a validation error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

/// Input structure for creating a task.
///
/// `priority` is taken as a string and checked against the accepted set so
/// that an out-of-range value is reported as a 422 field error rather than a
/// generic deserialization failure.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TaskInput {
    /// The task text. Must be between 1 and 500 characters.
    #[validate(length(min = 1, max = 500, message = "Text must be between 1 and 500 characters"))]
    pub text: String,

    /// One of `low`, `medium`, `high`.
    #[validate(custom = "validate_priority")]
    pub priority: String,
}

/// Input structure for updating a task's completed flag.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskUpdate {
    pub completed: bool,
}

fn validate_priority(value: &str) -> Result<(), ValidationError> {
    if TaskPriority::parse(value).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("priority");
        error.message = Some("Priority must be one of: low, medium, high".into());
        Err(error)
    }
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
    pub text: String,
    pub priority: TaskPriority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}
