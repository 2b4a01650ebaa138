//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. `AppError` implements `actix_web::error::ResponseError` so
//! handlers can return `Result<_, AppError>` and have failures converted into
//! JSON responses with the right status code.
//!
//! The error taxonomy follows the API contract: validation failures are 422
//! with per-field messages under `errors`, auth failures are 401, missing or
//! foreign resources are 404, and anything unexpected is a generic 500 whose
//! detail goes to the log only.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::{ValidationError, ValidationErrors};

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed or is required but missing (HTTP 401).
    Unauthorized(String),
    /// Malformed or invalid request (HTTP 400).
    BadRequest(String),
    /// Requested resource absent or not owned by the caller (HTTP 404).
    NotFound(String),
    /// Unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// Error originating from database operations (HTTP 500).
    DatabaseError(String),
    /// Failed input validation, with field-level messages (HTTP 422).
    ValidationError(ValidationErrors),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(errors) => write!(f, "Validation Error: {}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "message": msg
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "message": msg
            })),
            // Internal detail stays in the log; clients get a constant message.
            AppError::InternalServerError(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "message": "Internal server error"
                }))
            }
            AppError::DatabaseError(msg) => {
                log::error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "message": "Internal server error"
                }))
            }
            AppError::ValidationError(errors) => HttpResponse::UnprocessableEntity().json(json!({
                "errors": errors
            })),
        }
    }
}

/// Builds a 422 `AppError` carrying a single field-level message.
///
/// Used where a constraint is checked in handler code rather than by the
/// `validator` derive, e.g. duplicate-email detection on registration.
pub fn field_error(field: &'static str, code: &'static str, message: &'static str) -> AppError {
    let mut errors = ValidationErrors::new();
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    errors.add(field, error);
    AppError::ValidationError(errors)
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `sqlx::Error::RowNotFound` maps to `AppError::NotFound`; everything else
/// becomes `AppError::DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> AppError {
        AppError::ValidationError(errors)
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
