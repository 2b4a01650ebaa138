pub mod extractors;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

// Re-export necessary items
pub use extractors::AuthUser;
pub use password::{hash_password, verify_password};
pub use token::{issue_token, resolve_token, revoke_token, revoke_user_tokens};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    /// User's email address.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// User's password.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    /// Display name for the new account.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
    /// Optional confirmation; when present it must match `password`.
    /// Checked in the register handler so the mismatch surfaces as a
    /// field-level 422.
    pub password_confirmation: Option<String>,
}

/// Response structure after successful authentication (login or registration).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user's public profile.
    pub user: User,
    /// The opaque bearer token for subsequent requests.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_request_validation() {
        let valid_login = LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(valid_login.validate().is_ok());

        let invalid_email_login = LoginRequest {
            email: "testexample.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(invalid_email_login.validate().is_err());

        let short_password_login = LoginRequest {
            email: "test@example.com".to_string(),
            password: "123".to_string(),
        };
        assert!(short_password_login.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let valid_register = RegisterRequest {
            name: "Ann Example".to_string(),
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
            password_confirmation: Some("password123".to_string()),
        };
        assert!(valid_register.validate().is_ok());

        let empty_name_register = RegisterRequest {
            name: "".to_string(),
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
            password_confirmation: None,
        };
        assert!(empty_name_register.validate().is_err());

        let invalid_email_register = RegisterRequest {
            name: "Ann Example".to_string(),
            email: "testexample.com".to_string(),
            password: "password123".to_string(),
            password_confirmation: None,
        };
        assert!(invalid_email_register.validate().is_err());

        let short_password_register = RegisterRequest {
            name: "Ann Example".to_string(),
            email: "test@example.com".to_string(),
            password: "12345".to_string(),
            password_confirmation: None,
        };
        assert!(short_password_register.validate().is_err());
    }

    #[test]
    fn test_requests_reject_unknown_fields() {
        let result: Result<LoginRequest, _> = serde_json::from_str(
            r#"{"email": "test@example.com", "password": "password123", "admin": true}"#,
        );
        assert!(result.is_err());
    }
}
