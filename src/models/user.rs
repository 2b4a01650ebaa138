use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public projection of a user, as returned by the API.
/// Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Full user row, including the credential hash. Internal to credential
/// checks; convert with [`UserRecord::into_public`] before serializing.
#[derive(Debug, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn into_public(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_projection_drops_hash() {
        let record = UserRecord {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
        };

        let user = record.into_public();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json.get("email").and_then(|e| e.as_str()), Some("ann@x.com"));
        assert!(json.get("password_hash").is_none());
    }
}
