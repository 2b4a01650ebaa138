//! Opaque bearer tokens backed by the `access_tokens` table.
//!
//! Tokens are random strings with no embedded claims; every resolution is a
//! database lookup and revocation is a row delete, so a logged-out token is
//! dead immediately. Issued on registration and login, presented as
//! `Authorization: Bearer <token>` on every protected request.

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::error::AppError;

/// Generates a fresh opaque token string: 64 hex characters from two
/// UUIDv4s, 244 bits of randomness in total.
pub fn generate_token_string() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Issues a new token for `user_id` and persists it.
pub async fn issue_token(pool: &PgPool, user_id: i32) -> Result<String, AppError> {
    let token = generate_token_string();

    sqlx::query("INSERT INTO access_tokens (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(token)
}

/// Resolves a presented token to its owning user.
///
/// Fails with `AppError::Unauthorized` when the token is unknown or has been
/// revoked. The error message is constant and does not distinguish the two.
pub async fn resolve_token(pool: &PgPool, token: &str) -> Result<AuthUser, AppError> {
    let row = sqlx::query_as::<_, (i32, String, String)>(
        "SELECT u.id, u.name, u.email
         FROM access_tokens t
         JOIN users u ON u.id = t.user_id
         WHERE t.token = $1",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    match row {
        Some((id, name, email)) => Ok(AuthUser {
            id,
            name,
            email,
            token: token.to_owned(),
        }),
        None => Err(AppError::Unauthorized("Invalid token".into())),
    }
}

/// Revokes a single token. An unknown or already-revoked token is reported
/// as `AppError::Unauthorized` rather than a silent success.
pub async fn revoke_token(pool: &PgPool, token: &str) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM access_tokens WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::Unauthorized("Invalid token".into()));
    }

    Ok(())
}

/// Revokes every token belonging to `user_id`. Called on login to enforce
/// the single-active-session policy.
pub async fn revoke_user_tokens(pool: &PgPool, user_id: i32) -> Result<(), AppError> {
    sqlx::query("DELETE FROM access_tokens WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
