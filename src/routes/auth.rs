use crate::{
    auth::{
        hash_password, issue_token, revoke_token, revoke_user_tokens, verify_password,
        AuthResponse, AuthUser, LoginRequest, RegisterRequest,
    },
    error::{field_error, AppError},
    models::{User, UserRecord},
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account, issues a token, and returns both.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    payload: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    if let Some(confirmation) = &payload.password_confirmation {
        if confirmation != &payload.password {
            return Err(field_error(
                "password_confirmation",
                "must_match",
                "Password confirmation does not match",
            ));
        }
    }

    // Check if email already exists
    let existing = sqlx::query_as::<_, (i32,)>("SELECT id FROM users WHERE email = $1")
        .bind(&payload.email)
        .fetch_optional(pool.get_ref())
        .await?;

    if existing.is_some() {
        return Err(field_error("email", "unique", "Email already registered"));
    }

    let password_hash = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3)
         RETURNING id, name, email, created_at",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&password_hash)
    .fetch_one(pool.get_ref())
    .await?;

    let token = issue_token(pool.get_ref(), user.id).await?;

    Ok(HttpResponse::Created().json(AuthResponse { user, token }))
}

/// Login user
///
/// Verifies credentials and returns a fresh token. The failure message is the
/// same whether the email is unknown or the password is wrong.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    payload: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    let record = sqlx::query_as::<_, UserRecord>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(&payload.email)
    .fetch_optional(pool.get_ref())
    .await?;

    let record = match record {
        Some(record) => record,
        None => return Err(AppError::Unauthorized("Invalid credentials".into())),
    };

    if !verify_password(&payload.password, &record.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    // Single-session policy: a fresh login invalidates any earlier tokens.
    revoke_user_tokens(pool.get_ref(), record.id).await?;
    let token = issue_token(pool.get_ref(), record.id).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: record.into_public(),
        token,
    }))
}

/// Logout user
///
/// Revokes the token presented on this request. A token that no longer
/// resolves never reaches this handler; the extractor rejects it with 401.
#[post("/logout")]
pub async fn logout(
    pool: web::Data<PgPool>,
    user: AuthUser,
) -> Result<impl Responder, AppError> {
    revoke_token(pool.get_ref(), &user.token).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Logged out successfully"
    })))
}
