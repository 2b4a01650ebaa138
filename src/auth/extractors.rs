use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;

use crate::auth::token::resolve_token;
use crate::error::AppError;

/// The authenticated caller, resolved from the `Authorization: Bearer` header
/// against the token store.
///
/// Every protected handler takes this extractor, so token resolution is the
/// gate in front of all task and logout operations. A missing header, a
/// malformed header, or a revoked token all fail with 401 before the handler
/// body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// The exact token the caller presented; logout revokes this one.
    pub token: String,
}

impl FromRequest for AuthUser {
    type Error = ActixError; // AppError converts into ActixError via ResponseError
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<PgPool>>().cloned();
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        Box::pin(async move {
            let pool = pool.ok_or_else(|| {
                AppError::InternalServerError("Database pool not configured".into())
            })?;
            let token = bearer.ok_or_else(|| AppError::Unauthorized("Missing token".into()))?;
            let user = resolve_token(&pool, &token).await?;
            Ok(user)
        })
    }
}
