//! Authentication middleware
//!
//! Validates bearer session tokens and attaches the decoded identity to the
//! request for downstream handlers. A missing token is rejected with 401, a
//! malformed or expired one with 403.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::error::AppError;
use crate::services::auth::Claims;
use crate::AppState;

/// Authenticated user information extracted from the session token
///
/// The role is carried for auditing but not enforced per route.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

/// Authentication middleware that validates session tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => return AppError::MissingToken.into_response(),
    };

    let claims = match decode_token(token, &state.config.jwt.secret) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    let user_id = match Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(_) => return AppError::InvalidToken.into_response(),
    };

    request.extensions_mut().insert(AuthUser {
        user_id,
        email: claims.email,
        role: claims.role,
    });

    next.run(request).await
}

/// Decode and validate a session token
fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

/// Extractor for the authenticated user
///
/// Use this in handlers to get the identity attached by `auth_middleware`.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AppError::MissingToken)
    }
}
