use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::auth::repo;
use crate::auth::services::JwtKeys;
use crate::error::ApiError;
use crate::state::AppState;

/// A resolved session: the verified, unrevoked claims of the bearer token.
///
/// Handlers that only need the user ID should take [`AuthUser`]; logout needs
/// the token ID and expiry as well.
#[derive(Debug)]
pub struct AuthSession(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Read Authorization header
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthenticated("Missing Authorization header"))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(ApiError::Unauthenticated("Invalid auth scheme"))?;

        let keys = JwtKeys::from_config(&state.config.jwt);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Unauthenticated("Invalid or expired token")
        })?;

        // A logged-out token is as dead as an expired one.
        if repo::is_token_revoked(&state.db, claims.jti).await? {
            warn!(user_id = %claims.sub, "revoked token presented");
            return Err(ApiError::Unauthenticated("Invalid or expired token"));
        }

        Ok(AuthSession(claims))
    }
}

/// Extracts and validates the bearer token, returning the user ID.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthSession(claims) = AuthSession::from_request_parts(parts, state).await?;
        Ok(AuthUser(claims.sub))
    }
}
