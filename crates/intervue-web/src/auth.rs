//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::SharedState;

/// The authenticated caller. Handlers that take this reject requests
/// without a valid `Authorization: Bearer <token>` header with 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl AuthUser {
    /// Key used for per-user rows.
    pub fn key(&self) -> String {
        self.user_id.to_string()
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized("Authentication required".to_string()))?;

        if bearer.token().is_empty() {
            return Err(ApiError::Unauthorized("Authentication required".to_string()));
        }

        let claims = state.tokens.verify(bearer.token()).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            ApiError::Unauthorized("Invalid token".to_string())
        })?;
        let user_id = claims
            .user_uuid()
            .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))?;

        Ok(Self { user_id })
    }
}
