//! Registration, login and the current account.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use intervue_common::user::normalize_email;
use intervue_common::{User, UserInfo};
use intervue_db::DbError;
use intervue_security::{hash_password, verify_password, PasswordPolicy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::ApiJson;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserInfo,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let name = req.name.trim();
    let email = normalize_email(&req.email);
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest("Name, email and password are required".to_string()));
    }
    if !is_plausible_email(&email) {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }
    PasswordPolicy::enforce(&req.password)?;

    let user = User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email,
        password_hash: hash_password(&req.password)?,
        created_at: Utc::now(),
    };
    match state.users.insert(&user).await {
        Ok(()) => {}
        Err(DbError::Duplicate(_)) => {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(user_id = %user.id, "Registered user");
    let token = state.tokens.issue(&user.id.to_string())?;
    Ok((StatusCode::CREATED, Json(AuthResponse { token, user: UserInfo::from(&user) })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let invalid = || ApiError::Unauthorized("Invalid credentials".to_string());

    let user = state.users.find_by_email(&req.email).await?.ok_or_else(invalid)?;
    if !verify_password(&req.password, &user.password_hash) {
        tracing::debug!(user_id = %user.id, "Password mismatch");
        return Err(invalid());
    }

    let token = state.tokens.issue(&user.id.to_string())?;
    Ok(Json(AuthResponse { token, user: UserInfo::from(&user) }))
}

/// GET /api/auth/me
pub async fn me(State(state): State<SharedState>, auth: AuthUser) -> Result<Json<MeResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(MeResponse { user: UserInfo::from(&user) }))
}

/// One `@` with something on both sides and a dot in the domain.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
