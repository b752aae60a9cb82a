use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::jwt::{self, TokenPair};
use crate::auth::{credentials, Identity};
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

pub async fn signin(
    State(state): State<SharedState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<TokenPair>, AppError> {
    if state.login_limiter.check(&req.username).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    // Unknown username and wrong password collapse into the same response.
    let Some(identity) = credentials::verify(&state.pool, &req.username, &req.password).await?
    else {
        state.login_limiter.record_failure(&req.username);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    };

    let pair = jwt::issue_pair(&identity, &state.config.jwt).map_err(AppError::Internal)?;
    Ok(Json(pair))
}

/// Re-issues a token pair from the refresh token's embedded identity. The
/// directory is not consulted, so role changes take effect only after the
/// next full sign-in.
pub async fn refresh(
    State(state): State<SharedState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let claims = jwt::validate_refresh(&req.refresh_token, &state.config.jwt).map_err(|e| {
        tracing::debug!("Refresh rejected: {e}");
        AppError::Unauthorized("Invalid refresh token".to_string())
    })?;

    let identity = Identity::from(claims);
    let pair = jwt::issue_pair(&identity, &state.config.jwt).map_err(AppError::Internal)?;
    Ok(Json(pair))
}
