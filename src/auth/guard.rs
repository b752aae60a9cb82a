use axum::extract::{MatchedPath, Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::extractor::AuthUser;
use crate::auth::{jwt, policy};
use crate::error::AppError;
use crate::models::Role;
use crate::state::SharedState;

/// Any-of role check. An empty requirement admits every authenticated
/// caller; otherwise at least one caller role must appear in the
/// requirement.
pub fn authorize(required: &[Role], caller: &[Role]) -> bool {
    required.is_empty() || required.iter().any(|role| caller.contains(role))
}

/// Shared interceptor for protected routes: extract the bearer access
/// token, validate it, then check the caller's roles against the policy
/// table for the matched route. A token failure is 401; a role failure on a
/// valid token is 403. The decoded caller is stored as a request extension
/// for handlers to pick up.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&req)
        .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

    let claims = jwt::validate_access(&token, &state.config.jwt).map_err(|e| {
        tracing::debug!("Access token rejected: {e}");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    // The policy table is keyed by route template, so a raw path must never
    // be looked up in it. route_layer guarantees MatchedPath; anything else
    // fails closed.
    let Some(matched) = req.extensions().get::<MatchedPath>() else {
        return Err(AppError::Internal(
            "No matched route for policy lookup".to_string(),
        ));
    };
    let required = policy::required_roles(req.method(), matched.as_str());

    if !authorize(required, &claims.roles) {
        return Err(AppError::Forbidden("Insufficient role".to_string()));
    }

    req.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(str::to_string)
}
