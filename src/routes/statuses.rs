use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::UserStatus;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateStatus {
    pub name: String,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<UserStatus>>, AppError> {
    let statuses = db::user_statuses::list(&state.pool).await?;
    Ok(Json(statuses))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateStatus>,
) -> Result<Json<UserStatus>, AppError> {
    if req.name.is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let status = db::user_statuses::create(&state.pool, &req.name).await?;
    tracing::info!("Status '{}' created by {}", status.name, auth.username);
    Ok(Json(status))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = db::user_statuses::delete(&state.pool, id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::Conflict("Status is still assigned to users".to_string())
            }
            _ => AppError::Database(e),
        })?;

    if !removed {
        return Err(AppError::NotFound("Status not found".to_string()));
    }

    tracing::info!("Status {id} deleted by {}", auth.username);

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
