use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::db;
use crate::db::users::NewUser;
use crate::error::AppError;
use crate::models::{Role, User};
use crate::pagination::{PageQuery, Paginated};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub rows: Option<i64>,
    pub status: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub title: Option<String>,
    pub name: String,
    pub lastname: Option<String>,
    pub username: String,
    pub password: String,
    #[serde(default = "default_roles")]
    pub roles: Vec<Role>,
    pub status_id: Option<i32>,
}

fn default_roles() -> Vec<Role> {
    vec![Role::User]
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatus {
    pub status_id: Option<i32>,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Paginated<User>>, AppError> {
    let query = PageQuery {
        page: params.page.unwrap_or(1).max(1),
        rows: params.rows.unwrap_or(10).min(100).max(1),
    };

    let (users, count) = db::users::list(&state.pool, &query, params.status).await?;
    Ok(Json(Paginated::new(users, &query, count)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateUser>,
) -> Result<Json<User>, AppError> {
    if req.name.is_empty() || req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "name, username and password are required".to_string(),
        ));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        &NewUser {
            title: req.title.as_deref(),
            name: &req.name,
            lastname: req.lastname.as_deref(),
            username: &req.username,
            password_hash: &pw_hash,
            roles: &req.roles,
            status_id: req.status_id,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A user with this username already exists".to_string())
        }
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::BadRequest("Unknown status".to_string())
        }
        _ => AppError::Database(e),
    })?;

    tracing::info!("User {} created by {}", user.username, auth.username);

    Ok(Json(user))
}

pub async fn set_status(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetStatus>,
) -> Result<Json<User>, AppError> {
    let user = db::users::set_status(&state.pool, id, req.status_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Unknown status".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    tracing::info!(
        "User {} status set to {:?} by {}",
        user.username,
        user.status_id,
        auth.username
    );

    Ok(Json(user))
}
