use sqlx::PgPool;

use crate::auth::{password, Identity};
use crate::db;
use crate::error::AppError;

/// Check a submitted username/password against the directory. Returns the
/// verified identity with its current role snapshot, or `None` for both
/// "no such user" and "wrong password"; callers must not be able to tell
/// the two cases apart.
pub async fn verify(
    pool: &PgPool,
    username: &str,
    raw_password: &str,
) -> Result<Option<Identity>, AppError> {
    let Some(user) = db::users::find_by_username(pool, username).await? else {
        return Ok(None);
    };

    let valid = password::verify(raw_password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Ok(None);
    }

    Ok(Some(Identity {
        id: user.id,
        username: user.username,
        roles: user.roles,
    }))
}
