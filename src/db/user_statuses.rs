use sqlx::PgPool;

use crate::models::UserStatus;

pub async fn create(pool: &PgPool, name: &str) -> Result<UserStatus, sqlx::Error> {
    sqlx::query_as::<_, UserStatus>("INSERT INTO user_statuses (name) VALUES ($1) RETURNING *")
        .bind(name)
        .fetch_one(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<UserStatus>, sqlx::Error> {
    sqlx::query_as::<_, UserStatus>("SELECT * FROM user_statuses ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Returns whether a row was removed. Deleting a status still referenced by
/// users fails with a foreign-key violation the caller maps to a conflict.
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM user_statuses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
