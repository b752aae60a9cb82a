use sqlx::PgPool;
use uuid::Uuid;

use crate::models::role::join_roles;
use crate::models::{Role, User};
use crate::pagination::PageQuery;

/// Column values for a user insert. Password arrives pre-hashed.
pub struct NewUser<'a> {
    pub title: Option<&'a str>,
    pub name: &'a str,
    pub lastname: Option<&'a str>,
    pub username: &'a str,
    pub password_hash: &'a str,
    pub roles: &'a [Role],
    pub status_id: Option<i32>,
}

pub async fn create(pool: &PgPool, new_user: &NewUser<'_>) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (title, name, lastname, username, password_hash, roles, status_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(new_user.title)
    .bind(new_user.name)
    .bind(new_user.lastname)
    .bind(new_user.username)
    .bind(new_user.password_hash)
    .bind(join_roles(new_user.roles))
    .bind(new_user.status_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// One page of the directory in creation order, plus the total count of rows
/// matching the same filter regardless of page bounds.
pub async fn list(
    pool: &PgPool,
    query: &PageQuery,
    status: Option<i32>,
) -> Result<(Vec<User>, i64), sqlx::Error> {
    let users = match status {
        Some(status_id) => {
            sqlx::query_as::<_, User>(
                "SELECT * FROM users WHERE status_id = $1
                 ORDER BY created_at, id
                 LIMIT $2 OFFSET $3",
            )
            .bind(status_id)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, User>(
                "SELECT * FROM users
                 ORDER BY created_at, id
                 LIMIT $1 OFFSET $2",
            )
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(pool)
            .await?
        }
    };

    let (count,): (i64,) = match status {
        Some(status_id) => {
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE status_id = $1")
                .bind(status_id)
                .fetch_one(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?
        }
    };

    Ok((users, count))
}

pub async fn set_status(
    pool: &PgPool,
    id: Uuid,
    status_id: Option<i32>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET status_id = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status_id)
    .fetch_optional(pool)
    .await
}
