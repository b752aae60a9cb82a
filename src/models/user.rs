use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::models::role::{parse_roles, Role};

/// Serialized camelCase to match the wire format clients already speak. The
/// password hash never leaves the directory boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub title: Option<String>,
    pub name: String,
    pub lastname: Option<String>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub status_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Manual FromRow so the comma-separated `roles` column decodes into the
// typed role set.
impl<'r> sqlx::FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let roles: String = row.try_get("roles")?;
        Ok(User {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            name: row.try_get("name")?,
            lastname: row.try_get("lastname")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            roles: parse_roles(&roles),
            status_id: row.try_get("status_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
