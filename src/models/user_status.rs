use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct UserStatus {
    pub id: i32,
    pub name: String,
}
