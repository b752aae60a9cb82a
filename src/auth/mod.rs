pub mod credentials;
pub mod extractor;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod policy;

use uuid::Uuid;

use crate::models::Role;

/// Verified caller identity: produced by credential verification and
/// embedded as a snapshot into every issued token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
    pub roles: Vec<Role>,
}
