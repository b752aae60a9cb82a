use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Identity;
use crate::config::JwtConfig;
use crate::models::Role;

/// Payload shared by access and refresh tokens. The two kinds differ only in
/// which secret signed them and how far out `exp` sits.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub roles: Vec<Role>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    fn new(identity: &Identity, ttl_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: identity.id,
            username: identity.username.clone(),
            roles: identity.roles.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        }
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity {
            id: claims.sub,
            username: claims.username,
            roles: claims.roles,
        }
    }
}

/// Serialized camelCase to match the wire format clients already speak.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Signature verified but `exp` has passed.
    Expired,
    /// Well-formed token whose signature does not verify.
    Invalid,
    /// Input that is not structurally a token.
    Malformed,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenError::Expired => "expired token",
            TokenError::Invalid => "invalid token signature",
            TokenError::Malformed => "malformed token",
        })
    }
}

impl std::error::Error for TokenError {}

pub fn issue_access(identity: &Identity, jwt: &JwtConfig) -> Result<String, String> {
    sign(identity, &jwt.access_secret, jwt.access_ttl_secs)
}

pub fn issue_refresh(identity: &Identity, jwt: &JwtConfig) -> Result<String, String> {
    sign(identity, &jwt.refresh_secret, jwt.refresh_ttl_secs)
}

/// Mint both tokens for a verified identity. Called once per successful
/// sign-in and once per refresh.
pub fn issue_pair(identity: &Identity, jwt: &JwtConfig) -> Result<TokenPair, String> {
    Ok(TokenPair {
        access_token: issue_access(identity, jwt)?,
        refresh_token: issue_refresh(identity, jwt)?,
    })
}

pub fn validate_access(token: &str, jwt: &JwtConfig) -> Result<Claims, TokenError> {
    verify(token, &jwt.access_secret)
}

pub fn validate_refresh(token: &str, jwt: &JwtConfig) -> Result<Claims, TokenError> {
    verify(token, &jwt.refresh_secret)
}

fn sign(identity: &Identity, secret: &str, ttl_secs: i64) -> Result<String, String> {
    let claims = Claims::new(identity, ttl_secs);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 30;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::Invalid,
        _ => TokenError::Malformed,
    })
}
