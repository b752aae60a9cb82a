use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub jwt: JwtConfig,
}

/// Signing secrets and lifetimes for the two token kinds. Loaded once at
/// startup and immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let access_secret = env_required("JWT_ACCESS_SECRET")?;
        let refresh_secret = env_required("JWT_REFRESH_SECRET")?;

        let access_ttl_secs: i64 = env_or("ROSTER_ACCESS_TTL_SECS", "900")
            .parse()
            .map_err(|e| format!("Invalid ROSTER_ACCESS_TTL_SECS: {e}"))?;

        let refresh_ttl_secs: i64 = env_or("ROSTER_REFRESH_TTL_SECS", "604800")
            .parse()
            .map_err(|e| format!("Invalid ROSTER_REFRESH_TTL_SECS: {e}"))?;

        let host: IpAddr = env_or("ROSTER_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ROSTER_HOST: {e}"))?;

        let port: u16 = env_or("ROSTER_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ROSTER_PORT: {e}"))?;

        let log_level = env_or("ROSTER_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            jwt: JwtConfig {
                access_secret,
                refresh_secret,
                access_ttl_secs,
                refresh_ttl_secs,
            },
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
