use std::net::IpAddr;
use std::sync::LazyLock;
use std::time::Duration;

use axum::http::HeaderValue;
use regex::Regex;

static TABLE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").unwrap());

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub contact_table: String,
    pub db_max_connections: u32,
    pub store_timeout: Duration,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("SOLVIFY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SOLVIFY_HOST: {e}"))?;

        let port: u16 = env_or("SOLVIFY_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SOLVIFY_PORT: {e}"))?;

        let contact_table = env_or("SOLVIFY_CONTACT_TABLE", "contacts");
        validate_table_name(&contact_table)
            .map_err(|e| format!("Invalid SOLVIFY_CONTACT_TABLE: {e}"))?;

        let db_max_connections: u32 = env_or("SOLVIFY_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid SOLVIFY_DB_MAX_CONNECTIONS: {e}"))?;
        if db_max_connections == 0 {
            return Err("Invalid SOLVIFY_DB_MAX_CONNECTIONS: must be at least 1".to_string());
        }

        let store_timeout_secs: u64 = env_or("SOLVIFY_STORE_TIMEOUT_SECS", "5")
            .parse()
            .map_err(|e| format!("Invalid SOLVIFY_STORE_TIMEOUT_SECS: {e}"))?;
        if store_timeout_secs == 0 {
            return Err("Invalid SOLVIFY_STORE_TIMEOUT_SECS: must be at least 1".to_string());
        }

        let max_body_size: usize = env_or("SOLVIFY_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SOLVIFY_MAX_BODY_SIZE: {e}"))?;

        let cors_origins: Vec<String> = env_or("SOLVIFY_CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                HeaderValue::from_str(s)
                    .map(|_| s.to_string())
                    .map_err(|e| format!("Invalid SOLVIFY_CORS_ORIGINS entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let log_level = env_or("SOLVIFY_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            contact_table,
            db_max_connections,
            store_timeout: Duration::from_secs(store_timeout_secs),
            max_body_size,
            cors_origins,
            log_level,
        })
    }
}

/// The table name is interpolated into SQL, so only plain identifiers pass.
pub fn validate_table_name(name: &str) -> Result<(), String> {
    if TABLE_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "'{name}' must start with a letter or underscore and contain only letters, digits, and underscores"
        ))
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
