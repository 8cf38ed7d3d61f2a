//! Load [`AppConfig`] from environment variables (after `.env`, if present).

use crate::config::types::{ApiSettings, AppConfig, StoreBackend};
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tutorials";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_API_PREFIX: &str = "/api";

impl AppConfig {
    /// Read settings from the process environment. Loads `.env` first; a missing file is fine.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let store_backend = match lookup("STORE_BACKEND") {
            Some(v) => parse_backend(&v)?,
            None => StoreBackend::Postgres,
        };
        let bind_addr: SocketAddr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let api_prefix = normalize_prefix(&lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.into()));
        let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", "5")?;
        let acquire_secs: u64 = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", "30")?;
        let max_body_bytes: usize = parse_or(&lookup, "MAX_BODY_BYTES", "65536")?;
        let require_title = match lookup("REQUIRE_TITLE") {
            Some(v) => parse_bool("REQUIRE_TITLE", &v)?,
            None => false,
        };

        Ok(AppConfig {
            database_url,
            store_backend,
            bind_addr,
            api_prefix,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_secs),
            max_body_bytes,
            api: ApiSettings { require_title },
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    match raw.trim().parse() {
        Ok(v) => Ok(v),
        Err(_) => Err(ConfigError::InvalidValue { var, value: raw }),
    }
}

fn parse_backend(s: &str) -> Result<StoreBackend, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
        "memory" => Ok(StoreBackend::Memory),
        other => Err(ConfigError::UnknownBackend(other.to_string())),
    }
}

fn parse_bool(var: &'static str, s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { var, value: s.to_string() }),
    }
}

/// Leading slash, no trailing slash. An empty or "/" prefix mounts at the root.
fn normalize_prefix(p: &str) -> String {
    let trimmed = p.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
