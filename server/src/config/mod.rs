use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/events";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 3001;

/// Where events and speakers are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    /// Process-local, for demos and local runs without a database.
    Memory,
}

impl StorageBackend {
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("postgres") | Some("postgresql") => Self::Postgres,
            Some("memory") | Some("in-memory") => Self::Memory,
            Some(other) => {
                tracing::warn!(
                    "Config: Unknown STORAGE_BACKEND '{}', falling back to postgres",
                    other
                );
                Self::Postgres
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        let host = parse_or("HOST", env::var("HOST").ok(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port = parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT);

        Self {
            storage: StorageBackend::parse(env::var("STORAGE_BACKEND").ok().as_deref()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                env::var("DATABASE_MAX_CONNECTIONS").ok(),
                DEFAULT_MAX_CONNECTIONS,
            ),
            bind_addr: SocketAddr::new(host, port),
        }
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Config: Invalid {} '{}', using default", name, value);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(StorageBackend::parse(None), StorageBackend::Postgres);
        assert_eq!(StorageBackend::parse(Some("Memory")), StorageBackend::Memory);
        assert_eq!(StorageBackend::parse(Some(" postgres ")), StorageBackend::Postgres);
        assert_eq!(StorageBackend::parse(Some("sqlite")), StorageBackend::Postgres);
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or("PORT", None, 3001u16), 3001);
        assert_eq!(parse_or("PORT", Some("8080".to_string()), 3001u16), 8080);
        assert_eq!(parse_or("PORT", Some("http".to_string()), 3001u16), 3001);
        assert_eq!(parse_or("PORT", Some("70000".to_string()), 3001u16), 3001);
    }
}
