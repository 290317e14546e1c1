//! Server and database configuration
//!
//! The only mandatory value is the PostgreSQL connection string. Its absence
//! is reported as [`ConfigError::MissingDatabaseUrl`] before any network
//! activity takes place.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Default maximum connections for the pool.
/// Kept low; each request issues at most one query.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors raised while assembling server settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set; a PostgreSQL connection string is required")]
    MissingDatabaseUrl,

    #[error("invalid bind address '{addr}': {reason}")]
    InvalidBindAddr { addr: String, reason: String },

    #[error("max connections must be at least 1")]
    ZeroConnections,

    #[error("request timeout must be at least 1 second")]
    ZeroTimeout,
}

/// PostgreSQL connection settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    url: String,
    max_connections: u32,
}

impl DatabaseConfig {
    /// Build from an optional connection string.
    ///
    /// Blank strings are treated the same as an absent value.
    pub fn new(url: Option<String>) -> Result<Self, ConfigError> {
        let url = url
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    /// Read the connection string from `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(std::env::var(DATABASE_URL_VAR).ok())
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Result<Self, ConfigError> {
        if max_connections == 0 {
            return Err(ConfigError::ZeroConnections);
        }
        self.max_connections = max_connections;
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

// Connection strings carry credentials; never print them.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    /// Per-request timeout
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Build from a host string and port.
    pub fn new(host: &str, port: u16) -> Result<Self, ConfigError> {
        let ip: IpAddr = host.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidBindAddr {
                addr: host.to_owned(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            ..Self::default()
        })
    }

    /// Set the per-request timeout. A zero timeout would fail every request.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.request_timeout = timeout;
        Ok(self)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_config_error() {
        let err = DatabaseConfig::new(None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn blank_url_is_config_error() {
        let err = DatabaseConfig::new(Some("   ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn url_is_trimmed_and_defaults_apply() {
        let config = DatabaseConfig::new(Some(" postgres://localhost/feedback ".into())).unwrap();
        assert_eq!(config.url(), "postgres://localhost/feedback");
        assert_eq!(config.max_connections(), DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn zero_connections_rejected() {
        let config = DatabaseConfig::new(Some("postgres://localhost/feedback".into())).unwrap();
        assert!(matches!(
            config.with_max_connections(0),
            Err(ConfigError::ZeroConnections)
        ));
    }

    #[test]
    fn debug_redacts_url() {
        let config = DatabaseConfig::new(Some("postgres://user:hunter2@db/feedback".into())).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn server_config_rejects_bad_host() {
        let err = ServerConfig::new("not-an-ip", 8080).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = ServerConfig::default()
            .with_request_timeout(Duration::ZERO)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));

        let config = ServerConfig::default()
            .with_request_timeout(Duration::from_secs(5))
            .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn server_config_accepts_any_interface() {
        let config = ServerConfig::new("0.0.0.0", 8080).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    }
}
