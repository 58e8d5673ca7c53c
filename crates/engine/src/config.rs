//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// CORS allowed origins. Empty disables the CORS layer; `["*"]` allows any.
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| {
                format!(
                    "SERVER_HOST '{}' is not a valid IP address",
                    self.server_host
                )
            })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn server_port_wins_over_port() {
        let config = config_from(&[("SERVER_PORT", "9000"), ("PORT", "9001")]).unwrap();
        assert_eq!(config.server_port, 9000);

        let config = config_from(&[("PORT", "9001")]).unwrap();
        assert_eq!(config.server_port, 9001);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            " http://localhost:5173, ,https://example.com ",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "https://example.com"]
        );
    }

    #[test]
    fn invalid_host_fails_at_bind_address() {
        let config = config_from(&[("SERVER_HOST", "not a host")]).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
