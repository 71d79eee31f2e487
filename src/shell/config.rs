// Server configuration, read once at process start and never mutated afterwards.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const API_PATH: &str = "/graphql";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_CLIENT_BUILD_DIR: &str = "client/build";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

/// Selects how unmatched routes are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    /// Production serves the client build, with `index.html` for every unmatched path.
    pub fn serves_client(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub client_build_dir: PathBuf,
    pub auth_tokens_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            client_build_dir: PathBuf::from(DEFAULT_CLIENT_BUILD_DIR),
            auth_tokens_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so callers other than `from_env`
    /// never have to touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => defaults.port,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        let environment = lookup("APP_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();

        let client_build_dir = lookup("CLIENT_BUILD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.client_build_dir);

        let auth_tokens_file = lookup("AUTH_TOKENS_FILE").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            environment,
            client_build_dir,
            auth_tokens_file,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn fallback_document(&self) -> PathBuf {
        self.client_build_dir.join("index.html")
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_string())),
    }
}
