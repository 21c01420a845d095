use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::hiring::{EvaluatorConfig, SimilarityMode};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub store: StoreConfig,
    pub hiring: HiringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let backend = match var_or("ITEMS_STORE", "memory")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" | "in-memory" => StoreBackend::Memory,
            "document" | "file" => StoreBackend::Document {
                path: PathBuf::from(var_or("ITEMS_STORE_PATH", "data/items.json")),
            },
            other => return Err(ConfigError::InvalidStoreBackend(other.to_string())),
        };
        let seed_demo_items = parse_flag("ITEMS_SEED", &var_or("ITEMS_SEED", "false"))?;

        let home_country = var_or("HIRING_HOME_COUNTRY", "TURKEY");
        let similarity_mode = match var_or("HIRING_SIMILARITY", "truncating")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "truncating" => SimilarityMode::Truncating,
            "proportional" => SimilarityMode::Proportional,
            other => return Err(ConfigError::InvalidSimilarityMode(other.to_string())),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            store: StoreConfig {
                backend,
                seed_demo_items,
            },
            hiring: HiringConfig {
                home_country,
                similarity_mode,
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where catalog items live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Document { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Pre-populate an in-memory store with demo inventory.
    pub seed_demo_items: bool,
}

/// Knobs for the application evaluator that vary per deployment.
#[derive(Debug, Clone)]
pub struct HiringConfig {
    pub home_country: String,
    pub similarity_mode: SimilarityMode,
}

impl HiringConfig {
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig {
            home_country: self.home_country.clone(),
            similarity_mode: self.similarity_mode,
            ..EvaluatorConfig::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStoreBackend(String),
    InvalidSimilarityMode(String),
    InvalidFlag { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidStoreBackend(value) => {
                write!(f, "ITEMS_STORE must be 'memory' or 'document' (got '{value}')")
            }
            ConfigError::InvalidSimilarityMode(value) => write!(
                f,
                "HIRING_SIMILARITY must be 'truncating' or 'proportional' (got '{value}')"
            ),
            ConfigError::InvalidFlag { key } => write!(f, "{key} must be true or false"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidStoreBackend(_)
            | ConfigError::InvalidSimilarityMode(_)
            | ConfigError::InvalidFlag { .. } => None,
        }
    }
}
