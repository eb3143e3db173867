use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assessment::{ConsistencyTableVersion, RiasecTransform, ScoringConfig};

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
    pub scoring: ScoringConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let scoring = ScoringConfig {
            riasec_scale: riasec_scale_from_env()?,
            consistency_table: consistency_table_from_env()?,
        };

        let data = DataConfig {
            norms_path: optional_path("APP_NORMS_PATH"),
            career_catalog_path: optional_path("APP_CAREER_CATALOG"),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring,
            data,
        })
    }
}

fn riasec_scale_from_env() -> Result<f64, ConfigError> {
    let Ok(raw) = env::var("APP_RIASEC_SCALE") else {
        return Ok(RiasecTransform::DEFAULT_SCALE);
    };

    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|scale| scale.is_finite() && *scale > 0.0)
        .ok_or(ConfigError::InvalidRiasecScale { value: raw })
}

fn consistency_table_from_env() -> Result<ConsistencyTableVersion, ConfigError> {
    match env::var("APP_CONSISTENCY_TABLE") {
        Ok(raw) => raw
            .parse()
            .map_err(|value| ConfigError::UnknownConsistencyTable { value }),
        Err(_) => Ok(ConsistencyTableVersion::default()),
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
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

/// Optional replacements for the built-in norm table and career catalog.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    pub norms_path: Option<PathBuf>,
    pub career_catalog_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRiasecScale { value: String },
    UnknownConsistencyTable { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRiasecScale { value } => write!(
                f,
                "APP_RIASEC_SCALE must be a positive number, got '{}'",
                value
            ),
            ConfigError::UnknownConsistencyTable { value } => write!(
                f,
                "APP_CONSISTENCY_TABLE must be 'current' or 'legacy', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRiasecScale { .. }
            | ConfigError::UnknownConsistencyTable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_RIASEC_SCALE",
            "APP_CONSISTENCY_TABLE",
            "APP_NORMS_PATH",
            "APP_CAREER_CATALOG",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring, ScoringConfig::default());
        assert!(config.data.norms_path.is_none());
        assert!(config.data.career_catalog_path.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn scoring_overrides_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_RIASEC_SCALE", "1.0");
        env::set_var("APP_CONSISTENCY_TABLE", "Legacy");
        env::set_var("APP_CAREER_CATALOG", " data/careers.csv ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.riasec_scale, 1.0);
        assert_eq!(
            config.scoring.consistency_table,
            ConsistencyTableVersion::Legacy
        );
        assert_eq!(
            config.data.career_catalog_path,
            Some(PathBuf::from("data/careers.csv"))
        );
        reset_env();
    }

    #[test]
    fn rejects_invalid_scoring_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_RIASEC_SCALE", "-2");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidRiasecScale { .. })
        ));

        reset_env();
        env::set_var("APP_CONSISTENCY_TABLE", "v3");
        match AppConfig::load() {
            Err(ConfigError::UnknownConsistencyTable { value }) => assert_eq!(value, "v3"),
            other => panic!("expected unknown table, got {other:?}"),
        }
        reset_env();
    }
}
