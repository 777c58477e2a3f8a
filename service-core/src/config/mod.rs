use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::{Deserialize, de::DeserializeOwned};
use std::path::Path;

pub const ENV_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for request bodies, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector, e.g. `http://tempo:4317`. Spans are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Loads `T` from an optional configuration file overlaid with `APP_*`
/// environment variables (`__` separates nested keys).
pub fn load<T: DeserializeOwned>(file: &Path) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    layered(
        file,
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}

fn layered<T: DeserializeOwned>(file: &Path, environment: Environment) -> Result<T, AppError> {
    let config = Cfg::builder()
        .add_source(File::from(file).required(false))
        .add_source(environment)
        .build()?;

    Ok(config.try_deserialize()?)
}
