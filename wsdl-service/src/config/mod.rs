use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig, TelemetryConfig};
use service_core::error::AppError;

const SERVICE_DIR: &str = "wsdl-service";

#[derive(Debug, Clone, Deserialize)]
pub struct WsdlConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Default for WsdlConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn default_service_name() -> String {
    SERVICE_DIR.to_string()
}

impl WsdlConfig {
    /// Reads `config/base.yaml` (if present) and `APP_*` overrides.
    pub fn load() -> Result<Self, AppError> {
        let base_path = std::env::current_dir()?;

        // Works both from the workspace root and from inside the crate.
        let configuration_directory = if base_path.ends_with(SERVICE_DIR) {
            base_path.join("config")
        } else {
            base_path.join(SERVICE_DIR).join("config")
        };

        core_config::load(&configuration_directory.join("base.yaml"))
    }
}
