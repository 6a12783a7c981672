//! Runtime configuration: models plus an environment-driven loader.

pub mod loader;

use std::path::PathBuf;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigWarning, ConfigWarnings,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub scanner: ScannerSettings,
    pub ui: UiConfig,
    /// Relaxes CORS; intended for local development only
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            scanner: ScannerSettings::default(),
            ui: UiConfig::default(),
            dev_mode: false,
            metadata: ConfigMetadata::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty list means any origin is allowed
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScannerSettings {
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Directory holding the built single-page front end
    pub dist_dir: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("ui"),
        }
    }
}

/// Facts about how the configuration was assembled, surfaced at startup.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub env_file_loaded: bool,
}
