use std::path::PathBuf;

use thiserror::Error;

use super::{
    Config, ConfigMetadata, CorsConfig, ScannerSettings, ServerConfig,
    UiConfig,
};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// One non-fatal configuration problem, logged at startup.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, message: impl Into<String>, hint: Option<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint,
        });
    }
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

/// Builds a [`Config`] from the process environment.
///
/// Unparseable values fall back to defaults and produce warnings rather
/// than hard failures; a missing `.env` file is not an error.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded =
            dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                other => Err(other),
            })?;

        let mut warnings = ConfigWarnings::default();

        let defaults = ServerConfig::default();
        let host = std::env::var("SERVER_HOST")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_env("SERVER_PORT", defaults.port, &mut warnings);

        let dev_mode = parse_env("TECHSCAN_DEV_MODE", false, &mut warnings);

        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let follow_links =
            parse_env("SCAN_FOLLOW_LINKS", false, &mut warnings);
        let max_depth = match std::env::var("SCAN_MAX_DEPTH") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(depth) => Some(depth),
                Err(_) => {
                    warnings.push(
                        format!("SCAN_MAX_DEPTH is not a valid depth: {raw}"),
                        Some(
                            "expected a non-negative integer; scanning \
                             without a depth limit"
                                .to_string(),
                        ),
                    );
                    None
                }
            },
            Err(_) => None,
        };

        let dist_dir = std::env::var("UI_DIST_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| UiConfig::default().dist_dir);

        let config = Config {
            server: ServerConfig { host, port },
            cors: CorsConfig { allowed_origins },
            scanner: ScannerSettings {
                follow_links,
                max_depth,
            },
            ui: UiConfig { dist_dir },
            dev_mode,
            metadata: ConfigMetadata { env_file_loaded },
        };

        Ok(ConfigLoad { config, warnings })
    }
}

fn parse_env<T: std::str::FromStr>(
    key: &str,
    default: T,
    warnings: &mut ConfigWarnings,
) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warnings.push(
                    format!("{key} has an unparseable value: {raw}"),
                    Some("falling back to the built-in default".to_string()),
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
