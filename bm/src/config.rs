use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument, trace};

pub const DB_PATH_ENV: &str = "BM_DB_PATH";
pub const DEFAULT_DB_PATH: &str = "./bm.sqlite";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// `~/.config/bm/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/bm/config.toml"))
}

fn read_settings_file(path: &Path) -> ConfigResult<Settings> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Settings>(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from defaults, a config file and the environment.
///
/// An explicitly given config file must exist and parse. The default config
/// file is optional and skipped with a debug message when broken.
/// `BM_DB_PATH` overrides whatever the file says.
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> ConfigResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        Some(path) => read_settings_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => read_settings_file(&path).unwrap_or_else(|e| {
                debug!("Ignoring config file: {}", e);
                Settings::default()
            }),
            None => Settings::default(),
        },
    };

    // Override with environment variables
    if let Ok(db_path) = std::env::var(DB_PATH_ENV) {
        trace!("Using {} from environment: {}", DB_PATH_ENV, db_path);
        settings.db_path = db_path;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    toml::to_string_pretty(&Settings::default())
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
