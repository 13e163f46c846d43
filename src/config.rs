//! User configuration loaded from `config.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has wrong value types.
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The platform does not provide a config directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}

/// Application settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Largest accepted image, in MiB.
    pub max_image_mib: u64,
    /// How long the simulated submission takes, in milliseconds.
    pub submit_delay_ms: u64,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_image_mib: 10,
            submit_delay_ms: 1500,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads `~/.config/rentdraft/config.toml`, falling back to defaults if
    /// the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&dir.join("rentdraft").join("config.toml"))
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Per-image size limit in bytes.
    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_mib.saturating_mul(1024 * 1024)
    }

    /// Delay used by the simulated submitter.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Returns the log file path (`~/.local/share/rentdraft/rentdraft.log`),
/// creating its directory if needed.
pub fn log_file_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    let dir = data_dir.join("rentdraft");
    fs::create_dir_all(&dir).map_err(|source| ConfigError::Read {
        path: dir.clone(),
        source,
    })?;
    Ok(dir.join("rentdraft.log"))
}
