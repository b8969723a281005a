//! TOML config file discovery and loading.

use crate::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file was not valid TOML for the expected schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// A required credential was found neither in the config file nor in
    /// the environment.
    #[error("missing credential: set {name} in the environment or in the config file")]
    MissingCredential {
        /// Environment variable name for the credential.
        name: &'static str,
    },
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

const CONFIG_FILE_NAME: &str = "repolens.toml";

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist and parse. Otherwise the
    /// search order is `./repolens.toml`, then
    /// `<user config dir>/repolens/config.toml`; if neither exists the
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> ConfigResult<Config> {
        if let Some(path) = path {
            return Config::from_file(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "loading config file");
                return Config::from_file(&candidate);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Parse a single TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Config> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("repolens").join("config.toml"));
        }
        paths
    }
}
