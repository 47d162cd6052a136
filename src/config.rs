//! Configuration for the console binaries.
//!
//! A TOML file at `<config_dir>/pkgsearch-console/config.toml`, all fields
//! optional. A missing file yields the defaults; an unreadable or invalid
//! file is a typed error. The API key is never read from the config file -
//! it comes from the environment or a CLI flag only.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default base URL of the package-search API service.
pub const DEFAULT_BASE_URL: &str = "https://winget-pkg-api.onrender.com";

/// Default client-side timeout for the status checker, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid api.base_url: {0}")]
    InvalidBaseUrl(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub render: RenderConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the API service (no trailing path).
    pub base_url: String,
    /// Client-side timeout for the health check.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("pkgsearch-console/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Rendering defaults applied when the CLI flags don't override them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Use compact mode (2-space indent, tight colons) by default.
    pub compact: bool,
}

impl Config {
    /// Platform path of the config file, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pkgsearch-console").join("config.toml"))
    }

    /// Load the configuration from the platform path, falling back to the
    /// defaults when no file is present.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        crate::http::validate_base_url(&self.api.base_url).map_err(ConfigError::InvalidBaseUrl)
    }
}
