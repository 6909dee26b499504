// Configuration loading and parsing (xpt.toml).
//
// Every key is optional. The file is looked up in `./config/xpt.toml` first,
// then in the platform config directory; with neither present the built-in
// defaults apply.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::client::{XptEndpoint, DEFAULT_BASE_URL};
use crate::season::{Season, SeasonType};

pub const CONFIG_FILE_NAME: &str = "xpt.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub xpt_endpoint: XptEndpoint,
    /// Per-request timeout. Unset means requests wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            xpt_endpoint: XptEndpoint::default(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub default_season: Season,
    pub default_season_type: SeasonType,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration relative to `base_dir`, falling back to `user_dir`
/// and then to defaults. Returns the config and the file it came from.
pub(crate) fn load_config_from(
    base_dir: &Path,
    user_dir: Option<&Path>,
) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let candidates = std::iter::once(base_dir.join("config").join(CONFIG_FILE_NAME))
        .chain(user_dir.map(|d| d.join(CONFIG_FILE_NAME)));

    for path in candidates {
        if path.is_file() {
            let config = load_config_file(&path)?;
            return Ok((config, Some(path)));
        }
    }
    Ok((Config::default(), None))
}

/// Convenience wrapper: loads config relative to the current working
/// directory and the platform config directory.
pub fn load_config() -> Result<(Config, Option<PathBuf>), ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    let project_dirs = ProjectDirs::from("", "", "xpt");
    load_config_from(&cwd, project_dirs.as_ref().map(|d| d.config_dir()))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let base_url = &config.api.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError {
            field: "api.base_url".into(),
            message: format!("must start with http:// or https://, got `{base_url}`"),
        });
    }

    if config.api.request_timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError {
            field: "api.request_timeout_secs".into(),
            message: "must be > 0 when set".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
