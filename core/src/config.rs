//! Client configuration: defaults, then an optional TOML file, then the
//! environment.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

/// File read when no explicit path is given. Missing is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "opiniones.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin the `/api/...` paths are appended to.
    pub api_base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5173".into(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Load configuration from `path` (or `opiniones.toml` when present) and the
/// process environment.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let raw = match path {
        Some(path) => Some(fs::read_to_string(path).map_err(|source| io_error(path, source))?),
        None => read_if_present(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    resolve_config(raw.as_deref(), |key| std::env::var(key).ok())
}

/// Contents of `path`, or `None` when it does not exist. Any other read
/// failure is an error.
fn read_if_present(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(io_error(path, source)),
    }
}

fn io_error(path: &Path, source: io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Merge file contents and environment lookups over the defaults.
///
/// `API_URL` and `APP__API_URL` set the base URL (the latter wins);
/// `APP__REQUEST_TIMEOUT_SECS` sets the timeout, `0` disabling it.
pub fn resolve_config<F>(file: Option<&str>, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::default();

    if let Some(raw) = file {
        let file_cfg: FileConfig = toml::from_str(raw)?;
        if let Some(url) = file_cfg.api_url {
            config.api_base_url = url;
        }
        if let Some(secs) = file_cfg.request_timeout_secs {
            config.request_timeout_secs = Some(secs);
        }
    }

    if let Some(url) = env("API_URL") {
        config.api_base_url = url;
    }
    if let Some(url) = env("APP__API_URL") {
        config.api_base_url = url;
    }

    if let Some(value) = env("APP__REQUEST_TIMEOUT_SECS") {
        let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            key: "APP__REQUEST_TIMEOUT_SECS",
            value: value.clone(),
        })?;
        config.request_timeout_secs = Some(secs);
    }

    if config.request_timeout_secs == Some(0) {
        config.request_timeout_secs = None;
    }

    Ok(config)
}
