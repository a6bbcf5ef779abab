//! Build-time configuration.
//!
//! The app ships as static WASM, so configuration is baked in at compile time
//! from `YANYU_API_BASE` and `YANYU_LOG_LEVEL`.

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use yanyu_client::{DataSource, DemoSource, HttpSource};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("invalid API base '{0}' (expected an http(s) URL or an absolute path)")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend root. `None` serves the built-in demo records.
    pub api_base: Option<String>,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

impl AppConfig {
    /// Builds a config from raw values. Blank values mean "use the default".
    pub fn from_parts(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = match api_base.map(str::trim).filter(|v| !v.is_empty()) {
            None => None,
            Some(base) if is_valid_api_base(base) => Some(base.to_string()),
            Some(base) => return Err(ConfigError::InvalidApiBase(base.to_string())),
        };

        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            None => default_log_level(),
            Some(level) => {
                log::Level::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?
            }
        };

        Ok(Self { api_base, log_level })
    }

    /// Reads the values captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(option_env!("YANYU_API_BASE"), option_env!("YANYU_LOG_LEVEL"))
    }

    /// The data source this configuration selects.
    pub fn data_source(&self) -> Arc<dyn DataSource> {
        match &self.api_base {
            Some(base) => Arc::new(HttpSource::new(base.clone())),
            None => Arc::new(DemoSource::default()),
        }
    }
}

fn is_valid_api_base(base: &str) -> bool {
    base.starts_with("https://") || base.starts_with("http://") || base.starts_with('/')
}
