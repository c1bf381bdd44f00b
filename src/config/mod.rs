//! Configuration loading and management
//!
//! Settings come from an optional YAML file, then environment overrides:
//!
//! - `CART_API_CONFIG`: path of the YAML file
//! - `CART_API_BIND`: bind address (e.g. `127.0.0.1:5000`)
//! - `CART_API_LOG`: tracing filter (e.g. `cart_api=debug,tower_http=info`)

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV: &str = "CART_API_CONFIG";
pub const BIND_ADDRESS_ENV: &str = "CART_API_BIND";
pub const LOG_FILTER_ENV: &str = "CART_API_LOG";

/// Cross-origin settings for the storefront frontend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,

    /// Default tracing filter when `RUST_LOG` is not set
    pub log_filter: String,

    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            log_filter: "info".to_string(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })
    }

    /// Load from the process environment
    ///
    /// Reads the file named by `CART_API_CONFIG` when set, otherwise starts
    /// from defaults, then applies the remaining environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(lookup))
    }

    /// Apply bind address and log filter overrides
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind) = lookup(BIND_ADDRESS_ENV).filter(|v| !v.is_empty()) {
            self.bind_address = bind;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}
