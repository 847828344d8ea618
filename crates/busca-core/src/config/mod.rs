//! Client configuration for reaching the search endpoint.
//!
//! Values come from the process environment (optionally seeded from `.env`
//! by the binaries). Lookup is injectable so parsing can be tested without
//! touching the real environment.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

use crate::util::{is_http_url, normalize_text_option};

/// Environment variable holding the API base URL.
pub const API_BASE_URL_VAR: &str = "BUSCA_API_BASE_URL";

/// Base URL used when none is configured (the development server address).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority of the search server, without trailing slash
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = normalize_text_option(lookup(API_BASE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url)?,
        })
    }
}

/// Validate an API base URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(ConfigError::Invalid(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(ConfigError::Invalid(format!(
            "{API_BASE_URL_VAR} must start with http:// or https://"
        )));
    }
    Ok(base)
}
