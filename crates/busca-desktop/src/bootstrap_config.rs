//! Desktop bootstrap configuration loaded from build-time generated JSON.

use std::collections::HashMap;
use std::env;

use busca_core::config::{ClientConfig, API_BASE_URL_VAR};
use busca_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

/// Build-provisioned client configuration embedded into desktop binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns a default empty config so
/// the app falls back to runtime environment and built-in defaults.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}

/// Resolves the client configuration from the process environment.
///
/// A runtime `BUSCA_API_BASE_URL` wins over the value embedded at build time.
pub fn resolve_client_config(embedded: &DesktopBootstrapConfig) -> ClientConfig {
    let values: HashMap<String, String> = env::vars().collect();
    resolve_client_config_with(embedded, |name| values.get(name).cloned())
}

fn resolve_client_config_with(
    embedded: &DesktopBootstrapConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    let result = ClientConfig::from_lookup(|name| {
        let runtime = normalize_text_option(lookup(name));
        if name == API_BASE_URL_VAR {
            runtime.or_else(|| embedded.api_base_url.clone())
        } else {
            runtime
        }
    });
    result.unwrap_or_else(|error| {
        tracing::warn!("{}; using {}", error, busca_core::config::DEFAULT_API_BASE_URL);
        ClientConfig::default()
    })
}
