use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use busca_core::util::normalize_text_option;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub students_file: PathBuf,
    pub max_query_chars: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "BUSCA_API_BIND_ADDR", "127.0.0.1:5000");
        let students_file = PathBuf::from(value_or_default(
            &lookup,
            "BUSCA_STUDENTS_FILE",
            "data/alunos.json",
        ));

        let max_query_chars = value_or_default(&lookup, "BUSCA_MAX_QUERY_CHARS", "100")
            .parse::<usize>()
            .map_err(|_| {
                ConfigError::Invalid(
                    "BUSCA_MAX_QUERY_CHARS must be an integer in [1, 1000]".to_string(),
                )
            })?;
        if !(1..=1_000).contains(&max_query_chars) {
            return Err(ConfigError::Invalid(
                "BUSCA_MAX_QUERY_CHARS must be in [1, 1000]".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            students_file,
            max_query_chars,
        })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    normalize_text_option(lookup(name))
}
