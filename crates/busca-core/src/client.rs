//! HTTP access to the student search endpoint.
//!
//! `StudentSource` is the seam the widget talks to; `HttpStudentSource` is the
//! reqwest-backed implementation used by the desktop shell.

use std::future::Future;

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::models::SearchResult;
use crate::util::compact_text;

/// Anything that can answer a search request path with decoded students.
///
/// `request_path` is the path plus query string, e.g. `/buscar_alunos?q=ana`.
pub trait StudentSource {
    fn fetch_students(&self, request_path: &str) -> impl Future<Output = Result<SearchResult>>;
}

/// reqwest client for a search server at a fixed base URL
#[derive(Debug, Clone)]
pub struct HttpStudentSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStudentSource {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())
            .map_err(|error| Error::InvalidInput(error.to_string()))?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Builds a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone())
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request path.
    pub fn request_url(&self, request_path: &str) -> String {
        format!("{}{}", self.base_url, request_path)
    }
}

impl StudentSource for HttpStudentSource {
    async fn fetch_students(&self, request_path: &str) -> Result<SearchResult> {
        let url = self.request_url(request_path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status,
                body: compact_text(&body),
            });
        }

        let body = response.text().await?;
        decode_students(&body)
    }
}

/// Decode a response body into students, preserving order.
pub fn decode_students(body: &str) -> Result<SearchResult> {
    Ok(serde_json::from_str(body)?)
}
