//! Query handling for the student search endpoint
//!
//! The widget sends the trimmed input as the single `q` parameter of
//! `GET /buscar_alunos`. Reserved characters are percent-encoded so they reach
//! the server literally.

/// Path of the student search endpoint
pub const SEARCH_ENDPOINT: &str = "/buscar_alunos";

/// Name of the query parameter carrying the search text
pub const QUERY_PARAM: &str = "q";

/// Trim raw input into a query.
///
/// Returns `None` for empty or whitespace-only input, in which case no request
/// should be issued.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Build the request path for a query, e.g. `/buscar_alunos?q=a%26b`.
pub fn search_path(query: &str) -> String {
    format!(
        "{SEARCH_ENDPOINT}?{QUERY_PARAM}={}",
        urlencoding::encode(query)
    )
}
