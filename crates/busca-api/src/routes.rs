use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use busca_core::search::SEARCH_ENDPOINT;
use busca_core::SearchResult;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::directory::StudentDirectory;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    directory: Arc<StudentDirectory>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, directory: StudentDirectory) -> Self {
        Self {
            config,
            directory: Arc::new(directory),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(SEARCH_ENDPOINT, get(search_students))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    students: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        students: state.directory.count(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResult>, AppError> {
    let query = params.q.unwrap_or_default();
    let query_chars = query.trim().chars().count();
    if query_chars > state.config.max_query_chars {
        return Err(AppError::bad_request(format!(
            "query must be at most {} characters",
            state.config.max_query_chars
        )));
    }

    let students = state.directory.search(&query);
    tracing::info!(
        endpoint = "buscar_alunos",
        query_chars,
        matches = students.len(),
        "Answered student search"
    );
    Ok(Json(students))
}
