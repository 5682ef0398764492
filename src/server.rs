//! HTTP surface — liveness and synonym routes, permissive CORS.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use thesaurus_core::{LookupError, SynonymEntry, Thesaurus};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub thesaurus: Arc<Thesaurus>,
}

impl AppState {
    pub fn new(thesaurus: Thesaurus) -> Self {
        Self {
            thesaurus: Arc::new(thesaurus),
        }
    }
}

/// Any failure below the handler. Rendered as a bare 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("lookup worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "synonym lookup failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/get_synonyms", get(get_synonyms))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve until the listener fails.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// First `word` in the query string; repeats are ignored and a missing
/// parameter is looked up as the empty string.
fn first_word(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find_map(|(key, value)| (key == "word").then_some(value))
        .unwrap_or_default()
}

async fn home() -> &'static str {
    "thesaurus is working!"
}

async fn get_synonyms(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<SynonymEntry>>, ApiError> {
    let word = first_word(params);
    let thesaurus = Arc::clone(&state.thesaurus);
    let entries = tokio::task::spawn_blocking(move || thesaurus.synonyms(&word)).await??;
    Ok(Json(entries))
}
