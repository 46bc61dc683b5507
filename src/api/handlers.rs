//! API Handlers
//!
//! HTTP request handlers for each todo server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::TodoCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    HealthResponse, ListTodosParams, PaginatedResponse, StatsResponse, UpdateTodoRequest,
};
use crate::query::TodoQuery;
use crate::store::{JsonFileStore, TodoStore};

/// Application state shared across all handlers.
///
/// The cache owns its own locking, so handlers only share an `Arc` to it.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot cache over the backing file
    pub cache: Arc<TodoCache>,
    /// Page size used when a request omits `pageSize`
    pub default_page_size: i64,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: TodoCache, default_page_size: i64) -> Self {
        Self {
            cache: Arc::new(cache),
            default_page_size,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Backs the cache with the configured JSON file.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn TodoStore> = Arc::new(JsonFileStore::new(config.data_file.clone()));
        let cache = TodoCache::new(store, config.cache_ttl());
        Self::new(cache, config.default_page_size)
    }
}

/// Handler for GET /api/todos
///
/// Returns one page of todos, optionally filtered by `type` and `fastSearch`.
/// Parameters are validated before the snapshot is touched.
pub async fn list_todos_handler(
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> Result<Json<PaginatedResponse>> {
    let query = TodoQuery {
        kind: params.kind,
        search: params.fast_search,
        page_number: params.page_number.unwrap_or(1),
        page_size: params.page_size.unwrap_or(state.default_page_size),
    };
    query.validate()?;

    let snapshot = state.cache.snapshot().await?;
    let page = query.run(snapshot.todos())?;

    Ok(Json(page.into()))
}

/// Handler for PUT /api/todos/:id
///
/// Applies the requested status and answers 204 once it is on disk.
pub async fn update_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<StatusCode> {
    state.cache.update_status(&id, req.status).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
