//! Request DTOs for the todo API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

use crate::models::TodoStatus;

/// Query string for GET /api/todos
///
/// Pagination values are signed so that `pageSize=-1` reaches validation and
/// yields a 400 instead of a generic deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosParams {
    /// 1-based page index (default: 1)
    pub page_number: Option<i64>,
    /// Items per page (default: configured page size)
    pub page_size: Option<i64>,
    /// Exact, case-sensitive category filter
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Case-insensitive substring search over title and content
    pub fast_search: Option<String>,
}

/// Request body for PUT /api/todos/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoRequest {
    /// Target status
    pub status: TodoStatus,
}
