//! Error types for the todo server
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Todo Error Enum ==
/// Unified error type for the todo server.
///
/// `NotFound` and `InvalidParameter` are client errors and never change stored
/// state. The remaining variants are server faults.
#[derive(Error, Debug)]
pub enum TodoError {
    /// No record with the given id
    #[error("Todo not found: {0}")]
    NotFound(String),

    /// Bad pagination parameters or a refused status transition
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Backing file exists but does not hold a valid record array
    #[error("Corrupt store {}: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// Backing file could not be read or written
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TodoError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TodoError::CorruptStore {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TodoError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            TodoError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            TodoError::CorruptStore { .. } | TodoError::Io { .. } | TodoError::Internal(_) => {
                error!(error = %self, "request failed with server fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal storage error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the todo server.
pub type Result<T> = std::result::Result<T, TodoError>;
