//! Domain record and the DTOs of the todo API
//!
//! `Todo` is both the in-memory record and its on-disk / on-wire JSON shape.

pub mod requests;
pub mod responses;
pub mod timestamp;
pub mod todo;

// Re-export commonly used types
pub use requests::{ListTodosParams, UpdateTodoRequest};
pub use responses::{HealthResponse, PaginatedResponse, StatsResponse};
pub use timestamp::Timestamp;
pub use todo::{Todo, TodoStatus};
