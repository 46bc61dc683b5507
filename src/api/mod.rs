//! API Module
//!
//! HTTP handlers and routing for the todo server REST API.
//!
//! # Endpoints
//! - `GET /api/todos` - Paginated list with `type` and `fastSearch` filters
//! - `PUT /api/todos/:id` - Update a todo's status
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
