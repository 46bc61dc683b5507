//! Query Module
//!
//! Pure transformation from (snapshot, parameters) to a page of todos.

mod engine;


pub use engine::{Page, TodoQuery};
