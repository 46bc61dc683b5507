//! Todo record
//!
//! The single entity served by the API, in the exact JSON shape of the
//! backing file.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};
use crate::models::Timestamp;

// == Status ==
/// Lifecycle state of a todo. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoStatus {
    Active,
    Done,
}

impl TodoStatus {
    /// Validates a move from `self` to `target`.
    ///
    /// Staying in the same state is allowed so repeated completions succeed.
    pub fn transition_to(self, target: TodoStatus) -> Result<TodoStatus> {
        match (self, target) {
            (TodoStatus::Done, TodoStatus::Active) => Err(TodoError::InvalidParameter(
                "a Done todo cannot be reactivated".to_string(),
            )),
            (_, target) => Ok(target),
        }
    }
}

// == Todo ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Category tag such as "Wins" or "Withdraw". `None` or empty means unclassified.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub status: TodoStatus,
    pub creation_time: Timestamp,
    pub due_date: Timestamp,
}

impl Todo {
    /// Applies a requested status, refusing reactivation.
    pub fn set_status(&mut self, target: TodoStatus) -> Result<()> {
        self.status = self.status.transition_to(target)?;
        Ok(())
    }

    /// Category tag, treating an empty string as unclassified.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref().filter(|k| !k.is_empty())
    }
}
