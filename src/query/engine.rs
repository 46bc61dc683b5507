//! Query Engine Module
//!
//! Stateless filtering, search and pagination over a snapshot.

use crate::error::{Result, TodoError};
use crate::models::Todo;

// == Todo Query ==
/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoQuery {
    /// Exact, case-sensitive match on `type`. Ignored when empty.
    pub kind: Option<String>,
    /// Case-insensitive substring over `title` or `content`. Ignored when empty.
    pub search: Option<String>,
    /// 1-based page index
    pub page_number: i64,
    /// Items per page
    pub page_size: i64,
}

impl TodoQuery {
    // == Constructor ==
    /// Creates an unfiltered query for the given page window.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            kind: None,
            search: None,
            page_number,
            page_size,
        }
    }

    /// Restricts results to one category.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Restricts results to records mentioning `term`.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    // == Validate ==
    /// Rejects windows that cannot be sliced.
    pub fn validate(&self) -> Result<()> {
        if self.page_size <= 0 {
            return Err(TodoError::InvalidParameter(format!(
                "pageSize must be positive, got {}",
                self.page_size
            )));
        }
        if self.page_number < 1 {
            return Err(TodoError::InvalidParameter(format!(
                "pageNumber must be at least 1, got {}",
                self.page_number
            )));
        }
        Ok(())
    }

    // == Matches ==
    /// Returns true if `todo` passes both the type filter and the search filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        self.matches_kind(todo) && self.matches_search(todo, self.needle().as_deref())
    }

    fn matches_kind(&self, todo: &Todo) -> bool {
        match self.kind.as_deref() {
            Some(kind) if !kind.is_empty() => todo.kind() == Some(kind),
            _ => true,
        }
    }

    fn matches_search(&self, todo: &Todo, needle: Option<&str>) -> bool {
        match needle {
            Some(needle) => {
                todo.title.to_lowercase().contains(needle)
                    || todo.content.to_lowercase().contains(needle)
            }
            None => true,
        }
    }

    /// Lowercased search term, if any.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    // == Run ==
    /// Filters `todos`, preserving order, and cuts out the requested page.
    ///
    /// Pages past the end are empty rather than an error.
    pub fn run(&self, todos: &[Todo]) -> Result<Page> {
        self.validate()?;

        let needle = self.needle();
        let filtered: Vec<&Todo> = todos
            .iter()
            .filter(|todo| self.matches_kind(todo))
            .filter(|todo| self.matches_search(todo, needle.as_deref()))
            .collect();

        // Both values are positive after validation
        let page_size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let page_index = usize::try_from(self.page_number - 1).unwrap_or(usize::MAX);

        let total_pages = filtered.len().div_ceil(page_size);
        let skip = page_index.saturating_mul(page_size);

        let items = filtered
            .into_iter()
            .skip(skip)
            .take(page_size)
            .cloned()
            .collect();

        Ok(Page { items, total_pages })
    }
}

// == Page ==
/// One page of results plus the page count of the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Todo>,
    pub total_pages: usize,
}
