use tokio::task::JoinHandle;

use crate::fetch::FetchStateMachine;

/// Text of the search field.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    query: String,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query unconditionally.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// True for any non-empty text, whitespace-only included.
    pub fn can_submit(&self) -> bool {
        !self.query.is_empty()
    }

    /// Hands the query to `fetch` and clears the field straight away.
    ///
    /// Returns `None` without touching anything when the field is empty.
    pub fn submit(&mut self, fetch: &FetchStateMachine) -> Option<JoinHandle<()>> {
        if !self.can_submit() {
            return None;
        }

        let query = std::mem::take(&mut self.query);
        Some(fetch.begin_fetch(query))
    }
}
