//! Polling observer for document title changes.
//!
//! Embedders with a mutation-subscribe primitive can call
//! `ClientController::on_title_mutation` directly; embedders without one
//! poll the title through this watcher instead and forward changes.

/// Remembers the last observed title and yields only changes.
#[derive(Debug, Default)]
pub struct TitleWatcher {
    last: Option<String>,
}

impl TitleWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(current)` when the title differs from the last
    /// observation. The first observation counts as a change.
    pub fn check(&mut self, current: &str) -> Option<String> {
        if self.last.as_deref() == Some(current) {
            return None;
        }
        self.last = Some(current.to_string());
        Some(current.to_string())
    }
}
