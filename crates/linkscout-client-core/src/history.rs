use serde::{Deserialize, Serialize};

use crate::view::LinksView;

/// Snapshot of the page's display state associated with one entry in the
/// browser's navigation stack. Captured when a fetch completes, stored in
/// the history entry's state slot as JSON, and read back verbatim when the
/// user traverses back or forward. Immutable once pushed: later DOM updates
/// never rewrite an entry already on the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub message: String,
    pub results: String,
    pub title: String,
}

impl NavigationState {
    /// Snapshots the current message/results markup and heading title.
    pub fn capture(view: &dyn LinksView) -> Self {
        Self {
            message: view.message_markup(),
            results: view.results_markup(),
            title: view.heading_text(),
        }
    }

    /// Overwrites the display regions and the document title with this
    /// snapshot. Replaying the same snapshot is idempotent.
    pub fn restore(&self, view: &dyn LinksView) {
        view.set_message(&self.message);
        view.set_results(&self.results);
        view.set_heading(&self.title);
        view.set_document_title(&self.title);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
