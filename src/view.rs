//! Page surface the controller drives.
//!
//! The production implementation is `ui::DomConsole`, backed by the real
//! page elements. Tests use an in-memory stand-in so the action lifecycle
//! can be checked without a browser.

use crate::models::{ActivityEntry, LogEntry};

pub trait ConsoleView {
    /// Current value of the image path input.
    fn image_path(&self) -> String;

    /// Current value of the RAG query input.
    fn rag_query(&self) -> String;

    /// Blocking modal alert.
    fn alert(&self, message: &str);

    /// Append one line at the bottom of the log console.
    fn append_log(&self, entry: &LogEntry);

    /// Insert one entry at the top of the activity feed.
    fn prepend_activity(&self, entry: &ActivityEntry);

    /// Enable or disable the workflow trigger and set its label.
    fn set_workflow_trigger(&self, enabled: bool, label: &str);

    /// Replace the text of the RAG response area.
    fn set_rag_response(&self, text: &str);
}
