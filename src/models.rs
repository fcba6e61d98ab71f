//! Transient data shown on the console page and the JSON payloads
//! exchanged with the orchestration backend.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{LOG_TIME_FORMAT, STATUS_SUCCESS};

/// Visual category of a log console line. Doubles as the CSS modifier
/// class (`output-line system`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    System,
    Agent,
    Error,
}

impl LogKind {
    pub fn css_class(self) -> &'static str {
        match self {
            LogKind::System => "system",
            LogKind::Agent => "agent",
            LogKind::Error => "error",
        }
    }
}

/// One line of the log console. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
            kind,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::new(message, LogKind::System)
    }

    pub fn agent(message: impl Into<String>) -> Self {
        Self::new(message, LogKind::Agent)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, LogKind::Error)
    }

    /// Text rendered into the console: `[3:04:05 PM] message`.
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.timestamp.format(LOG_TIME_FORMAT), self.message)
    }

    /// Full class attribute for the line element.
    pub fn css_class_name(&self) -> String {
        format!("output-line {}", self.kind.css_class())
    }
}

/// Completion notice shown at the top of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub text: String,
}

impl ActivityEntry {
    pub fn workflow_complete(image_path: &str) -> Self {
        Self {
            text: format!("Workflow complete for {}", image_path),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowRequest {
    pub image_path: String,
}

/// Reply from `/api/run_workflow`. Successful replies carry `output`,
/// everything else carries `message`. `status` may be any JSON value; only
/// the string `"success"` counts as success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorkflowResponse {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WorkflowResponse {
    pub fn is_success(&self) -> bool {
        matches!(&self.status, Value::String(s) if s == STATUS_SUCCESS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RagRequest {
    pub query: String,
}

/// Reply from `/api/rag_query`. Only `response` is read; any `status` or
/// `message` the backend adds is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RagResponse {
    #[serde(default)]
    pub response: Option<String>,
}

impl RagResponse {
    /// Text to put in the response area: the `response` field verbatim,
    /// empty when the backend left it out.
    pub fn display_text(&self) -> &str {
        self.response.as_deref().unwrap_or_default()
    }
}
