//! Failure kinds surfaced by the console actions.
//!
//! `Display` yields the exact text written to the log console, so callers
//! can log `err.to_string()` without further formatting.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The backend answered but reported a non-success status.
    #[error("Error: {message}")]
    Logical { message: String },

    /// The request never produced a decodable reply (network down,
    /// body not JSON, ...).
    #[error("Network Error: {message}")]
    Transport { message: String },
}

impl ConsoleError {
    pub fn logical(message: impl Into<String>) -> Self {
        Self::Logical { message: message.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<JsValue> for ConsoleError {
    fn from(value: JsValue) -> Self {
        Self::transport(js_error_message(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for ConsoleError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(err.to_string())
    }
}

/// Best-effort human message for a rejected JS promise: `Error.message`
/// when the value is an `Error`, the string itself when it is one.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
