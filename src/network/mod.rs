pub mod api_client;
pub mod config;

pub use api_client::ApiClient;

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

use crate::error::ConsoleError;
use crate::models::{RagRequest, RagResponse, WorkflowRequest, WorkflowResponse};

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Backend the console actions talk to.
///
/// Implementations only report transport problems as errors; a reply the
/// backend marks as failed is still an `Ok` value for the controller to
/// interpret.
#[allow(async_fn_in_trait)]
pub trait ConsoleBackend {
    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<WorkflowResponse, ConsoleError>;

    async fn rag_query(&self, request: &RagRequest) -> Result<RagResponse, ConsoleError>;
}

/// Initialize the API configuration from the build-time `API_BASE_URL`.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    set_api_config(config);
    Ok(())
}

/// Initialize the API configuration from a JS-provided URL.
/// Pages serving the API from another origin call this before the first
/// action is triggered.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    set_api_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

fn set_api_config(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// Current API configuration; same-origin when nothing was configured.
pub(crate) fn current_api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_overrides_default() {
        init_api_config_js("https://console.example.com/").unwrap();
        assert_eq!(current_api_config().base_url(), "https://console.example.com");
    }
}
