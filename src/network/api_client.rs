use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::ConsoleBackend;
use crate::constants::{RAG_QUERY_PATH, RUN_WORKFLOW_PATH};
use crate::error::ConsoleError;
use crate::models::{RagRequest, RagResponse, WorkflowRequest, WorkflowResponse};

// REST client for the orchestration backend
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    // Resolved per request so a late init_api_config_js() still applies
    fn url(path: &str) -> String {
        super::current_api_config().url(path)
    }

    /// POST `body` as JSON and decode the JSON reply.
    ///
    /// The backend answers rejected requests with 4xx/5xx *and* a JSON body
    /// describing the failure, so the body is decoded whatever the HTTP
    /// status. Only an unreachable server or a non-JSON body is an error.
    pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ConsoleError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = Self::url(path);
        let payload = serde_json::to_string(body)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/json")?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&payload));

        let request = Request::new_with_str_and_init(&url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ConsoleError::transport("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            crate::debug_log!("{} answered {} {}", url, resp.status(), resp.status_text());
        }

        Self::decode_reply(&resp).await
    }

    /// Decode a reply body as JSON, whatever its HTTP status. Fails only
    /// when the body is not JSON or does not fit `T`.
    pub async fn decode_reply<T: DeserializeOwned>(resp: &Response) -> Result<T, ConsoleError> {
        let json = JsFuture::from(resp.json()?).await?;
        Ok(serde_wasm_bindgen::from_value(json)?)
    }
}

impl ConsoleBackend for ApiClient {
    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<WorkflowResponse, ConsoleError> {
        Self::post_json(RUN_WORKFLOW_PATH, request).await
    }

    async fn rag_query(&self, request: &RagRequest) -> Result<RagResponse, ConsoleError> {
        Self::post_json(RAG_QUERY_PATH, request).await
    }
}
