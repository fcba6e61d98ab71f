//! In-memory stand-ins for the page and the backend, used by the native
//! controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::constants::RUN_WORKFLOW_LABEL;
use crate::error::ConsoleError;
use crate::models::{
    ActivityEntry, LogEntry, LogKind, RagRequest, RagResponse, WorkflowRequest, WorkflowResponse,
};
use crate::network::ConsoleBackend;
use crate::view::ConsoleView;

pub struct FakeView {
    image_path: RefCell<String>,
    rag_query: RefCell<String>,
    alerts: RefCell<Vec<String>>,
    logs: RefCell<Vec<LogEntry>>,
    // index 0 is the top of the feed
    activity: RefCell<Vec<ActivityEntry>>,
    trigger: RefCell<(bool, String)>,
    trigger_history: RefCell<Vec<(bool, String)>>,
    rag_responses: RefCell<Vec<String>>,
}

impl Default for FakeView {
    fn default() -> Self {
        Self {
            image_path: RefCell::default(),
            rag_query: RefCell::default(),
            alerts: RefCell::default(),
            logs: RefCell::default(),
            activity: RefCell::default(),
            trigger: RefCell::new((true, RUN_WORKFLOW_LABEL.to_string())),
            trigger_history: RefCell::default(),
            rag_responses: RefCell::default(),
        }
    }
}

impl FakeView {
    pub fn set_image_path(&self, value: &str) {
        *self.image_path.borrow_mut() = value.to_string();
    }

    pub fn set_rag_query(&self, value: &str) {
        *self.rag_query.borrow_mut() = value.to_string();
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn log_messages(&self) -> Vec<(LogKind, String)> {
        self.logs
            .borrow()
            .iter()
            .map(|entry| (entry.kind, entry.message.clone()))
            .collect()
    }

    pub fn activity_texts(&self) -> Vec<String> {
        self.activity.borrow().iter().map(|a| a.text.clone()).collect()
    }

    pub fn trigger(&self) -> (bool, String) {
        self.trigger.borrow().clone()
    }

    pub fn trigger_history(&self) -> Vec<(bool, String)> {
        self.trigger_history.borrow().clone()
    }

    /// Current text of the response area.
    pub fn rag_response(&self) -> String {
        self.rag_responses.borrow().last().cloned().unwrap_or_default()
    }

    /// Every text the response area was set to, oldest first.
    pub fn rag_response_history(&self) -> Vec<String> {
        self.rag_responses.borrow().clone()
    }
}

impl ConsoleView for FakeView {
    fn image_path(&self) -> String {
        self.image_path.borrow().clone()
    }

    fn rag_query(&self) -> String {
        self.rag_query.borrow().clone()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn append_log(&self, entry: &LogEntry) {
        self.logs.borrow_mut().push(entry.clone());
    }

    fn prepend_activity(&self, entry: &ActivityEntry) {
        self.activity.borrow_mut().insert(0, entry.clone());
    }

    fn set_workflow_trigger(&self, enabled: bool, label: &str) {
        let state = (enabled, label.to_string());
        self.trigger_history.borrow_mut().push(state.clone());
        *self.trigger.borrow_mut() = state;
    }

    fn set_rag_response(&self, text: &str) {
        self.rag_responses.borrow_mut().push(text.to_string());
    }
}

/// Scripted outcome of one backend call.
pub enum Reply<T> {
    Ready(Result<T, ConsoleError>),
    /// Resolves when the test sends on the paired channel.
    Deferred(oneshot::Receiver<Result<T, ConsoleError>>),
    /// Never resolves.
    Never,
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ConsoleError> {
        match self {
            Reply::Ready(result) => result,
            Reply::Deferred(rx) => rx.await.expect("reply sender dropped"),
            Reply::Never => futures::future::pending().await,
        }
    }
}

#[derive(Default)]
pub struct FakeBackend {
    workflow_replies: RefCell<VecDeque<Reply<WorkflowResponse>>>,
    rag_replies: RefCell<VecDeque<Reply<RagResponse>>>,
    workflow_requests: RefCell<Vec<WorkflowRequest>>,
    rag_requests: RefCell<Vec<RagRequest>>,
}

impl FakeBackend {
    pub fn push_workflow(&self, reply: Reply<WorkflowResponse>) {
        self.workflow_replies.borrow_mut().push_back(reply);
    }

    pub fn push_rag(&self, reply: Reply<RagResponse>) {
        self.rag_replies.borrow_mut().push_back(reply);
    }

    pub fn workflow_requests(&self) -> Vec<WorkflowRequest> {
        self.workflow_requests.borrow().clone()
    }

    pub fn rag_requests(&self) -> Vec<RagRequest> {
        self.rag_requests.borrow().clone()
    }
}

impl ConsoleBackend for FakeBackend {
    async fn run_workflow(&self, request: &WorkflowRequest) -> Result<WorkflowResponse, ConsoleError> {
        self.workflow_requests.borrow_mut().push(request.clone());
        let reply = self
            .workflow_replies
            .borrow_mut()
            .pop_front()
            .expect("unscripted workflow request");
        reply.resolve().await
    }

    async fn rag_query(&self, request: &RagRequest) -> Result<RagResponse, ConsoleError> {
        self.rag_requests.borrow_mut().push(request.clone());
        let reply = self
            .rag_replies
            .borrow_mut()
            .pop_front()
            .expect("unscripted rag request");
        reply.resolve().await
    }
}
