//! The two console actions and their request lifecycle.
//!
//! `ConsoleController` owns the page surface and the backend it was built
//! with; the event bindings in `ui::events` hold it behind an `Rc` and spawn
//! one future per click. All state lives on the single browser event loop,
//! hence `Cell` rather than any lock.

use std::cell::Cell;

use crate::constants::{
    MISSING_IMAGE_PATH_ALERT, ORCHESTRATION_COMPLETE, RAG_ERROR_TEXT, RAG_SEARCHING_PLACEHOLDER,
    RUN_WORKFLOW_LABEL, RUN_WORKFLOW_PENDING_LABEL,
};
use crate::error::ConsoleError;
use crate::models::{ActivityEntry, LogEntry, RagRequest, WorkflowRequest, WorkflowResponse};
use crate::network::ConsoleBackend;
use crate::view::ConsoleView;

/// Lifecycle of a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
}

pub struct ConsoleController<V, B> {
    view: V,
    backend: B,
    workflow_state: Cell<ActionState>,
    rag_in_flight: Cell<usize>,
}

impl<V: ConsoleView, B: ConsoleBackend> ConsoleController<V, B> {
    pub fn new(view: V, backend: B) -> Self {
        Self {
            view,
            backend,
            workflow_state: Cell::new(ActionState::Idle),
            rag_in_flight: Cell::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn workflow_state(&self) -> ActionState {
        self.workflow_state.get()
    }

    /// Pending while at least one RAG request is unresolved.
    pub fn rag_state(&self) -> ActionState {
        if self.rag_in_flight.get() > 0 {
            ActionState::Pending
        } else {
            ActionState::Idle
        }
    }

    pub fn rag_in_flight(&self) -> usize {
        self.rag_in_flight.get()
    }

    /// Submit the image path to the orchestration workflow and render the
    /// outcome into the log console and activity feed.
    ///
    /// At most one workflow request is in flight: the trigger is disabled
    /// while pending and a call made in that window does nothing.
    pub async fn run_workflow(&self) {
        if self.workflow_state.get() == ActionState::Pending {
            crate::debug_log!("workflow already running, ignoring trigger");
            return;
        }

        let image_path = self.view.image_path();
        if image_path.is_empty() {
            self.view.alert(MISSING_IMAGE_PATH_ALERT);
            return;
        }

        self.view.append_log(&LogEntry::system(format!(
            "Starting coordinated workflow for: {}",
            image_path
        )));
        let _trigger = TriggerGuard::engage(&self.view, &self.workflow_state);

        let request = WorkflowRequest {
            image_path: image_path.clone(),
        };
        let outcome = self
            .backend
            .run_workflow(&request)
            .await
            .and_then(workflow_output);

        match outcome {
            Ok(output) => {
                self.view.append_log(&LogEntry::system(ORCHESTRATION_COMPLETE));
                self.view.append_log(&LogEntry::agent(output));
                self.view
                    .prepend_activity(&ActivityEntry::workflow_complete(&image_path));
            }
            Err(err) => {
                crate::debug_log!("workflow for {} failed: {}", image_path, err);
                self.view.append_log(&LogEntry::error(err.to_string()));
            }
        }
    }

    /// Send the query to the retrieval backend and show its answer.
    ///
    /// Unlike the workflow action there is no in-flight guard: overlapping
    /// queries are all sent and each answer overwrites the response area as
    /// it arrives. Transport failures are shown but not logged.
    pub async fn send_rag_query(&self) {
        let query = self.view.rag_query();
        if query.is_empty() {
            return;
        }

        self.view.set_rag_response(RAG_SEARCHING_PLACEHOLDER);
        let _flight = InFlight::start(&self.rag_in_flight);

        let request = RagRequest {
            query: query.clone(),
        };
        match self.backend.rag_query(&request).await {
            Ok(reply) => {
                self.view.set_rag_response(reply.display_text());
                self.view
                    .append_log(&LogEntry::system(format!("RAG Query: {}", query)));
            }
            Err(err) => {
                crate::warn_log!("rag query failed: {}", err);
                self.view.set_rag_response(RAG_ERROR_TEXT);
            }
        }
    }
}

/// Split a workflow reply into its output or a logical failure.
fn workflow_output(reply: WorkflowResponse) -> Result<String, ConsoleError> {
    if reply.is_success() {
        Ok(reply.output.unwrap_or_default())
    } else {
        Err(ConsoleError::logical(reply.message.unwrap_or_default()))
    }
}

/// Holds the workflow trigger disabled for its lifetime. Dropping it
/// re-enables the trigger with its original label on every exit path,
/// including a dropped future or a panic while rendering.
struct TriggerGuard<'a, V: ConsoleView> {
    view: &'a V,
    state: &'a Cell<ActionState>,
}

impl<'a, V: ConsoleView> TriggerGuard<'a, V> {
    fn engage(view: &'a V, state: &'a Cell<ActionState>) -> Self {
        state.set(ActionState::Pending);
        view.set_workflow_trigger(false, RUN_WORKFLOW_PENDING_LABEL);
        Self { view, state }
    }
}

impl<V: ConsoleView> Drop for TriggerGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_workflow_trigger(true, RUN_WORKFLOW_LABEL);
        self.state.set(ActionState::Idle);
    }
}

/// Counts one unresolved request for as long as it lives.
struct InFlight<'a> {
    count: &'a Cell<usize>,
}

impl<'a> InFlight<'a> {
    fn start(count: &'a Cell<usize>) -> Self {
        count.set(count.get() + 1);
        Self { count }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.count.set(self.count.get().saturating_sub(1));
    }
}
