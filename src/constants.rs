// Fixed page contract - element ids the console markup must provide
pub const OUTPUT_CONSOLE_ID: &str = "output-console";
pub const ACTIVITY_FEED_ID: &str = "activity-feed";
pub const RUN_WORKFLOW_BUTTON_ID: &str = "run-workflow";
pub const SEND_RAG_BUTTON_ID: &str = "send-rag";
pub const IMAGE_PATH_INPUT_ID: &str = "image-path";
pub const RAG_QUERY_INPUT_ID: &str = "rag-query";
pub const RAG_RESPONSE_ID: &str = "rag-response";

// Backend routes, appended to the configured base URL
pub const RUN_WORKFLOW_PATH: &str = "/api/run_workflow";
pub const RAG_QUERY_PATH: &str = "/api/rag_query";

// Trigger labels
pub const RUN_WORKFLOW_LABEL: &str = "Start Full Workflow";
pub const RUN_WORKFLOW_PENDING_LABEL: &str = "Orchestrating...";

// User-facing strings
pub const MISSING_IMAGE_PATH_ALERT: &str = "Please provide an image path.";
pub const ORCHESTRATION_COMPLETE: &str = "Orchestration complete.";
pub const RAG_SEARCHING_PLACEHOLDER: &str = "Searching records...";
pub const RAG_ERROR_TEXT: &str = "Error processing query.";
pub const ACTIVITY_TIME_LABEL: &str = "Just now";

// Status value the workflow endpoint reports on success
pub const STATUS_SUCCESS: &str = "success";

// Local time format used as the log line prefix (e.g. "3:04:05 PM")
pub const LOG_TIME_FORMAT: &str = "%-I:%M:%S %p";
