/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin configuration: an empty base URL, so requests go to
    /// relative paths such as `/api/run_workflow` on the serving host.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the build-time API_BASE_URL variable
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an absolute route such as `/api/rag_query`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RAG_QUERY_PATH, RUN_WORKFLOW_PATH};

    #[test]
    fn default_is_same_origin() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.url(RUN_WORKFLOW_PATH), "/api/run_workflow");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let cfg = ApiConfig::from_url("http://localhost:5000/");
        assert_eq!(cfg.base_url(), "http://localhost:5000");
        assert_eq!(cfg.url(RAG_QUERY_PATH), "http://localhost:5000/api/rag_query");
    }
}
