use std::env;

/// Default backend address; matches the Flask server's local bind.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend address.
pub const API_URL_ENV: &str = "WASTELESS_API_URL";

/// Resolved location of the assistant backend.
///
/// The base address is configuration, not protocol: it comes from a CLI flag
/// or the environment, never from a hardcoded call site.
#[derive(Debug, Clone)]
pub struct ChatEndpoint {
    base_url: String,
}

impl ChatEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the backend address from `WASTELESS_API_URL`, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        Self::new(env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn greeting_url(&self) -> String {
        format!("{}/api/chat/greeting", self.base_url)
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }
}

impl Default for ChatEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
