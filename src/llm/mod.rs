pub mod chat;

use thiserror::Error;

/// Errors surfaced by a provider call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed before a response arrived
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Provider answered 200 but with no completion choices
    #[error("empty completion response")]
    EmptyResponse,
}

/// Connection settings for one provider client instance.
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}
