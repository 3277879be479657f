//! Completion Client Port - Interface for remote text-generation providers.
//!
//! This port abstracts the chat-style completion endpoint the remote
//! generation strategy calls into. The document core depends on this trait;
//! adapters translate to the concrete provider API.
//!
//! # Design
//!
//! - Single blocking completion per request, no retry loop. A caller wanting
//!   resilience beyond single-attempt-with-fallback adds it as a wrapping
//!   policy.
//! - Bounded output length and explicit temperature on every request.
//! - Error taxonomy covering the failure modes that must trigger the
//!   template fallback (rate limits, quota, network, malformed bodies).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for remote completion providers.
///
/// Implementations connect to external services (OpenAI, etc.) and translate
/// between the provider-specific API and our types.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a single completion.
    ///
    /// Blocks until the provider resolves or fails; there is deliberately no
    /// retry here.
    async fn complete(&self, request: CompletionRequest)
        -> Result<CompletionResponse, CompletionError>;

    /// Get client information (provider name, model).
    fn client_info(&self) -> ClientInfo;
}

/// Request for a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction guiding model behavior.
    pub system_prompt: String,
    /// User instruction carrying the document brief.
    pub user_prompt: String,
    /// Ceiling on generated output length (latency/cost cap).
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl CompletionRequest {
    /// Creates a request with the given prompts and default sampling.
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// Sets the output-length ceiling.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }
}

/// Response from a completion call.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit the max_tokens limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
    /// An error occurred.
    Error,
}

/// Client information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Provider name (e.g., "openai").
    pub name: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
}

impl ClientInfo {
    /// Creates new client info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Completion provider errors.
///
/// Every variant is a fallback trigger for the generation strategy; the
/// distinction exists for logging and operator diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Rate limited or out of quota.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key missing or rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider returned a malformed or empty body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl CompletionError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new("Be formal", "Write chapter one")
            .with_max_tokens(16000)
            .with_temperature(0.7);

        assert_eq!(request.system_prompt, "Be formal");
        assert_eq!(request.user_prompt, "Write chapter one");
        assert_eq!(request.max_tokens, 16000);
        assert_eq!(request.temperature, 0.7);
    }

    #[test]
    fn completion_request_has_bounded_default_output() {
        let request = CompletionRequest::new("s", "u");
        assert!(request.max_tokens > 0);
    }

    #[test]
    fn client_info_holds_provider_and_model() {
        let info = ClientInfo::new("openai", "gpt-4o-mini");
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-4o-mini");
    }

    #[test]
    fn completion_error_constructors_work() {
        let rate_limited = CompletionError::rate_limited(30);
        assert!(matches!(
            rate_limited,
            CompletionError::RateLimited { retry_after_secs: 30 }
        ));

        let unavailable = CompletionError::unavailable("down");
        assert!(matches!(unavailable, CompletionError::Unavailable { .. }));
    }

    #[test]
    fn completion_error_displays_correctly() {
        let err = CompletionError::rate_limited(30);
        assert_eq!(err.to_string(), "rate limited: retry after 30s");

        let err = CompletionError::Timeout { timeout_secs: 120 };
        assert_eq!(err.to_string(), "request timed out after 120s");
    }

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FinishReason::Stop).unwrap();
        assert_eq!(json, "\"stop\"");

        let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
    }

    #[test]
    fn completion_client_is_object_safe() {
        fn check<T: CompletionClient + ?Sized>() {}
        check::<dyn CompletionClient>();
    }
}
