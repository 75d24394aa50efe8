use crate::llm::Provider;
use serde_json::Value;
use std::fmt;

/// Failure talking to a language-model provider, with enough of the raw
/// exchange kept around to diagnose it.
#[derive(Debug, Clone)]
pub struct LlmDiagnosticsError {
    pub provider: Provider,
    pub stage: &'static str,
    pub detail: String,
    pub raw_output: Option<String>,
    pub raw_response_json: Option<Value>,
}

impl LlmDiagnosticsError {
    /// Rate limits and upstream 5xx responses are worth retrying by the caller.
    pub fn is_transient(&self) -> bool {
        self.stage == "http"
            && (self.detail.contains("429") || self.detail.starts_with("status=5"))
    }
}

impl fmt::Display for LlmDiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LLM error (provider={}, stage={}): {}",
            self.provider, self.stage, self.detail
        )
    }
}

impl std::error::Error for LlmDiagnosticsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(detail: &str) -> LlmDiagnosticsError {
        LlmDiagnosticsError {
            provider: Provider::OpenAI,
            stage: "http",
            detail: detail.to_string(),
            raw_output: None,
            raw_response_json: None,
        }
    }

    #[test]
    fn classifies_transient_statuses() {
        assert!(http_error("status=429 Too Many Requests").is_transient());
        assert!(http_error("status=503 Service Unavailable").is_transient());
        assert!(!http_error("status=401 Unauthorized").is_transient());
    }

    #[test]
    fn display_names_provider_and_stage() {
        let err = http_error("status=500 Internal Server Error");
        assert_eq!(
            err.to_string(),
            "LLM error (provider=openai, stage=http): status=500 Internal Server Error"
        );
    }
}
