// crates/ethica-server/src/mcp/responses.rs
// Tool result payloads

use crate::error::EthicaError;
use crate::thought::SubmissionResult;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::Value;

/// Status marker carried by every rejected submission
pub const FAILED: &str = "failed";

/// Application-level failure payload
#[derive(Debug, Serialize)]
pub struct FailureOutput {
    pub error: String,
    pub status: String,
}

impl FailureOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: FAILED.to_string(),
        }
    }
}

/// JSON payload for a submission result
pub fn to_json(result: &SubmissionResult) -> Value {
    let payload = match result {
        SubmissionResult::Accepted(summary) => serde_json::to_value(summary),
        SubmissionResult::Rejected(err) => {
            let err = EthicaError::InvalidInput(err.clone());
            serde_json::to_value(FailureOutput::new(err.to_user_string()))
        }
    };
    payload.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to serialize tool payload");
        serde_json::json!({ "error": e.to_string(), "status": FAILED })
    })
}

/// Indented JSON text, as sent in the response body
pub fn to_text(result: &SubmissionResult) -> String {
    let value = to_json(result);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Wrap a submission result for the protocol. Rejections set `isError`.
pub fn to_call_result(result: &SubmissionResult) -> CallToolResult {
    let content = vec![Content::text(to_text(result))];
    if result.is_accepted() {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}
