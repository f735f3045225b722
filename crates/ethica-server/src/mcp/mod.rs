// crates/ethica-server/src/mcp/mod.rs
// MCP Server implementation

mod handler;
pub mod requests;
pub mod responses;

use crate::config::Settings;
use crate::error::EthicaError;
use crate::thought::{SubmissionResult, ThoughtEngine, format};
use requests::ThoughtParams;
use rmcp::{
    ErrorData,
    model::{CallToolResult, JsonObject, Tool},
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// The one tool this server exposes
pub const TOOL_NAME: &str = "ethicalthinking";

pub const TOOL_DESCRIPTION: &str = "A structured tool for ethical analysis that alternates between \
deontological and consequentialist reasoning.

Each call records one thought. Work through the dilemma one framework at a time:
- deontological: duties, rules, rights and intentions, independent of outcomes
- consequentialist: likely outcomes for everyone affected

Thoughts can revise earlier steps (isRevision + revisesThought) or branch into an \
alternative line of reasoning (branchFromThought + branchId). totalThoughts is an \
estimate and may be adjusted at any time.

Once at least one thought of each phase exists, every response carries a judgment \
derived from the latest thought in each phase. State explicitly whether the action is \
\"acceptable\" or \"unacceptable\" under the framework you are applying; the judgment \
is keyword based and does not interpret nuance.

Set nextThoughtNeeded to false only when both frameworks have been considered and \
you are satisfied with the conclusion.";

/// Input schema advertised for the tool
pub fn thought_input_schema() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(ThoughtParams);
    match serde_json::to_value(schema) {
        Ok(Value::Object(obj)) => Arc::new(obj),
        Ok(_) | Err(_) => {
            warn!("Tool input schema did not serialize to an object");
            Arc::new(JsonObject::new())
        }
    }
}

/// Tool metadata consumed by the MCP client
pub fn thought_tool() -> Tool {
    Tool::new(TOOL_NAME, TOOL_DESCRIPTION, thought_input_schema())
}

/// MCP Server state
#[derive(Clone)]
pub struct EthicaServer {
    /// One lock scope per submission: validate, append, judge
    engine: Arc<Mutex<ThoughtEngine>>,
    /// Render accepted thoughts to stderr
    thought_logging: bool,
}

impl EthicaServer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: Arc::new(Mutex::new(ThoughtEngine::new())),
            thought_logging: settings.thought_logging,
        }
    }

    /// Submit raw tool arguments to the engine.
    ///
    /// The box is rendered while the lock is still held so concurrent calls
    /// print in the same order they were appended.
    pub async fn submit(&self, input: &Value) -> SubmissionResult {
        let mut engine = self.engine.lock().await;
        let result = engine.submit(input);

        if self.thought_logging && result.is_accepted() {
            if let Some(record) = engine.last() {
                eprintln!("{}", format::render_thought(record));
            }
        }

        result
    }

    /// Dispatch a tool call by name. Validation failures are tool results,
    /// not protocol errors; only an unknown tool name is a protocol error.
    pub async fn handle_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        if name != TOOL_NAME {
            let err = EthicaError::UnknownTool(name.to_string());
            return Err(ErrorData::invalid_params(
                format!("{}. Use {}", err.to_user_string(), TOOL_NAME),
                None,
            ));
        }

        let input = Value::Object(arguments.unwrap_or_default());
        let result = self.submit(&input).await;
        Ok(responses::to_call_result(&result))
    }

    /// Number of accepted thoughts so far
    pub async fn history_len(&self) -> usize {
        self.engine.lock().await.len()
    }

    /// Known branch identifiers
    pub async fn branch_ids(&self) -> Vec<String> {
        self.engine.lock().await.branch_ids()
    }
}
