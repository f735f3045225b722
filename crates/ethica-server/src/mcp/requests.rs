// crates/ethica-server/src/mcp/requests.rs
// MCP tool request types
//
// These types describe the tool's input schema for clients. The engine does
// not deserialize into them; it validates the raw arguments itself.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhaseParam {
    Deontological,
    Consequentialist,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtParams {
    #[schemars(description = "Your current ethical reasoning step")]
    pub thought: String,
    #[schemars(description = "Current thought number")]
    #[schemars(range(min = 1))]
    pub thought_number: u64,
    #[schemars(description = "Estimated total thoughts needed")]
    #[schemars(range(min = 1))]
    pub total_thoughts: u64,
    #[schemars(description = "Framework for this step: deontological (duties, rules, rights) or consequentialist (outcomes)")]
    pub ethical_phase: PhaseParam,
    #[schemars(description = "Whether another thought step is needed")]
    pub next_thought_needed: bool,
    #[schemars(description = "Whether this revises previous thinking")]
    pub is_revision: Option<bool>,
    #[schemars(description = "Which thought is being reconsidered")]
    #[schemars(range(min = 1))]
    pub revises_thought: Option<u64>,
    #[schemars(description = "Branching point thought number")]
    #[schemars(range(min = 1))]
    pub branch_from_thought: Option<u64>,
    #[schemars(description = "Branch identifier")]
    pub branch_id: Option<String>,
    #[schemars(description = "If more thoughts are needed")]
    pub needs_more_thoughts: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn schema() -> Value {
        serde_json::to_value(schemars::schema_for!(ThoughtParams)).unwrap()
    }

    #[test]
    fn test_schema_lists_every_field() {
        let schema = schema();
        let props = schema["properties"].as_object().unwrap();
        for field in [
            "thought",
            "thoughtNumber",
            "totalThoughts",
            "ethicalPhase",
            "nextThoughtNeeded",
            "isRevision",
            "revisesThought",
            "branchFromThought",
            "branchId",
            "needsMoreThoughts",
        ] {
            assert!(props.contains_key(field), "schema missing {}", field);
        }
    }

    #[test]
    fn test_schema_required_fields() {
        let schema = schema();
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        required.sort();
        assert_eq!(
            required,
            vec![
                "ethicalPhase",
                "nextThoughtNeeded",
                "thought",
                "thoughtNumber",
                "totalThoughts"
            ]
        );
    }

    #[test]
    fn test_schema_phase_enum() {
        let text = schema().to_string();
        assert!(text.contains("deontological"));
        assert!(text.contains("consequentialist"));
    }

    #[test]
    fn test_params_deserialize_camel_case() {
        let params: ThoughtParams = serde_json::from_value(json!({
            "thought": "t",
            "thoughtNumber": 1,
            "totalThoughts": 1,
            "ethicalPhase": "consequentialist",
            "nextThoughtNeeded": false,
            "branchId": "b"
        }))
        .unwrap();
        assert!(matches!(params.ethical_phase, PhaseParam::Consequentialist));
        assert_eq!(params.branch_id.as_deref(), Some("b"));
    }
}
