// crates/ethica-server/src/thought/mod.rs
// Thought tracking engine: records, validation, judgment

pub mod engine;
pub mod format;
pub mod judgment;
pub mod validation;

pub use engine::{SubmissionResult, ThoughtEngine, ThoughtSummary};
pub use judgment::{Judgment, derive_judgment};
pub use validation::{ValidationError, validate};

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// The two framings an ethical analysis alternates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EthicalPhase {
    /// Rightness of the action independent of outcomes
    Deontological,
    /// Likely outcomes of the action
    Consequentialist,
}

impl EthicalPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EthicalPhase::Deontological => "deontological",
            EthicalPhase::Consequentialist => "consequentialist",
        }
    }

    /// Parse the exact literal; no case folding or aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deontological" => Some(EthicalPhase::Deontological),
            "consequentialist" => Some(EthicalPhase::Consequentialist),
            _ => None,
        }
    }
}

impl fmt::Display for EthicalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted reasoning step. Immutable once stored.
///
/// Optional fields hold whatever the caller sent, unchecked. Only the
/// required fields are typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtRecord {
    pub thought: String,
    pub thought_number: u64,
    pub total_thoughts: u64,
    pub ethical_phase: EthicalPhase,
    pub next_thought_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_revision: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revises_thought: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_from_thought: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<Value>,
}

impl ThoughtRecord {
    /// Branch id this record is filed under, if both `branchFromThought` and
    /// `branchId` are present. Values are not checked.
    pub fn branch_key(&self) -> Option<Cow<'_, str>> {
        self.branch_from_thought.as_ref()?;
        self.branch_id.as_ref().map(display_value)
    }

    pub fn is_revision(&self) -> bool {
        matches!(self.is_revision, Some(Value::Bool(true)))
    }
}

/// Strings as-is, anything else as its JSON text
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ThoughtRecord {
        ThoughtRecord {
            thought: "Duty requires honesty".to_string(),
            thought_number: 1,
            total_thoughts: 3,
            ethical_phase: EthicalPhase::Deontological,
            next_thought_needed: true,
            is_revision: None,
            revises_thought: None,
            branch_from_thought: None,
            branch_id: None,
            needs_more_thoughts: None,
        }
    }

    #[test]
    fn test_phase_round_trip_literals() {
        assert_eq!(EthicalPhase::parse("deontological"), Some(EthicalPhase::Deontological));
        assert_eq!(EthicalPhase::parse("consequentialist"), Some(EthicalPhase::Consequentialist));
        assert_eq!(EthicalPhase::Consequentialist.to_string(), "consequentialist");
    }

    #[test]
    fn test_phase_rejects_case_variants() {
        assert_eq!(EthicalPhase::parse("Deontological"), None);
        assert_eq!(EthicalPhase::parse("virtue"), None);
        assert_eq!(EthicalPhase::parse(""), None);
    }

    #[test]
    fn test_branch_key_requires_both_fields() {
        let mut r = record();
        assert_eq!(r.branch_key(), None);

        r.branch_id = Some(json!("alt"));
        assert_eq!(r.branch_key(), None);

        r.branch_from_thought = Some(json!(1));
        assert_eq!(r.branch_key().as_deref(), Some("alt"));

        r.branch_id = None;
        assert_eq!(r.branch_key(), None);
    }

    #[test]
    fn test_branch_key_ignores_value_shapes() {
        let mut r = record();
        r.branch_from_thought = Some(json!("1"));
        r.branch_id = Some(json!(7));
        assert_eq!(r.branch_key().as_deref(), Some("7"));

        r.branch_from_thought = Some(json!(0));
        r.branch_id = Some(json!({ "name": "alt" }));
        assert_eq!(r.branch_key().as_deref(), Some(r#"{"name":"alt"}"#));
    }

    #[test]
    fn test_is_revision_only_for_true() {
        let mut r = record();
        assert!(!r.is_revision());
        r.is_revision = Some(json!("yes"));
        assert!(!r.is_revision());
        r.is_revision = Some(json!(true));
        assert!(r.is_revision());
    }

    #[test]
    fn test_record_keeps_malformed_optionals() {
        let mut r = record();
        r.revises_thought = Some(json!("one"));
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["revisesThought"], "one");
    }

    #[test]
    fn test_record_serializes_camel_case_and_skips_absent() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["thoughtNumber"], 1);
        assert_eq!(json["ethicalPhase"], "deontological");
        assert!(json.get("branchId").is_none());
        assert!(json.get("isRevision").is_none());
    }
}
