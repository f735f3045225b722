// crates/ethica-server/src/thought/validation.rs
// Checked construction of a ThoughtRecord from untyped tool arguments

use super::{EthicalPhase, ThoughtRecord};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Why a submission was rejected. Messages are stable; callers assert on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: expected an object")]
    NotAnObject,

    #[error("Invalid thought: must be a string")]
    Thought,

    #[error("Invalid thoughtNumber: must be a number")]
    ThoughtNumber,

    #[error("Invalid thoughtNumber: must be a positive integer")]
    ThoughtNumberRange,

    #[error("Invalid totalThoughts: must be a number")]
    TotalThoughts,

    #[error("Invalid totalThoughts: must be a positive integer")]
    TotalThoughtsRange,

    #[error("Invalid nextThoughtNeeded: must be a boolean")]
    NextThoughtNeeded,

    #[error("Invalid ethicalPhase: must be 'deontological' or 'consequentialist'")]
    EthicalPhase,
}

impl ValidationError {
    /// Name of the offending input field, if the failure is field-specific
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::Thought => Some("thought"),
            ValidationError::ThoughtNumber | ValidationError::ThoughtNumberRange => {
                Some("thoughtNumber")
            }
            ValidationError::TotalThoughts | ValidationError::TotalThoughtsRange => {
                Some("totalThoughts")
            }
            ValidationError::NextThoughtNeeded => Some("nextThoughtNeeded"),
            ValidationError::EthicalPhase => Some("ethicalPhase"),
        }
    }
}

/// Validate raw input into a record. First failing check wins.
///
/// Required fields are checked in a fixed order: `thought`, `thoughtNumber`,
/// `totalThoughts`, `nextThoughtNeeded`, `ethicalPhase`. Optional fields are
/// passed through unchecked if present and omitted if absent or null. No type
/// coercion, no range checks.
///
/// The returned record already carries the self-corrected `totalThoughts`.
pub fn validate(input: &Value) -> Result<ThoughtRecord, ValidationError> {
    let obj = input.as_object().ok_or(ValidationError::NotAnObject)?;

    let thought = match obj.get("thought") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(ValidationError::Thought),
    };

    let thought_number = required_count(
        obj,
        "thoughtNumber",
        ValidationError::ThoughtNumber,
        ValidationError::ThoughtNumberRange,
    )?;
    let total_thoughts = required_count(
        obj,
        "totalThoughts",
        ValidationError::TotalThoughts,
        ValidationError::TotalThoughtsRange,
    )?;

    let next_thought_needed = obj
        .get("nextThoughtNeeded")
        .and_then(Value::as_bool)
        .ok_or(ValidationError::NextThoughtNeeded)?;

    let ethical_phase = obj
        .get("ethicalPhase")
        .and_then(Value::as_str)
        .and_then(EthicalPhase::parse)
        .ok_or(ValidationError::EthicalPhase)?;

    Ok(ThoughtRecord {
        thought,
        thought_number,
        total_thoughts: total_thoughts.max(thought_number),
        ethical_phase,
        next_thought_needed,
        is_revision: optional(obj, "isRevision"),
        revises_thought: optional(obj, "revisesThought"),
        branch_from_thought: optional(obj, "branchFromThought"),
        branch_id: optional(obj, "branchId"),
        needs_more_thoughts: optional(obj, "needsMoreThoughts"),
    })
}

fn required_count(
    obj: &Map<String, Value>,
    key: &str,
    missing: ValidationError,
    out_of_range: ValidationError,
) -> Result<u64, ValidationError> {
    match obj.get(key) {
        Some(Value::Number(n)) => positive_integer(n).ok_or(out_of_range),
        _ => Err(missing),
    }
}

/// Accepts `3` and `3.0`, rejects zero, negatives and fractions
fn positive_integer(n: &Number) -> Option<u64> {
    if let Some(v) = n.as_u64() {
        return (v > 0).then_some(v);
    }
    let f = n.as_f64()?;
    if f.is_finite() && f >= 1.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn optional(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}
