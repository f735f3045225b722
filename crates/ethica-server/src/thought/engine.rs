// crates/ethica-server/src/thought/engine.rs
// ThoughtEngine - owns the history and branch table

use super::judgment::derive_judgment;
use super::validation::{ValidationError, validate};
use super::{EthicalPhase, ThoughtRecord};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Snapshot returned after an accepted thought
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtSummary {
    pub thought_number: u64,
    pub total_thoughts: u64,
    pub next_thought_needed: bool,
    pub branches: Vec<String>,
    pub ethical_phase: EthicalPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judgment: Option<String>,
    pub thought_history_length: usize,
}

/// Outcome of one submission. Never a panic, never a transport fault.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Accepted(ThoughtSummary),
    Rejected(ValidationError),
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }

    pub fn summary(&self) -> Option<&ThoughtSummary> {
        match self {
            SubmissionResult::Accepted(summary) => Some(summary),
            SubmissionResult::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            SubmissionResult::Accepted(_) => None,
            SubmissionResult::Rejected(err) => Some(err),
        }
    }
}

/// Stateful core of the ethical thinking tool.
///
/// History is append-only in submission order. The branch table files a
/// record under its `branchId` when `branchFromThought` is also present,
/// whatever either value looks like.
/// Nothing is ever removed; state lives as long as the engine.
///
/// `submit` takes `&mut self` and does no I/O, so a host that shares the
/// engine across tasks gets per-call atomicity by holding one lock around it.
#[derive(Debug, Default)]
pub struct ThoughtEngine {
    history: Vec<ThoughtRecord>,
    branches: BTreeMap<String, Vec<ThoughtRecord>>,
}

impl ThoughtEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, store and summarize one thought.
    ///
    /// Validation completes before any mutation, so a rejected submission
    /// leaves history and branches untouched.
    pub fn submit(&mut self, input: &Value) -> SubmissionResult {
        let record = match validate(input) {
            Ok(record) => record,
            Err(err) => {
                debug!(error = %err, "Rejected thought");
                return SubmissionResult::Rejected(err);
            }
        };

        if let Some(branch_id) = record.branch_key() {
            let entry = self.branches.entry(branch_id.to_string()).or_default();
            if entry.is_empty() {
                info!(
                    branch_id = %branch_id,
                    from_thought = ?record.branch_from_thought,
                    "New reasoning branch"
                );
            }
            entry.push(record.clone());
        }

        let thought_number = record.thought_number;
        let total_thoughts = record.total_thoughts;
        let next_thought_needed = record.next_thought_needed;
        let ethical_phase = record.ethical_phase;
        self.history.push(record);

        let judgment = derive_judgment(&self.history).map(|j| j.as_str().to_string());

        debug!(
            thought_number,
            total_thoughts,
            phase = %ethical_phase,
            history_len = self.history.len(),
            judgment = judgment.as_deref().unwrap_or("-"),
            "Accepted thought"
        );

        SubmissionResult::Accepted(ThoughtSummary {
            thought_number,
            total_thoughts,
            next_thought_needed,
            branches: self.branch_ids(),
            ethical_phase,
            judgment,
            thought_history_length: self.history.len(),
        })
    }

    /// All accepted thoughts, oldest first
    pub fn history(&self) -> &[ThoughtRecord] {
        &self.history
    }

    /// Thoughts filed under one branch
    pub fn branch(&self, id: &str) -> Option<&[ThoughtRecord]> {
        self.branches.get(id).map(Vec::as_slice)
    }

    /// Known branch identifiers (sorted)
    pub fn branch_ids(&self) -> Vec<String> {
        self.branches.keys().cloned().collect()
    }

    /// Most recently accepted thought
    pub fn last(&self) -> Option<&ThoughtRecord> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
