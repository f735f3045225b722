// crates/ethica-server/src/thought/judgment.rs
// Heuristic verdict from the latest thought in each phase

use super::{EthicalPhase, ThoughtRecord};
use std::fmt;

/// Final verdict derived from the most recent thought of each phase.
///
/// This is keyword matching over free text, not an interpretation of it.
/// The checks run in a fixed order: both latest texts mention "acceptable",
/// then either mentions "unacceptable", then the mixed fallback. An
/// "acceptable" that is only the tail of "unacceptable" does not count for
/// the first check; a text carrying both words still resolves to the first.
///
/// The cost: negated phrasing reads the wrong way. "not unacceptable" paired
/// with "acceptable" is Problematic, where a plain substring match would
/// have called it Acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    Acceptable,
    Problematic,
    Mixed,
}

impl Judgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Judgment::Acceptable => "acceptable under both frameworks.",
            Judgment::Problematic => "ethically problematic under at least one framework.",
            Judgment::Mixed => "mixed results, further clarification may be required.",
        }
    }

    /// Classify a pair of latest thoughts, one per phase
    pub fn classify(deontological: &str, consequentialist: &str) -> Self {
        let deon = deontological.to_lowercase();
        let cons = consequentialist.to_lowercase();

        if affirms_acceptable(&deon) && affirms_acceptable(&cons) {
            Judgment::Acceptable
        } else if deon.contains("unacceptable") || cons.contains("unacceptable") {
            Judgment::Problematic
        } else {
            Judgment::Mixed
        }
    }
}

/// True if `text` (already lowercase) says "acceptable" outside of "unacceptable"
fn affirms_acceptable(text: &str) -> bool {
    text.match_indices("acceptable")
        .any(|(i, _)| !text[..i].ends_with("un"))
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the judgment over a history in submission order.
///
/// Returns `None` until at least one thought of each phase exists. "Most
/// recent" means last submitted, not highest `thought_number`.
pub fn derive_judgment(history: &[ThoughtRecord]) -> Option<Judgment> {
    let latest = |phase: EthicalPhase| {
        history
            .iter()
            .rev()
            .find(|r| r.ethical_phase == phase)
            .map(|r| r.thought.as_str())
    };

    let deon = latest(EthicalPhase::Deontological)?;
    let cons = latest(EthicalPhase::Consequentialist)?;
    Some(Judgment::classify(deon, cons))
}
