// crates/ethica-server/src/thought/format.rs
// Bordered console rendering of an accepted thought (stderr side channel)

use super::{EthicalPhase, ThoughtRecord, display_value};

/// Header line: kind marker, step counter and revision/branch context
pub fn header(record: &ThoughtRecord) -> String {
    let step = format!("{}/{}", record.thought_number, record.total_thoughts);

    if record.is_revision() {
        let context = record
            .revises_thought
            .as_ref()
            .map(|n| format!(" (revising thought {})", display_value(n)))
            .unwrap_or_default();
        return format!("🔄 Revision {}{}", step, context);
    }

    if let (Some(from), Some(id)) = (&record.branch_from_thought, record.branch_key()) {
        return format!(
            "🌿 Branch {} (from thought {}, ID: {})",
            step,
            display_value(from),
            id
        );
    }

    match record.ethical_phase {
        EthicalPhase::Deontological => format!("⚖ Deontological {}", step),
        EthicalPhase::Consequentialist => format!("📈 Consequentialist {}", step),
    }
}

/// Render a record as a box. Width follows the longest line, in chars.
pub fn render_thought(record: &ThoughtRecord) -> String {
    let header = header(record);
    let body: Vec<&str> = record.thought.lines().collect();

    let width = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    let border = "─".repeat(width + 2);

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", border));
    out.push_str(&format!("│ {:<width$} │\n", header, width = width));
    out.push_str(&format!("├{}┤\n", border));
    for line in body {
        out.push_str(&format!("│ {:<width$} │\n", line, width = width));
    }
    out.push_str(&format!("└{}┘", border));
    out
}
