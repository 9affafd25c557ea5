//! Crisis-language check on outgoing chat messages.
//!
//! Fires on the USER message, never on the scripted reply. A firing rule
//! only flags the message; the reply is still drawn from the scripted list.
//! Rules are ordered; first match wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrisisKind {
    Suicide,
    SelfHarm,
    Overdose,
    BreathingDifficulty,
    ChestPain,
}

/// Result of a crisis check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisEscalation {
    /// Which rule fired.
    pub rule_id: &'static str,
    pub kind: CrisisKind,
}

struct CrisisRule {
    id: &'static str,
    kind: CrisisKind,
    regex: Regex,
}

fn rule(id: &'static str, kind: CrisisKind, pattern: &str) -> CrisisRule {
    CrisisRule {
        id,
        kind,
        regex: Regex::new(pattern).expect("Invalid crisis regex pattern"),
    }
}

// ── Rule registry ───────────────────────────────────────────

static CRISIS_RULES: LazyLock<Vec<CrisisRule>> = LazyLock::new(|| {
    vec![
        rule(
            "CRISIS-001",
            CrisisKind::Suicide,
            r"(?i)\b(?:suicid(?:e|al)|kill(?:ing)?\s+myself|end\s+my\s+life|end\s+it\s+all|want\s+to\s+die|better\s+off\s+dead)\b",
        ),
        rule(
            "CRISIS-002",
            CrisisKind::SelfHarm,
            r"(?i)\b(?:self[-\s]?harm(?:ing)?|(?:hurt|harm|cut)(?:ting|ing)?\s+myself)\b",
        ),
        rule(
            "CRISIS-003",
            CrisisKind::Overdose,
            r"(?i)\b(?:overdos(?:e|ed|ing)|took\s+too\s+many\s+(?:pills|tablets))\b",
        ),
        rule(
            "CRISIS-004",
            CrisisKind::BreathingDifficulty,
            r"(?i)\b(?:can[’']?t|cannot|can\s+not|unable\s+to|struggling\s+to)\s+breathe\b",
        ),
        rule(
            "CRISIS-005",
            CrisisKind::ChestPain,
            r"(?i)\bchest\s+(?:pains?|tightness|pressure)\b",
        ),
    ]
});

// ── Matching logic ──────────────────────────────────────────

/// Check a user message for crisis language. `None` when nothing fires.
pub fn check_crisis(text: &str) -> Option<CrisisEscalation> {
    let rule = CRISIS_RULES.iter().find(|r| r.regex.is_match(text))?;

    tracing::warn!(rule_id = rule.id, kind = ?rule.kind, "Crisis language detected in chat");

    Some(CrisisEscalation {
        rule_id: rule.id,
        kind: rule.kind,
    })
}
