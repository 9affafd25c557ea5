use serde::{Deserialize, Serialize};

/// Reference entry for a symptom the assessment can reason about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomProfile {
    pub id: String,
    /// Display name, matched case-insensitively against user selections.
    pub symptom: String,
    /// Informational only; never feeds the evaluator.
    #[serde(default)]
    pub possible_causes: Vec<String>,
    #[serde(default)]
    pub home_remedies: Vec<String>,
    /// Escalation criteria ("when to seek help").
    #[serde(default)]
    pub when_to_seek_help: Vec<String>,
    /// Emergency-level presentations of this symptom.
    #[serde(default)]
    pub red_flags: Vec<String>,
}
