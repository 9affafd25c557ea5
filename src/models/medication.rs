use serde::{Deserialize, Serialize};

use super::enums::MedicationKind;

/// Reference medication that an assessment may suggest. Selected, never authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationSuggestion {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: MedicationKind,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
}
