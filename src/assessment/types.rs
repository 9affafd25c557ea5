use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EmergencyProtocol, MedicationSuggestion, SeverityLevel};

/// Outcome of one evaluation. Emergency detection always wins over the
/// detailed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EvaluationResult {
    Emergency(EmergencyNotice),
    Assessment(Assessment),
}

impl EvaluationResult {
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::Emergency(_))
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match self {
            Self::Assessment(a) => Some(a),
            Self::Emergency(_) => None,
        }
    }

    pub fn emergency(&self) -> Option<&EmergencyNotice> {
        match self {
            Self::Emergency(e) => Some(e),
            Self::Assessment(_) => None,
        }
    }
}

/// A completed, non-emergency assessment. Never mutated after creation;
/// re-evaluating produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub symptoms: Vec<String>,
    pub severity: SeverityLevel,
    /// Home remedies, first-occurrence order, no duplicates.
    pub recommendations: Vec<String>,
    /// Escalation criteria, first-occurrence order, no duplicates.
    pub precautions: Vec<String>,
    pub medications: Vec<MedicationSuggestion>,
    pub follow_up_required: bool,
}

/// Why the emergency path was taken. Both can hold at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyTrigger {
    pub severe_rating: bool,
    /// Selected symptoms that are emergency-grade on their own.
    pub emergency_symptoms: Vec<String>,
}

/// A number shown on the emergency screen, with its deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub label: String,
    pub number: String,
    pub link: String,
}

/// Emergency-path payload: what the user must do now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyNotice {
    pub trigger: EmergencyTrigger,
    pub warning: String,
    pub immediate_actions: Vec<String>,
    pub contacts: Vec<EmergencyContact>,
    pub protocols: Vec<EmergencyProtocol>,
}
