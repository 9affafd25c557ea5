use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalHealthStrategy {
    pub condition: String,
    pub immediate_strategies: Vec<String>,
    pub long_term_strategies: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
    /// Escalation criteria.
    #[serde(default)]
    pub when_to_seek_help: Vec<String>,
}
