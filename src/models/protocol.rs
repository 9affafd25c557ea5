use serde::{Deserialize, Serialize};

/// Ordered first-aid guidance for a named emergency situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyProtocol {
    pub situation: String,
    pub immediate_actions: Vec<String>,
    pub support_actions: Vec<String>,
}
