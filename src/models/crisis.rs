use serde::{Deserialize, Serialize};

use super::enums::CrisisResourceType;

/// A hotline or service the user can reach out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisResource {
    pub id: String,
    pub name: String,
    /// Either a dialable number or a texting instruction ("Text HOME to 741741").
    pub phone: String,
    pub description: String,
    pub available_24h: bool,
    #[serde(rename = "type")]
    pub kind: CrisisResourceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopingStrategy {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
}
