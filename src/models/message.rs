use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::{MessageCategory, MessageSender, MessageSeverity, MessageType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: MessageSender,
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub category: Option<MessageCategory>,
    pub severity: Option<MessageSeverity>,
}
