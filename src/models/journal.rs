use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDateTime,
    pub title: String,
    pub content: String,
    pub mood: u8,
    pub prompt: Option<String>,
    pub tags: Vec<String>,
    pub health_concerns: Vec<String>,
    pub treatment_plan: Vec<String>,
}
