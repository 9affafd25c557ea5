use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One mood check-in. All scores are on a 1-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub date: NaiveDateTime,
    pub mood: u8,
    pub energy: u8,
    pub anxiety: u8,
    pub note: Option<String>,
    pub tags: Vec<String>,
    pub symptoms: Vec<String>,
    pub medications: Vec<String>,
}
