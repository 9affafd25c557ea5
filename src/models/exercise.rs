use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::ExerciseCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Length of one session in minutes.
    pub duration_minutes: u32,
    pub category: ExerciseCategory,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub health_benefits: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
}
