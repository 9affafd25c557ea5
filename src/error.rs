use thiserror::Error;

use crate::knowledge::KnowledgeError;

/// Errors surfaced by the controllers and the `CoreState` facade.
///
/// The assessment evaluator itself never fails; these cover caller-side
/// validation and startup loading.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("At least one symptom must be selected")]
    EmptySelection,

    #[error("{0} must not be blank")]
    BlankEntry(&'static str),

    #[error("{field} must be between 1 and 10, got {value}")]
    ScoreOutOfRange { field: &'static str, value: u8 },

    #[error("Exercise not found: {0}")]
    ExerciseNotFound(String),

    #[error("Exercise timer task failed: {0}")]
    TimerTask(String),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Internal lock poisoned")]
    LockPoisoned,
}

/// Validate a 1..=10 slider score.
pub fn check_score(field: &'static str, value: u8) -> Result<u8, CoreError> {
    if (1..=10).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::ScoreOutOfRange { field, value })
    }
}
