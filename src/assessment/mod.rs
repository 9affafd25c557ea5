//! Rule-based symptom assessment.
//!
//! Maps a symptom selection and a self-rated severity to either an
//! emergency notice or a de-duplicated set of home remedies, escalation
//! criteria and over-the-counter suggestions. Pure over its inputs and the
//! read-only knowledge base.

mod evaluator;
mod types;

pub use evaluator::{
    dedupe_preserving_order, evaluate, try_evaluate, ANALGESIC_TRIGGERS, EMERGENCY_SYMPTOMS,
    EMERGENCY_WARNING,
};
pub use types::{Assessment, EmergencyContact, EmergencyNotice, EmergencyTrigger, EvaluationResult};

/// Symptoms offered by the assessment checklist, in display order.
pub const SYMPTOM_CHECKLIST: &[&str] = &[
    "Fever",
    "Cough",
    "Headache",
    "Sore throat",
    "Runny nose",
    "Body aches",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Fatigue",
    "Dizziness",
    "Chest pain",
    "Shortness of breath",
    "Abdominal pain",
    "Back pain",
    "Joint pain",
];
