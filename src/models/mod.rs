pub mod appointment;
pub mod crisis;
pub mod enums;
pub mod exercise;
pub mod journal;
pub mod medication;
pub mod message;
pub mod mood;
pub mod protocol;
pub mod strategy;
pub mod symptom;

pub use appointment::Appointment;
pub use crisis::{CopingStrategy, CrisisResource};
pub use enums::*;
pub use exercise::Exercise;
pub use journal::JournalEntry;
pub use medication::MedicationSuggestion;
pub use message::Message;
pub use mood::MoodEntry;
pub use protocol::EmergencyProtocol;
pub use strategy::MentalHealthStrategy;
pub use symptom::SymptomProfile;
