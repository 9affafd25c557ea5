//! Read-only reference data consulted by the assessment and wellbeing modules.
//!
//! The built-in dataset ships with the crate. At startup any of the four
//! sections can be replaced by a JSON file in the knowledge directory:
//! `symptoms.json`, `medications.json`, `strategies.json`, `protocols.json`.
//! Nothing mutates a `KnowledgeBase` after construction.

mod builtin;

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{EmergencyProtocol, MedicationSuggestion, MentalHealthStrategy, SymptomProfile};

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Knowledge file load failed ({0}): {1}")]
    Load(String, String),

    #[error("Knowledge file parse failed ({0}): {1}")]
    Parse(String, String),
}

const SYMPTOMS_FILE: &str = "symptoms.json";
const MEDICATIONS_FILE: &str = "medications.json";
const STRATEGIES_FILE: &str = "strategies.json";
const PROTOCOLS_FILE: &str = "protocols.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    pub symptoms: Vec<SymptomProfile>,
    pub medications: Vec<MedicationSuggestion>,
    pub strategies: Vec<MentalHealthStrategy>,
    pub protocols: Vec<EmergencyProtocol>,
}

impl KnowledgeBase {
    /// The dataset bundled with the application.
    pub fn builtin() -> Self {
        Self {
            symptoms: builtin::symptoms(),
            medications: builtin::medications(),
            strategies: builtin::strategies(),
            protocols: builtin::protocols(),
        }
    }

    /// Built-in data with every section present in `dir` replaced.
    pub fn load(dir: &Path) -> Result<Self, KnowledgeError> {
        let mut kb = Self::builtin();
        if let Some(symptoms) = read_section(dir, SYMPTOMS_FILE)? {
            kb.symptoms = symptoms;
        }
        if let Some(medications) = read_section(dir, MEDICATIONS_FILE)? {
            kb.medications = medications;
        }
        if let Some(strategies) = read_section(dir, STRATEGIES_FILE)? {
            kb.strategies = strategies;
        }
        if let Some(protocols) = read_section(dir, PROTOCOLS_FILE)? {
            kb.protocols = protocols;
        }

        tracing::info!(
            dir = %dir.display(),
            symptoms = kb.symptoms.len(),
            medications = kb.medications.len(),
            strategies = kb.strategies.len(),
            protocols = kb.protocols.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Load overrides from the configured directory if it exists, else the built-in data.
    pub fn load_or_builtin(config: &AppConfig) -> Result<Self, KnowledgeError> {
        if config.knowledge_dir.is_dir() {
            Self::load(&config.knowledge_dir)
        } else {
            tracing::debug!(
                dir = %config.knowledge_dir.display(),
                "No knowledge override directory, using built-in data"
            );
            Ok(Self::builtin())
        }
    }

    /// Look up a symptom by display name, ignoring case.
    pub fn find_symptom(&self, name: &str) -> Option<&SymptomProfile> {
        let lower = name.to_lowercase();
        self.symptoms
            .iter()
            .find(|s| s.symptom.to_lowercase() == lower)
    }

    /// First medication whose name contains `fragment`, ignoring case.
    pub fn find_medication(&self, fragment: &str) -> Option<&MedicationSuggestion> {
        let lower = fragment.to_lowercase();
        self.medications
            .iter()
            .find(|m| m.name.to_lowercase().contains(&lower))
    }

    /// Exact-match condition lookup.
    pub fn strategy(&self, condition: &str) -> Option<&MentalHealthStrategy> {
        self.strategies.iter().find(|s| s.condition == condition)
    }

    /// Exact-match situation lookup.
    pub fn protocol(&self, situation: &str) -> Option<&EmergencyProtocol> {
        self.protocols.iter().find(|p| p.situation == situation)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_section<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
) -> Result<Option<Vec<T>>, KnowledgeError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }
    let json = std::fs::read_to_string(&path)
        .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))?;
    let items = serde_json::from_str(&json)
        .map_err(|e| KnowledgeError::Parse(file.to_string(), e.to_string()))?;
    Ok(Some(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_reference_sections() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.symptoms.len(), 3);
        assert_eq!(kb.medications.len(), 3);
        assert_eq!(kb.strategies.len(), 2);
        assert_eq!(kb.protocols.len(), 3);
    }

    #[test]
    fn find_symptom_case_insensitive() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.find_symptom("fever").unwrap().id, "fever");
        assert_eq!(kb.find_symptom("HEADACHE").unwrap().id, "headache");
        assert!(kb.find_symptom("Sore throat").is_none());
    }

    #[test]
    fn find_medication_by_fragment() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.find_medication("Ibuprofen").unwrap().name,
            "Ibuprofen (Advil, Motrin)"
        );
        assert!(kb.find_medication("aspirin").is_none());
    }

    #[test]
    fn strategy_lookup_is_exact() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.strategy("Anxiety").is_some());
        assert!(kb.strategy("anxiety").is_none());
    }

    #[test]
    fn protocol_lookup() {
        let kb = KnowledgeBase::builtin();
        let protocol = kb.protocol("Severe Allergic Reaction").unwrap();
        assert_eq!(protocol.immediate_actions[0], "Call 911 immediately");
    }

    #[test]
    fn load_replaces_only_present_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(STRATEGIES_FILE),
            r#"[{
                "condition": "Stress",
                "immediate_strategies": ["Box breathing"],
                "long_term_strategies": ["Regular exercise"]
            }]"#,
        )
        .unwrap();

        let kb = KnowledgeBase::load(dir.path()).unwrap();
        assert_eq!(kb.strategies.len(), 1);
        assert_eq!(kb.strategies[0].condition, "Stress");
        assert!(kb.strategies[0].precautions.is_empty());
        assert_eq!(kb.symptoms, builtin::symptoms());
    }

    #[test]
    fn load_reports_parse_errors_by_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SYMPTOMS_FILE), "{ not json").unwrap();

        match KnowledgeBase::load(dir.path()) {
            Err(KnowledgeError::Parse(file, _)) => assert_eq!(file, SYMPTOMS_FILE),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            knowledge_dir: dir.path().join("absent"),
        };
        let kb = KnowledgeBase::load_or_builtin(&config).unwrap();
        assert_eq!(kb, KnowledgeBase::builtin());
    }
}
