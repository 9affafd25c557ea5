use std::collections::HashSet;

use chrono::Local;
use uuid::Uuid;

use super::types::{
    Assessment, EmergencyContact, EmergencyNotice, EmergencyTrigger, EvaluationResult,
};
use crate::config::FOLLOW_UP_SYMPTOM_THRESHOLD;
use crate::crisis::contact_link;
use crate::error::CoreError;
use crate::knowledge::KnowledgeBase;
use crate::models::{MedicationSuggestion, SeverityLevel};

/// Emergency-grade symptoms. Exact, case-sensitive match against the selection.
pub const EMERGENCY_SYMPTOMS: &[&str] = &["Chest pain", "Shortness of breath", "Severe headache"];

/// Symptoms that unlock analgesic suggestions. Matched ignoring case.
pub const ANALGESIC_TRIGGERS: &[&str] = &["fever", "headache", "body aches"];

/// Name fragments of the suggested analgesics, in suggestion order.
const ANALGESICS: &[&str] = &["Acetaminophen", "Ibuprofen"];

pub const EMERGENCY_WARNING: &str = "Seek immediate medical attention";

const EMERGENCY_ACTIONS: &[&str] = &[
    "Call 911 or go to nearest emergency room",
    "Do not delay seeking medical care",
];

const EMERGENCY_CONTACTS: &[(&str, &str)] = &[
    ("Call 911", "911"),
    ("Poison Control", "1-800-222-1222"),
];

/// Evaluate a symptom selection against the knowledge base.
///
/// The selection is treated as a set in selection order; repeated names
/// count once. Callers must not pass an empty selection (see
/// [`try_evaluate`]). Unknown symptoms contribute nothing.
pub fn evaluate(selected: &[String], severity: SeverityLevel, kb: &KnowledgeBase) -> EvaluationResult {
    let symptoms = dedupe_preserving_order(selected.iter().cloned());

    let trigger = EmergencyTrigger {
        severe_rating: severity == SeverityLevel::Severe,
        emergency_symptoms: symptoms
            .iter()
            .filter(|s| EMERGENCY_SYMPTOMS.contains(&s.as_str()))
            .cloned()
            .collect(),
    };
    if trigger.severe_rating || !trigger.emergency_symptoms.is_empty() {
        tracing::warn!(
            severe_rating = trigger.severe_rating,
            emergency_symptoms = ?trigger.emergency_symptoms,
            "Assessment short-circuited to emergency path"
        );
        return EvaluationResult::Emergency(emergency_notice(trigger, kb));
    }

    let mut recommendations = Vec::new();
    let mut precautions = Vec::new();
    for symptom in &symptoms {
        if let Some(profile) = kb.find_symptom(symptom) {
            recommendations.extend(profile.home_remedies.iter().cloned());
            precautions.extend(profile.when_to_seek_help.iter().cloned());
        }
    }

    let medications = suggest_medications(&symptoms, kb);
    let follow_up_required =
        severity == SeverityLevel::Moderate || symptoms.len() > FOLLOW_UP_SYMPTOM_THRESHOLD;

    let assessment = Assessment {
        id: Uuid::new_v4(),
        created_at: Local::now().naive_local(),
        severity,
        recommendations: dedupe_preserving_order(recommendations),
        precautions: dedupe_preserving_order(precautions),
        medications,
        follow_up_required,
        symptoms,
    };

    tracing::info!(
        assessment_id = %assessment.id,
        symptoms = assessment.symptoms.len(),
        severity = %severity,
        recommendations = assessment.recommendations.len(),
        medications = assessment.medications.len(),
        follow_up_required,
        "Assessment generated"
    );
    EvaluationResult::Assessment(assessment)
}

/// Checked entry point for callers that have not validated the selection.
pub fn try_evaluate(
    selected: &[String],
    severity: SeverityLevel,
    kb: &KnowledgeBase,
) -> Result<EvaluationResult, CoreError> {
    if selected.is_empty() {
        return Err(CoreError::EmptySelection);
    }
    Ok(evaluate(selected, severity, kb))
}

/// Acetaminophen then ibuprofen, once each, when any trigger symptom is selected.
fn suggest_medications(symptoms: &[String], kb: &KnowledgeBase) -> Vec<MedicationSuggestion> {
    let triggered = symptoms
        .iter()
        .any(|s| ANALGESIC_TRIGGERS.contains(&s.to_lowercase().as_str()));
    if !triggered {
        return Vec::new();
    }
    ANALGESICS
        .iter()
        .filter_map(|fragment| kb.find_medication(fragment).cloned())
        .collect()
}

fn emergency_notice(trigger: EmergencyTrigger, kb: &KnowledgeBase) -> EmergencyNotice {
    EmergencyNotice {
        trigger,
        warning: EMERGENCY_WARNING.to_string(),
        immediate_actions: EMERGENCY_ACTIONS.iter().map(|s| s.to_string()).collect(),
        contacts: EMERGENCY_CONTACTS
            .iter()
            .map(|(label, number)| EmergencyContact {
                label: label.to_string(),
                number: number.to_string(),
                link: contact_link(number),
            })
            .collect(),
        protocols: kb.protocols.clone(),
    }
}

/// Ordered set: keeps the first occurrence of each item.
pub fn dedupe_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn assess(names: &[&str], severity: SeverityLevel) -> Assessment {
        let kb = KnowledgeBase::builtin();
        match evaluate(&select(names), severity, &kb) {
            EvaluationResult::Assessment(a) => a,
            EvaluationResult::Emergency(e) => panic!("unexpected emergency: {e:?}"),
        }
    }

    fn has_duplicates(items: &[String]) -> bool {
        let unique: HashSet<&String> = items.iter().collect();
        unique.len() != items.len()
    }

    // ── Emergency path ─────────────────────────────────────────

    #[test]
    fn severe_always_takes_emergency_path() {
        let kb = KnowledgeBase::builtin();
        for names in [&["Cough"][..], &["Fever", "Headache"], &["Unlisted symptom"]] {
            let result = evaluate(&select(names), SeverityLevel::Severe, &kb);
            let notice = result.emergency().expect("severe must be emergency");
            assert!(notice.trigger.severe_rating);
            assert!(notice.trigger.emergency_symptoms.is_empty());
        }
    }

    #[test]
    fn chest_pain_is_emergency_even_when_mild() {
        let kb = KnowledgeBase::builtin();
        let result = evaluate(&select(&["Cough", "Chest pain"]), SeverityLevel::Mild, &kb);
        let notice = result.emergency().unwrap();
        assert!(!notice.trigger.severe_rating);
        assert_eq!(notice.trigger.emergency_symptoms, vec!["Chest pain"]);
        assert_eq!(notice.warning, EMERGENCY_WARNING);
    }

    #[test]
    fn every_emergency_symptom_triggers_alone() {
        let kb = KnowledgeBase::builtin();
        for &name in EMERGENCY_SYMPTOMS {
            let result = evaluate(&select(&[name]), SeverityLevel::Mild, &kb);
            let notice = result
                .emergency()
                .unwrap_or_else(|| panic!("{name} should be an emergency"));
            assert_eq!(notice.trigger.emergency_symptoms, vec![name.to_string()]);
            assert!(!notice.trigger.severe_rating);
        }
    }

    #[test]
    fn emergency_symptom_match_is_case_sensitive() {
        let kb = KnowledgeBase::builtin();
        let result = evaluate(&select(&["chest pain"]), SeverityLevel::Mild, &kb);
        assert!(!result.is_emergency());
    }

    #[test]
    fn emergency_notice_carries_actions_contacts_and_protocols() {
        let kb = KnowledgeBase::builtin();
        let result = evaluate(&select(&["Shortness of breath"]), SeverityLevel::Moderate, &kb);
        let notice = result.emergency().unwrap();
        assert_eq!(notice.immediate_actions.len(), 2);
        assert_eq!(notice.contacts[0].link, "tel:911");
        assert_eq!(notice.contacts[1].link, "tel:18002221222");
        assert_eq!(notice.protocols.len(), kb.protocols.len());
    }

    // ── Assessment path ────────────────────────────────────────

    #[test]
    fn non_emergency_input_yields_assessment() {
        let kb = KnowledgeBase::builtin();
        for severity in [SeverityLevel::Mild, SeverityLevel::Moderate] {
            for names in [&["Cough"][..], &["Fever", "Nausea"], &["Back pain"]] {
                assert!(!evaluate(&select(names), severity, &kb).is_emergency());
            }
        }
    }

    #[test]
    fn recommendations_follow_selection_order() {
        let a = assess(&["Cough", "Fever"], SeverityLevel::Mild);
        assert_eq!(a.recommendations[0], "Stay hydrated with warm liquids");
        assert_eq!(a.recommendations[5], "Rest and stay hydrated");
        assert_eq!(a.precautions[0], "Cough lasting more than 3 weeks");
        assert_eq!(a.symptoms, vec!["Cough", "Fever"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let a = assess(&["fEVER"], SeverityLevel::Mild);
        assert_eq!(a.recommendations.len(), 5);
        assert_eq!(a.precautions.len(), 5);
    }

    #[test]
    fn unknown_symptoms_contribute_nothing() {
        let a = assess(&["Sore throat", "Runny nose"], SeverityLevel::Mild);
        assert!(a.recommendations.is_empty());
        assert!(a.precautions.is_empty());
        assert!(a.medications.is_empty());
    }

    #[test]
    fn no_duplicate_recommendations_or_precautions() {
        // "fever" repeats the Fever lookup under a different spelling.
        let a = assess(&["Fever", "Headache", "Cough", "fever"], SeverityLevel::Mild);
        assert!(!has_duplicates(&a.recommendations));
        assert!(!has_duplicates(&a.precautions));
        assert_eq!(a.symptoms.len(), 4);
    }

    #[test]
    fn shared_entries_collapse_to_first_occurrence() {
        let mut kb = KnowledgeBase::builtin();
        kb.symptoms[1].home_remedies.push("Rest and stay hydrated".into());
        let result = evaluate(&select(&["Fever", "Cough"]), SeverityLevel::Mild, &kb);
        let a = result.assessment().unwrap();
        let count = a
            .recommendations
            .iter()
            .filter(|r| r.as_str() == "Rest and stay hydrated")
            .count();
        assert_eq!(count, 1);
        assert_eq!(a.recommendations[0], "Rest and stay hydrated");
    }

    // ── Follow-up ──────────────────────────────────────────────

    #[test]
    fn follow_up_when_more_than_three_symptoms() {
        let a = assess(&["Fever", "Cough", "Headache", "Sore throat"], SeverityLevel::Mild);
        assert!(a.follow_up_required);
    }

    #[test]
    fn follow_up_boundary_three_symptoms_mild() {
        let a = assess(&["Fever", "Cough", "Headache"], SeverityLevel::Mild);
        assert!(!a.follow_up_required);
    }

    #[test]
    fn follow_up_when_moderate() {
        let a = assess(&["Cough"], SeverityLevel::Moderate);
        assert!(a.follow_up_required);
    }

    // ── Medications ────────────────────────────────────────────

    #[test]
    fn fever_suggests_acetaminophen_then_ibuprofen() {
        let a = assess(&["Fever"], SeverityLevel::Mild);
        let names: Vec<&str> = a.medications.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Acetaminophen (Tylenol)", "Ibuprofen (Advil, Motrin)"]);
    }

    #[test]
    fn cough_suggests_no_medication() {
        let a = assess(&["Cough"], SeverityLevel::Mild);
        assert!(a.medications.is_empty());
    }

    #[test]
    fn multiple_triggers_suggest_each_analgesic_once() {
        let a = assess(&["Fever", "Headache", "Body aches"], SeverityLevel::Mild);
        assert_eq!(a.medications.len(), 2);
    }

    #[test]
    fn body_aches_trigger_ignores_case() {
        let a = assess(&["body Aches"], SeverityLevel::Mild);
        assert_eq!(a.medications.len(), 2);
    }

    #[test]
    fn missing_reference_medication_is_skipped() {
        let mut kb = KnowledgeBase::builtin();
        kb.medications.retain(|m| !m.name.contains("Acetaminophen"));
        let result = evaluate(&select(&["Fever"]), SeverityLevel::Mild, &kb);
        let a = result.assessment().unwrap();
        assert_eq!(a.medications.len(), 1);
        assert!(a.medications[0].name.starts_with("Ibuprofen"));
    }

    // ── Records ────────────────────────────────────────────────

    #[test]
    fn each_evaluation_is_a_new_record() {
        let first = assess(&["Cough"], SeverityLevel::Mild);
        let second = assess(&["Cough"], SeverityLevel::Mild);
        assert_ne!(first.id, second.id);
        assert_eq!(first.recommendations, second.recommendations);
    }

    #[test]
    fn try_evaluate_rejects_empty_selection() {
        let kb = KnowledgeBase::builtin();
        assert!(matches!(
            try_evaluate(&[], SeverityLevel::Mild, &kb),
            Err(CoreError::EmptySelection)
        ));
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let out = dedupe_preserving_order(select(&["b", "a", "b", "c", "a"]));
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn result_serializes_with_outcome_tag() {
        let kb = KnowledgeBase::builtin();
        let result = evaluate(&select(&["Cough"]), SeverityLevel::Severe, &kb);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "emergency");
        assert_eq!(json["warning"], EMERGENCY_WARNING);
    }
}
