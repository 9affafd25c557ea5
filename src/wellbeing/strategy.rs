use crate::knowledge::KnowledgeBase;
use crate::models::MentalHealthStrategy;

/// Conditions the user can pick from, in display order.
pub const SUPPORTED_CONDITIONS: &[&str] = &[
    "Anxiety",
    "Depression",
    "Stress",
    "Insomnia",
    "Panic Attacks",
    "Social Anxiety",
    "PTSD",
    "Bipolar Disorder",
    "OCD",
    "ADHD",
];

/// Exact-match lookup of the strategy for a supported condition.
///
/// Returns `None` for anything outside [`SUPPORTED_CONDITIONS`] and for
/// supported conditions the knowledge base has no entry for.
pub fn select_strategy<'kb>(
    condition: &str,
    kb: &'kb KnowledgeBase,
) -> Option<&'kb MentalHealthStrategy> {
    if !SUPPORTED_CONDITIONS.contains(&condition) {
        return None;
    }
    kb.strategy(condition)
}
