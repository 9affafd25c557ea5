use serde::{Deserialize, Serialize};

use crate::error::{check_score, CoreError};

const LOW_MOOD_MAX: u8 = 3;
const HIGH_STRESS_MIN: u8 = 7;
const POOR_SLEEP_MAX: u8 = 4;

/// The three 1-10 sliders of the quick mental health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCheck {
    pub mood: u8,
    pub stress: u8,
    pub sleep_quality: u8,
}

impl QuickCheck {
    pub fn new(mood: u8, stress: u8, sleep_quality: u8) -> Result<Self, CoreError> {
        Ok(Self {
            mood: check_score("mood", mood)?,
            stress: check_score("stress", stress)?,
            sleep_quality: check_score("sleep_quality", sleep_quality)?,
        })
    }
}

impl Default for QuickCheck {
    /// Sliders start centred.
    fn default() -> Self {
        Self {
            mood: 5,
            stress: 5,
            sleep_quality: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBlock {
    pub category: String,
    pub actions: Vec<String>,
}

fn block(category: &str, actions: &[&str]) -> RecommendationBlock {
    RecommendationBlock {
        category: category.into(),
        actions: actions.iter().map(|s| s.to_string()).collect(),
    }
}

/// Threshold rules evaluated independently, appended as mood, stress, sleep.
pub fn recommend(check: &QuickCheck) -> Vec<RecommendationBlock> {
    let mut blocks = Vec::new();

    if check.mood <= LOW_MOOD_MAX {
        blocks.push(block(
            "Immediate Support",
            &[
                "Practice deep breathing for 5 minutes",
                "Call a trusted friend or family member",
                "Engage in a small, pleasant activity",
                "Consider professional counseling",
            ],
        ));
    }

    if check.stress >= HIGH_STRESS_MIN {
        blocks.push(block(
            "Stress Management",
            &[
                "Take a 10-minute walk outside",
                "Practice progressive muscle relaxation",
                "Limit caffeine intake",
                "Set boundaries with stressful situations",
            ],
        ));
    }

    if check.sleep_quality <= POOR_SLEEP_MAX {
        blocks.push(block(
            "Sleep Hygiene",
            &[
                "Establish a consistent bedtime routine",
                "Avoid screens 1 hour before bed",
                "Keep bedroom cool and dark",
                "Consider melatonin (consult doctor first)",
            ],
        ));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(blocks: &[RecommendationBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.category.as_str()).collect()
    }

    #[test]
    fn all_three_blocks_in_fixed_order() {
        let blocks = recommend(&QuickCheck::new(2, 8, 3).unwrap());
        assert_eq!(
            categories(&blocks),
            vec!["Immediate Support", "Stress Management", "Sleep Hygiene"]
        );
        assert!(blocks.iter().all(|b| b.actions.len() == 4));
    }

    #[test]
    fn healthy_scores_yield_nothing() {
        assert!(recommend(&QuickCheck::new(6, 4, 7).unwrap()).is_empty());
        assert!(recommend(&QuickCheck::default()).is_empty());
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(categories(&recommend(&QuickCheck::new(3, 6, 5).unwrap())), vec!["Immediate Support"]);
        assert_eq!(categories(&recommend(&QuickCheck::new(4, 7, 5).unwrap())), vec!["Stress Management"]);
        assert_eq!(categories(&recommend(&QuickCheck::new(4, 6, 4).unwrap())), vec!["Sleep Hygiene"]);
    }

    #[test]
    fn blocks_are_independent() {
        let blocks = recommend(&QuickCheck::new(9, 10, 1).unwrap());
        assert_eq!(categories(&blocks), vec!["Stress Management", "Sleep Hygiene"]);
    }

    #[test]
    fn out_of_range_scores_rejected() {
        assert!(matches!(
            QuickCheck::new(0, 5, 5),
            Err(CoreError::ScoreOutOfRange { field: "mood", .. })
        ));
        assert!(QuickCheck::new(5, 11, 5).is_err());
    }
}
