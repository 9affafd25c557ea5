//! Mental-health solutions: condition strategies and the quick check-in.

mod quick_check;
mod strategy;

pub use quick_check::{recommend, QuickCheck, RecommendationBlock};
pub use strategy::{select_strategy, SUPPORTED_CONDITIONS};
