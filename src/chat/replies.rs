//! Scripted companion replies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First message of every session.
pub const GREETING: &str = "Hello! I'm your AI mental health companion. I'm here to listen, \
support, and help you explore your thoughts and feelings. How are you doing today?";

pub const AI_REPLIES: &[&str] = &[
    "I understand you're experiencing these symptoms. Based on what you've shared, I recommend \
starting with rest and hydration. However, if your symptoms worsen or you develop a fever above \
101°F, please consult a healthcare provider.",
    "Thank you for sharing your health concerns with me. For your current symptoms, here are some \
evidence-based recommendations. Remember, this guidance doesn't replace professional medical advice.",
    "I notice you mentioned feeling anxious about your symptoms. It's natural to feel concerned \
about your health. Let me provide some practical steps you can take while monitoring your condition.",
    "Based on your symptoms, I can suggest some safe, over-the-counter options and home remedies. \
However, please seek immediate medical attention if you experience any red flag symptoms.",
    "Your mental health is just as important as your physical health. I'm here to provide support \
and evidence-based strategies. If you're having thoughts of self-harm, please reach out to a \
crisis helpline immediately.",
    "I can help you understand your symptoms and provide general health guidance. For persistent \
or severe symptoms, it's important to consult with a healthcare professional for proper diagnosis \
and treatment.",
];

/// Uniform draw over [`AI_REPLIES`].
#[derive(Debug, Clone)]
pub struct ReplyPicker {
    rng: StdRng,
}

impl ReplyPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pick_index(&mut self) -> usize {
        self.rng.gen_range(0..AI_REPLIES.len())
    }

    pub fn pick(&mut self) -> &'static str {
        AI_REPLIES[self.pick_index()]
    }
}

impl Default for ReplyPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
