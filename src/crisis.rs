//! Crisis support: hotlines, coping strategies, warning signs and the
//! deep links that the UI hands to the platform dialer or SMS app.
//! Nothing here places a call; links are rendered, never invoked.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CopingStrategy, CrisisResource, CrisisResourceType};

// ═══════════════════════════════════════════
// Static data
// ═══════════════════════════════════════════

pub const WARNING_SIGNS: &[&str] = &[
    "Thoughts of hurting yourself or others",
    "Feeling completely hopeless",
    "Substance abuse as a way to cope",
    "Extreme mood swings",
    "Inability to perform daily activities",
    "Hearing voices or seeing things others don't",
    "Feeling disconnected from reality",
];

pub fn crisis_resources() -> Vec<CrisisResource> {
    let resource = |id: &str, name: &str, phone: &str, description: &str, kind| CrisisResource {
        id: id.into(),
        name: name.into(),
        phone: phone.into(),
        description: description.into(),
        available_24h: true,
        kind,
    };
    vec![
        resource(
            "1",
            "National Suicide Prevention Lifeline",
            "988",
            "Free and confidential support for people in distress",
            CrisisResourceType::MentalHealth,
        ),
        resource(
            "2",
            "Crisis Text Line",
            "Text HOME to 741741",
            "Free, 24/7 support via text message",
            CrisisResourceType::MentalHealth,
        ),
        resource(
            "3",
            "SAMHSA National Helpline",
            "1-800-662-4357",
            "Treatment referral and information service",
            CrisisResourceType::MentalHealth,
        ),
        resource(
            "4",
            "Emergency Medical Services",
            "911",
            "Immediate medical emergency response",
            CrisisResourceType::MedicalEmergency,
        ),
        resource(
            "5",
            "Poison Control Center",
            "1-800-222-1222",
            "Emergency poison information and treatment advice",
            CrisisResourceType::PoisonControl,
        ),
    ]
}

/// Resources of one type, in listing order.
pub fn resources_of(kind: CrisisResourceType) -> Vec<CrisisResource> {
    crisis_resources()
        .into_iter()
        .filter(|r| r.kind == kind)
        .collect()
}

pub fn coping_strategies() -> Vec<CopingStrategy> {
    let strategy = |title: &str, description: &str, steps: &[&str]| CopingStrategy {
        title: title.into(),
        description: description.into(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        strategy(
            "Box Breathing",
            "Breathe in for 4, hold for 4, breathe out for 4, hold for 4. Repeat.",
            &[
                "Inhale slowly for 4 counts",
                "Hold your breath for 4 counts",
                "Exhale slowly for 4 counts",
                "Hold empty for 4 counts",
                "Repeat 4-6 times",
            ],
        ),
        strategy(
            "5-4-3-2-1 Grounding",
            "Use your senses to ground yourself in the present moment.",
            &[
                "5 things you can see",
                "4 things you can touch",
                "3 things you can hear",
                "2 things you can smell",
                "1 thing you can taste",
            ],
        ),
        strategy(
            "Progressive Muscle Relaxation",
            "Tense and release muscle groups to reduce physical tension.",
            &[
                "Start with your toes",
                "Tense muscles for 5 seconds",
                "Release and relax for 10 seconds",
                "Move up through your body",
                "End with facial muscles",
            ],
        ),
        strategy(
            "Safe Place Visualization",
            "Imagine a place where you feel completely safe and calm.",
            &[
                "Close your eyes gently",
                "Imagine your safe place",
                "Notice the colors and details",
                "Feel the peace and safety",
                "Stay here as long as needed",
            ],
        ),
    ]
}

// ═══════════════════════════════════════════
// Deep links
// ═══════════════════════════════════════════

/// "Text HOME to 741741" style instructions.
static TEXT_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*text\s+(\S+)\s+to\s+(\d+)\s*$").expect("valid text-instruction regex")
});

/// Render a `tel:` link for a number, or an `sms:` link for a texting instruction.
///
/// Only digits survive in a `tel:` link.
pub fn contact_link(phone: &str) -> String {
    if let Some(caps) = TEXT_INSTRUCTION.captures(phone) {
        return format!("sms:{}?body={}", &caps[2], &caps[1]);
    }
    let dialable: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{dialable}")
}
