//! Bundled reference dataset. Used as-is unless a section is overridden
//! from the knowledge directory at startup.

use crate::models::{
    EmergencyProtocol, MedicationKind, MedicationSuggestion, MentalHealthStrategy, SymptomProfile,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn symptoms() -> Vec<SymptomProfile> {
    vec![
        SymptomProfile {
            id: "fever".into(),
            symptom: "Fever".into(),
            possible_causes: strings(&[
                "Viral infection",
                "Bacterial infection",
                "Inflammatory conditions",
                "Heat exhaustion",
            ]),
            home_remedies: strings(&[
                "Rest and stay hydrated",
                "Take acetaminophen or ibuprofen as directed",
                "Use cool compresses on forehead",
                "Wear light clothing",
                "Take lukewarm baths",
            ]),
            when_to_seek_help: strings(&[
                "Fever above 103°F (39.4°C)",
                "Fever lasting more than 3 days",
                "Severe headache or neck stiffness",
                "Difficulty breathing",
                "Persistent vomiting",
            ]),
            red_flags: strings(&[
                "Temperature above 104°F (40°C)",
                "Confusion or altered mental state",
                "Severe dehydration",
                "Chest pain or difficulty breathing",
                "Signs of meningitis (neck stiffness, light sensitivity)",
            ]),
        },
        SymptomProfile {
            id: "cough".into(),
            symptom: "Cough".into(),
            possible_causes: strings(&["Common cold", "Flu", "Allergies", "Bronchitis", "Asthma"]),
            home_remedies: strings(&[
                "Stay hydrated with warm liquids",
                "Use honey (not for children under 1 year)",
                "Gargle with salt water",
                "Use a humidifier",
                "Avoid irritants like smoke",
            ]),
            when_to_seek_help: strings(&[
                "Cough lasting more than 3 weeks",
                "Coughing up blood",
                "High fever with cough",
                "Shortness of breath",
                "Chest pain",
            ]),
            red_flags: strings(&[
                "Coughing up blood or pink foam",
                "Severe difficulty breathing",
                "Blue lips or face",
                "High fever with severe cough",
                "Signs of pneumonia",
            ]),
        },
        SymptomProfile {
            id: "headache".into(),
            symptom: "Headache".into(),
            possible_causes: strings(&[
                "Tension",
                "Stress",
                "Dehydration",
                "Migraine",
                "Sinus congestion",
            ]),
            home_remedies: strings(&[
                "Rest in a quiet, dark room",
                "Apply cold or warm compress",
                "Stay hydrated",
                "Gentle neck and shoulder massage",
                "Practice relaxation techniques",
            ]),
            when_to_seek_help: strings(&[
                "Sudden severe headache",
                "Headache with fever and neck stiffness",
                "Changes in vision",
                "Headache after head injury",
                "Frequent or worsening headaches",
            ]),
            red_flags: strings(&[
                "Sudden, severe \"thunderclap\" headache",
                "Headache with fever, neck stiffness, and rash",
                "Headache with confusion or loss of consciousness",
                "Headache with weakness or numbness",
                "Worst headache of your life",
            ]),
        },
    ]
}

pub fn medications() -> Vec<MedicationSuggestion> {
    vec![
        MedicationSuggestion {
            name: "Acetaminophen (Tylenol)".into(),
            dosage: "500-1000mg".into(),
            frequency: "Every 4-6 hours".into(),
            duration: "As needed, max 3 days without consulting doctor".into(),
            kind: MedicationKind::Otc,
            precautions: strings(&[
                "Do not exceed 4000mg in 24 hours",
                "Avoid alcohol while taking",
                "Check other medications for acetaminophen content",
            ]),
            side_effects: strings(&[
                "Rare: liver damage with overdose",
                "Allergic reactions (rare)",
            ]),
            contraindications: strings(&["Severe liver disease", "Allergy to acetaminophen"]),
        },
        MedicationSuggestion {
            name: "Ibuprofen (Advil, Motrin)".into(),
            dosage: "200-400mg".into(),
            frequency: "Every 4-6 hours".into(),
            duration: "As needed, max 3 days without consulting doctor".into(),
            kind: MedicationKind::Otc,
            precautions: strings(&[
                "Take with food to reduce stomach irritation",
                "Stay hydrated",
                "Do not exceed 1200mg in 24 hours without medical supervision",
            ]),
            side_effects: strings(&[
                "Stomach upset",
                "Heartburn",
                "Dizziness",
                "Kidney problems (with long-term use)",
            ]),
            contraindications: strings(&[
                "Kidney disease",
                "Heart disease",
                "Stomach ulcers",
                "Allergy to NSAIDs",
            ]),
        },
        MedicationSuggestion {
            name: "Diphenhydramine (Benadryl)".into(),
            dosage: "25-50mg".into(),
            frequency: "Every 4-6 hours".into(),
            duration: "As needed for allergies".into(),
            kind: MedicationKind::Otc,
            precautions: strings(&[
                "May cause drowsiness",
                "Avoid driving or operating machinery",
                "Avoid alcohol",
            ]),
            side_effects: strings(&["Drowsiness", "Dry mouth", "Blurred vision", "Constipation"]),
            contraindications: strings(&[
                "Glaucoma",
                "Enlarged prostate",
                "Severe asthma",
                "Age under 2 years",
            ]),
        },
    ]
}

pub fn strategies() -> Vec<MentalHealthStrategy> {
    vec![
        MentalHealthStrategy {
            condition: "Anxiety".into(),
            immediate_strategies: strings(&[
                "Practice 4-7-8 breathing technique",
                "Use 5-4-3-2-1 grounding method",
                "Progressive muscle relaxation",
                "Mindful observation of surroundings",
            ]),
            long_term_strategies: strings(&[
                "Regular exercise routine",
                "Consistent sleep schedule",
                "Limit caffeine and alcohol",
                "Practice daily meditation",
                "Cognitive behavioral therapy techniques",
            ]),
            precautions: strings(&[
                "Avoid excessive caffeine",
                "Monitor alcohol consumption",
                "Seek professional help if symptoms worsen",
                "Don't stop prescribed medications without consulting doctor",
            ]),
            when_to_seek_help: strings(&[
                "Panic attacks interfering with daily life",
                "Persistent worry for more than 6 months",
                "Physical symptoms like chest pain or shortness of breath",
                "Avoiding important activities due to anxiety",
            ]),
        },
        MentalHealthStrategy {
            condition: "Depression".into(),
            immediate_strategies: strings(&[
                "Engage in small, achievable activities",
                "Spend time in natural light",
                "Connect with supportive friends or family",
                "Practice self-compassion",
            ]),
            long_term_strategies: strings(&[
                "Establish daily routine",
                "Regular physical activity",
                "Maintain social connections",
                "Consider therapy or counseling",
                "Practice gratitude journaling",
            ]),
            precautions: strings(&[
                "Monitor for suicidal thoughts",
                "Avoid isolation",
                "Limit alcohol and substance use",
                "Don't make major life decisions during depressive episodes",
            ]),
            when_to_seek_help: strings(&[
                "Thoughts of self-harm or suicide",
                "Inability to function in daily activities",
                "Symptoms lasting more than 2 weeks",
                "Loss of interest in all activities",
            ]),
        },
    ]
}

pub fn protocols() -> Vec<EmergencyProtocol> {
    vec![
        EmergencyProtocol {
            situation: "Suicidal Thoughts".into(),
            immediate_actions: strings(&[
                "Call 988 (Suicide & Crisis Lifeline) immediately",
                "Go to nearest emergency room",
                "Call 911 if in immediate danger",
                "Remove access to means of self-harm",
            ]),
            support_actions: strings(&[
                "Stay with the person",
                "Listen without judgment",
                "Encourage professional help",
                "Follow up regularly",
            ]),
        },
        EmergencyProtocol {
            situation: "Severe Allergic Reaction".into(),
            immediate_actions: strings(&[
                "Call 911 immediately",
                "Use epinephrine auto-injector if available",
                "Help person lie down and elevate legs",
                "Loosen tight clothing",
            ]),
            support_actions: strings(&[
                "Monitor breathing and pulse",
                "Be prepared to perform CPR",
                "Stay calm and reassuring",
                "Provide information to emergency responders",
            ]),
        },
        EmergencyProtocol {
            situation: "High Fever (104°F+)".into(),
            immediate_actions: strings(&[
                "Call doctor or 911 immediately",
                "Cool the person with lukewarm water",
                "Remove excess clothing",
                "Apply cool, wet cloths to forehead and wrists",
            ]),
            support_actions: strings(&[
                "Monitor temperature regularly",
                "Encourage fluid intake if conscious",
                "Watch for signs of confusion or seizures",
                "Prepare for emergency transport",
            ]),
        },
    ]
}
