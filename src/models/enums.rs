use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(CoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SeverityLevel {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(MedicationKind {
    Otc => "otc",
    PrescriptionRequired => "prescription-required",
});

str_enum!(ExerciseCategory {
    Breathing => "breathing",
    Mindfulness => "mindfulness",
    Cbt => "cbt",
    Movement => "movement",
    PhysicalTherapy => "physical-therapy",
});

str_enum!(CrisisResourceType {
    MentalHealth => "mental-health",
    MedicalEmergency => "medical-emergency",
    PoisonControl => "poison-control",
    General => "general",
});

str_enum!(MessageSender {
    User => "user",
    Ai => "ai",
});

str_enum!(MessageType {
    Text => "text",
    Voice => "voice",
});

str_enum!(MessageCategory {
    General => "general",
    MentalHealth => "mental-health",
    Medical => "medical",
    Emergency => "emergency",
});

str_enum!(MessageSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

str_enum!(AppointmentType {
    Therapy => "therapy",
    Checkup => "checkup",
    Group => "group",
    Medication => "medication",
});
