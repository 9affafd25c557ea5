use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::AppointmentType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub date: NaiveDateTime,
    /// Display label, e.g. "2:00 PM".
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub therapist: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}
