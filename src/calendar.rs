//! Appointment calendar: therapy sessions, check-ups, groups and
//! medication reviews laid out on a month grid.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{Appointment, AppointmentType};

/// A new appointment as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub title: String,
    pub date: NaiveDateTime,
    pub kind: AppointmentType,
    pub therapist: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Calendar {
    appointments: Vec<Appointment>,
}

impl Calendar {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    pub fn with_sample_appointments() -> Self {
        Self::new(sample_appointments())
    }

    pub fn snapshot(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    pub fn add(&mut self, request: AppointmentRequest) -> Result<Appointment, CoreError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(CoreError::BlankEntry("title"));
        }
        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date: request.date,
            time: time_label(request.date),
            kind: request.kind,
            therapist: non_blank(request.therapist),
            location: non_blank(request.location),
            notes: non_blank(request.notes),
        };
        tracing::debug!(appointment_id = %appointment.id, kind = %appointment.kind, "Appointment added");
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Appointments falling on `day`, earliest first.
    pub fn appointments_on(&self, day: NaiveDate) -> Vec<Appointment> {
        let mut found: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.date.date() == day)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.date);
        found
    }

    /// Appointments at or after `from`, earliest first, at most `limit`.
    pub fn upcoming(&self, from: NaiveDateTime, limit: usize) -> Vec<Appointment> {
        let mut found: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.date >= from)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.date);
        found.truncate(limit);
        found
    }
}

/// Every day of a month, first to last. Empty for an invalid month.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(next) = first.checked_add_months(Months::new(1)) else {
        return Vec::new();
    };
    first.iter_days().take_while(|d| *d < next).collect()
}

/// `(year, month)` shifted by `delta` months, for the month navigation arrows.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))?
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))?
    };
    Some((shifted.year(), shifted.month()))
}

/// "2:00 PM" style label.
fn time_label(date: NaiveDateTime) -> String {
    date.format("%-I:%M %p").to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn sample_appointments() -> Vec<Appointment> {
    let at = |d: u32, h: u32, m: u32| {
        NaiveDate::from_ymd_opt(2024, 1, d).and_then(|date| date.and_hms_opt(h, m, 0))
    };
    let owned = |s: &str| Some(s.to_string());

    [
        at(18, 14, 0).map(|date| Appointment {
            id: "1".into(),
            title: "Weekly Therapy Session".into(),
            date,
            time: time_label(date),
            kind: AppointmentType::Therapy,
            therapist: owned("Dr. Sarah Johnson"),
            location: owned("Downtown Medical Center"),
            notes: owned("Focus on anxiety management techniques"),
        }),
        at(22, 10, 30).map(|date| Appointment {
            id: "2".into(),
            title: "Medication Check-in".into(),
            date,
            time: time_label(date),
            kind: AppointmentType::Medication,
            therapist: owned("Dr. Michael Chen"),
            location: owned("Virtual Appointment"),
            notes: None,
        }),
        at(25, 18, 0).map(|date| Appointment {
            id: "3".into(),
            title: "Support Group Meeting".into(),
            date,
            time: time_label(date),
            kind: AppointmentType::Group,
            therapist: None,
            location: owned("Community Center - Room B"),
            notes: owned("Monthly group session"),
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sample_time_labels() {
        let labels: Vec<String> = Calendar::with_sample_appointments()
            .snapshot()
            .into_iter()
            .map(|a| a.time)
            .collect();
        assert_eq!(labels, vec!["2:00 PM", "10:30 AM", "6:00 PM"]);
    }

    #[test]
    fn appointments_on_matches_day() {
        let calendar = Calendar::with_sample_appointments();
        let found = calendar.appointments_on(date(2024, 1, 22));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Medication Check-in");
        assert!(calendar.appointments_on(date(2024, 1, 23)).is_empty());
    }

    #[test]
    fn month_days_covers_whole_month() {
        assert_eq!(month_days(2024, 1).len(), 31);
        assert_eq!(month_days(2024, 2).len(), 29);
        assert_eq!(month_days(2023, 2).len(), 28);
        assert_eq!(month_days(2024, 12).last().copied(), Some(date(2024, 12, 31)));
        assert!(month_days(2024, 13).is_empty());
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(shift_month(2024, 12, 1), Some((2025, 1)));
        assert_eq!(shift_month(2024, 1, -1), Some((2023, 12)));
        assert_eq!(shift_month(2024, 5, 0), Some((2024, 5)));
        assert_eq!(shift_month(2024, 0, 1), None);
    }

    #[test]
    fn upcoming_is_sorted_and_limited() {
        let mut calendar = Calendar::with_sample_appointments();
        calendar
            .add(AppointmentRequest {
                title: "Annual checkup".into(),
                date: date(2024, 1, 20).and_hms_opt(9, 0, 0).unwrap(),
                kind: AppointmentType::Checkup,
                therapist: None,
                location: Some("  ".into()),
                notes: None,
            })
            .unwrap();

        let from = date(2024, 1, 19).and_hms_opt(0, 0, 0).unwrap();
        let upcoming = calendar.upcoming(from, 2);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].title, "Annual checkup");
        assert_eq!(upcoming[0].time, "9:00 AM");
        assert_eq!(upcoming[0].location, None);
        assert_eq!(upcoming[1].title, "Medication Check-in");
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut calendar = Calendar::default();
        let result = calendar.add(AppointmentRequest {
            title: " ".into(),
            date: date(2024, 1, 20).and_hms_opt(9, 0, 0).unwrap(),
            kind: AppointmentType::Therapy,
            therapist: None,
            location: None,
            notes: None,
        });
        assert!(matches!(result, Err(CoreError::BlankEntry("title"))));
    }
}
