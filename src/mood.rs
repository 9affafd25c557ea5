//! Mood tracker: daily mood, energy and anxiety check-ins.
//!
//! Entries are kept newest first. The chart series reads the tail of the
//! list, reverses it and inverts anxiety so that "up" is better on every
//! line.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{check_score, CoreError};
use crate::models::MoodEntry;

/// Number of entries plotted on the trend chart.
const CHART_WINDOW: usize = 7;

/// A check-in as entered on the form, before it becomes an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCheckIn {
    pub mood: u8,
    pub energy: u8,
    pub anxiety: u8,
    pub note: String,
    pub tags: Vec<String>,
}

impl Default for MoodCheckIn {
    fn default() -> Self {
        Self {
            mood: 5,
            energy: 5,
            anxiety: 5,
            note: String::new(),
            tags: Vec::new(),
        }
    }
}

/// One point on the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short date label, e.g. "Jan 15".
    pub label: String,
    pub mood: u8,
    pub energy: u8,
    /// `10 - anxiety`, so higher is calmer.
    pub calm: u8,
}

#[derive(Debug, Clone, Default)]
pub struct MoodTracker {
    entries: Vec<MoodEntry>,
}

impl MoodTracker {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    /// Tracker pre-filled with the sample history shown on first launch.
    pub fn with_sample_history() -> Self {
        Self::new(sample_history())
    }

    pub fn snapshot(&self) -> Vec<MoodEntry> {
        self.entries.clone()
    }

    /// Validate a check-in and put it at the top of the history.
    pub fn record(
        &mut self,
        check_in: MoodCheckIn,
        now: NaiveDateTime,
    ) -> Result<Vec<MoodEntry>, CoreError> {
        let mood = check_score("mood", check_in.mood)?;
        let energy = check_score("energy", check_in.energy)?;
        let anxiety = check_score("anxiety", check_in.anxiety)?;

        let note = check_in.note.trim();
        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            date: now,
            mood,
            energy,
            anxiety,
            note: (!note.is_empty()).then(|| note.to_string()),
            tags: check_in.tags,
            symptoms: Vec::new(),
            medications: Vec::new(),
        };
        tracing::debug!(mood, energy, anxiety, "Mood check-in recorded");
        self.entries.insert(0, entry);
        Ok(self.snapshot())
    }

    /// Mean mood across all entries, `None` when there are none.
    pub fn average_mood(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u32 = self.entries.iter().map(|e| u32::from(e.mood)).sum();
        Some(f64::from(total) / self.entries.len() as f64)
    }

    pub fn days_tracked(&self) -> usize {
        self.entries.len()
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        let start = self.entries.len().saturating_sub(CHART_WINDOW);
        self.entries[start..]
            .iter()
            .rev()
            .map(|e| ChartPoint {
                label: e.date.format("%b %d").to_string(),
                mood: e.mood,
                energy: e.energy,
                calm: 10u8.saturating_sub(e.anxiety),
            })
            .collect()
    }

    /// The most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<MoodEntry> {
        self.entries.iter().take(limit).cloned().collect()
    }
}

fn day(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn sample_history() -> Vec<MoodEntry> {
    let entry = |id: &str,
                 date: Option<NaiveDateTime>,
                 scores: (u8, u8, u8),
                 note: &str,
                 tags: &[&str],
                 symptoms: &[&str],
                 medications: &[&str]| {
        date.map(|date| MoodEntry {
            id: id.into(),
            date,
            mood: scores.0,
            energy: scores.1,
            anxiety: scores.2,
            note: Some(note.into()),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            medications: medications.iter().map(|s| s.to_string()).collect(),
        })
    };
    [
        entry(
            "1",
            day(2024, 1, 15),
            (7, 6, 4),
            "Had a good day at work, feeling positive",
            &["work", "positive"],
            &["mild headache"],
            &["acetaminophen 500mg"],
        ),
        entry(
            "2",
            day(2024, 1, 14),
            (5, 4, 6),
            "Feeling a bit overwhelmed with tasks",
            &["stress", "work"],
            &["fatigue", "tension"],
            &[],
        ),
        entry(
            "3",
            day(2024, 1, 13),
            (8, 7, 3),
            "Great weekend with family",
            &["family", "relaxation"],
            &[],
            &[],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
