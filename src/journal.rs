//! Reflective journal: drafts, prompts, submitted entries and search.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{check_score, CoreError};
use crate::models::JournalEntry;

// ═══════════════════════════════════════════
// Prompts
// ═══════════════════════════════════════════

pub const JOURNAL_PROMPTS: &[&str] = &[
    "What are three things you're grateful for today?",
    "Describe a challenging situation you handled well recently.",
    "What emotions are you experiencing right now, and what might be causing them?",
    "Write about a person who has positively influenced your life.",
    "What would you tell your younger self?",
    "Describe your ideal day. What makes it special?",
    "What are you looking forward to this week?",
];

/// Number of prompts offered on the writing screen.
const FEATURED_PROMPT_COUNT: usize = 4;

pub fn featured_prompts() -> &'static [&'static str] {
    &JOURNAL_PROMPTS[..FEATURED_PROMPT_COUNT]
}

// ═══════════════════════════════════════════
// Draft
// ═══════════════════════════════════════════

/// An entry being written. Nothing is validated until `Journal::submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub mood: u8,
    pub prompt: Option<String>,
    tags: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mood: 5,
            prompt: None,
            tags: Vec::new(),
        }
    }
}

impl Draft {
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a trimmed tag. Blank and duplicate tags are ignored; returns
    /// whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn select_prompt(&mut self, prompt: &str) {
        self.prompt = Some(prompt.to_string());
    }
}

// ═══════════════════════════════════════════
// Journal
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    pub fn with_sample_entries() -> Self {
        Self::new(sample_entries())
    }

    pub fn snapshot(&self) -> Vec<JournalEntry> {
        self.entries.clone()
    }

    /// Turn a draft into an entry at the top of the journal.
    pub fn submit(&mut self, draft: Draft, now: NaiveDateTime) -> Result<JournalEntry, CoreError> {
        if draft.title.trim().is_empty() {
            return Err(CoreError::BlankEntry("title"));
        }
        if draft.content.trim().is_empty() {
            return Err(CoreError::BlankEntry("content"));
        }
        let mood = check_score("mood", draft.mood)?;

        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            date: now,
            title: draft.title,
            content: draft.content,
            mood,
            prompt: draft.prompt.filter(|p| !p.trim().is_empty()),
            tags: draft.tags,
            health_concerns: Vec::new(),
            treatment_plan: Vec::new(),
        };
        tracing::debug!(entry_id = %entry.id, tags = entry.tags.len(), "Journal entry submitted");
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    /// Entries whose title, content or any tag contains `query`, ignoring
    /// case. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<JournalEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.snapshot();
        }
        self.entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.content.to_lowercase().contains(&needle)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

fn sample_entries() -> Vec<JournalEntry> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(0, 0, 0));
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let mut entries = Vec::new();
    if let Some(date) = date(2024, 1, 15) {
        entries.push(JournalEntry {
            id: "1".into(),
            date,
            title: "Reflection on Today".into(),
            content: "Today was a good day. I managed to complete my tasks and felt productive. \
                      I'm grateful for the support from my colleagues."
                .into(),
            mood: 7,
            prompt: Some(JOURNAL_PROMPTS[0].into()),
            tags: strings(&["gratitude", "work"]),
            health_concerns: strings(&["mild stress"]),
            treatment_plan: strings(&["deep breathing exercises", "regular breaks"]),
        });
    }
    if let Some(date) = date(2024, 1, 13) {
        entries.push(JournalEntry {
            id: "2".into(),
            date,
            title: "Weekend Thoughts".into(),
            content: "Spent quality time with family. These moments remind me of what's truly \
                      important in life."
                .into(),
            mood: 8,
            prompt: None,
            tags: strings(&["family", "values"]),
            health_concerns: Vec::new(),
            treatment_plan: Vec::new(),
        });
    }
    entries
}
