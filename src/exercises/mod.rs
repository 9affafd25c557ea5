//! Guided exercises: the catalogue, completion tracking, and the countdown
//! that runs while an exercise is in progress.
//!
//! `ExerciseLibrary` is the screen controller. It owns the exercise list
//! and a tick-driven [`ExerciseTimer`]; when a tick brings the timer to
//! zero the active exercise is stamped completed and the timer clears.
//! [`countdown::spawn_countdown`] drives the same state machine from a
//! tokio interval for callers that want wall-clock ticking.

pub mod countdown;
mod timer;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::{Exercise, ExerciseCategory};

pub use timer::{format_clock, ActiveTimer, ExerciseTimer, TickOutcome};

/// Category filter for the exercise list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExerciseFilter {
    #[default]
    All,
    Category(ExerciseCategory),
}

impl ExerciseFilter {
    fn matches(&self, exercise: &Exercise) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => exercise.category == *category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExerciseLibrary {
    exercises: Vec<Exercise>,
    timer: ExerciseTimer,
}

impl ExerciseLibrary {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises,
            timer: ExerciseTimer::new(),
        }
    }

    /// Library seeded with the bundled catalogue.
    pub fn with_catalogue() -> Self {
        Self::new(catalogue())
    }

    pub fn snapshot(&self) -> Vec<Exercise> {
        self.exercises.clone()
    }

    pub fn filtered(&self, filter: ExerciseFilter) -> Vec<Exercise> {
        self.exercises
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn timer(&self) -> &ExerciseTimer {
        &self.timer
    }

    /// Start the countdown for an exercise. Returns the remaining seconds.
    pub fn start(&mut self, exercise_id: &str) -> Result<u32, CoreError> {
        let minutes = self.find(exercise_id)?.duration_minutes;
        Ok(self.timer.start(exercise_id, minutes))
    }

    /// Advance the countdown by one second, completing the exercise at zero.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickOutcome {
        let outcome = self.timer.tick();
        if let TickOutcome::Completed { exercise_id } = &outcome {
            self.mark_completed(exercise_id, now);
        }
        outcome
    }

    pub fn pause(&mut self) -> bool {
        self.timer.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.timer.resume()
    }

    /// Abandon the active countdown without completing it. No-op when idle.
    pub fn stop(&mut self) -> Option<ActiveTimer> {
        self.timer.stop()
    }

    /// Complete the active exercise immediately and clear the timer.
    pub fn complete_active(&mut self, now: NaiveDateTime) -> Option<Exercise> {
        let active = self.timer.stop()?;
        self.mark_completed(&active.exercise_id, now)
    }

    /// Record a completion reported by an external countdown.
    pub fn record_completion(
        &mut self,
        exercise_id: &str,
        now: NaiveDateTime,
    ) -> Result<Exercise, CoreError> {
        self.find(exercise_id)?;
        if self
            .timer
            .active()
            .is_some_and(|a| a.exercise_id == exercise_id)
        {
            self.timer.stop();
        }
        self.mark_completed(exercise_id, now)
            .ok_or_else(|| CoreError::ExerciseNotFound(exercise_id.to_string()))
    }

    /// Clear the completion flag and timestamp.
    pub fn reset(&mut self, exercise_id: &str) -> Result<Exercise, CoreError> {
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| CoreError::ExerciseNotFound(exercise_id.to_string()))?;
        exercise.completed = false;
        exercise.completed_at = None;
        Ok(exercise.clone())
    }

    /// Number of exercises completed on `day`.
    pub fn completed_on(&self, day: NaiveDate) -> usize {
        self.exercises
            .iter()
            .filter(|e| e.completed && e.completed_at.is_some_and(|at| at.date() == day))
            .count()
    }

    pub fn completed_today(&self) -> usize {
        self.completed_on(Local::now().date_naive())
    }

    pub fn total_completed(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    /// Sum of the durations of every completed exercise.
    pub fn minutes_practiced(&self) -> u32 {
        self.exercises
            .iter()
            .filter(|e| e.completed)
            .map(|e| e.duration_minutes)
            .sum()
    }

    fn find(&self, exercise_id: &str) -> Result<&Exercise, CoreError> {
        self.exercises
            .iter()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| CoreError::ExerciseNotFound(exercise_id.to_string()))
    }

    fn mark_completed(&mut self, exercise_id: &str, now: NaiveDateTime) -> Option<Exercise> {
        let exercise = self.exercises.iter_mut().find(|e| e.id == exercise_id)?;
        exercise.completed = true;
        exercise.completed_at = Some(now);
        tracing::info!(exercise_id, "Exercise completed");
        Some(exercise.clone())
    }
}

impl Default for ExerciseLibrary {
    fn default() -> Self {
        Self::with_catalogue()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, minute, 0))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The bundled exercise catalogue.
pub fn catalogue() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "1".into(),
            title: "Deep Breathing Exercise".into(),
            description: "Practice 4-7-8 breathing technique to reduce anxiety and promote relaxation".into(),
            duration_minutes: 5,
            category: ExerciseCategory::Breathing,
            completed: true,
            completed_at: at(2024, 1, 15, 9, 0),
            health_benefits: strings(&["Reduces anxiety", "Lowers blood pressure", "Improves focus"]),
            precautions: strings(&["Stop if you feel dizzy", "Practice in a safe environment"]),
        },
        Exercise {
            id: "2".into(),
            title: "Mindful Body Scan".into(),
            description: "Focus on different parts of your body to increase awareness and reduce tension".into(),
            duration_minutes: 10,
            category: ExerciseCategory::Mindfulness,
            completed: false,
            completed_at: None,
            health_benefits: strings(&[
                "Reduces muscle tension",
                "Improves body awareness",
                "Promotes relaxation",
            ]),
            precautions: strings(&["Find a comfortable position", "Don't force relaxation"]),
        },
        Exercise {
            id: "3".into(),
            title: "Thought Challenging".into(),
            description: "Identify and challenge negative thought patterns using CBT techniques".into(),
            duration_minutes: 15,
            category: ExerciseCategory::Cbt,
            completed: false,
            completed_at: None,
            health_benefits: strings(&["Improves mood", "Reduces negative thinking", "Builds resilience"]),
            precautions: strings(&["Work with a therapist if needed", "Be patient with the process"]),
        },
        Exercise {
            id: "4".into(),
            title: "Progressive Muscle Relaxation".into(),
            description: "Systematically tense and relax muscle groups to reduce physical stress".into(),
            duration_minutes: 12,
            category: ExerciseCategory::Movement,
            completed: true,
            completed_at: at(2024, 1, 14, 18, 30),
            health_benefits: strings(&[
                "Reduces muscle tension",
                "Improves sleep quality",
                "Lowers stress hormones",
            ]),
            precautions: strings(&["Avoid if you have muscle injuries", "Don't over-tense muscles"]),
        },
        Exercise {
            id: "5".into(),
            title: "Gentle Neck Stretches".into(),
            description: "Simple neck and shoulder stretches to relieve tension and improve mobility".into(),
            duration_minutes: 8,
            category: ExerciseCategory::PhysicalTherapy,
            completed: false,
            completed_at: None,
            health_benefits: strings(&[
                "Relieves neck pain",
                "Improves range of motion",
                "Reduces headaches",
            ]),
            precautions: strings(&[
                "Move slowly and gently",
                "Stop if you feel pain",
                "Consult doctor for chronic pain",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap()
    }

    #[test]
    fn catalogue_has_five_exercises() {
        let library = ExerciseLibrary::with_catalogue();
        assert_eq!(library.snapshot().len(), 5);
    }

    #[test]
    fn filter_by_category() {
        let library = ExerciseLibrary::with_catalogue();
        let breathing = library.filtered(ExerciseFilter::Category(ExerciseCategory::Breathing));
        assert_eq!(breathing.len(), 1);
        assert_eq!(breathing[0].title, "Deep Breathing Exercise");
        assert_eq!(library.filtered(ExerciseFilter::All).len(), 5);
    }

    #[test]
    fn start_uses_exercise_duration() {
        let mut library = ExerciseLibrary::with_catalogue();
        assert_eq!(library.start("1").unwrap(), 300);
        assert_eq!(library.start("3").unwrap(), 900);
        assert_eq!(library.timer().active().unwrap().exercise_id, "3");
    }

    #[test]
    fn start_unknown_exercise_fails() {
        let mut library = ExerciseLibrary::with_catalogue();
        assert!(matches!(
            library.start("99"),
            Err(CoreError::ExerciseNotFound(id)) if id == "99"
        ));
    }

    #[test]
    fn three_hundred_ticks_complete_five_minute_exercise() {
        let mut library = ExerciseLibrary::with_catalogue();
        library.reset("1").unwrap();
        library.start("1").unwrap();

        for _ in 0..299 {
            assert!(matches!(library.tick(now()), TickOutcome::Running { .. }));
        }
        assert_eq!(
            library.tick(now()),
            TickOutcome::Completed {
                exercise_id: "1".into()
            }
        );

        let exercise = &library.snapshot()[0];
        assert!(exercise.completed);
        assert_eq!(exercise.completed_at, Some(now()));
        assert!(library.timer().active().is_none());
    }

    #[test]
    fn stop_abandons_without_completing() {
        let mut library = ExerciseLibrary::with_catalogue();
        library.start("2").unwrap();
        library.tick(now());
        assert!(library.stop().is_some());
        assert!(library.stop().is_none());
        assert!(!library.snapshot()[1].completed);
    }

    #[test]
    fn complete_active_finishes_early() {
        let mut library = ExerciseLibrary::with_catalogue();
        library.start("5").unwrap();
        let done = library.complete_active(now()).unwrap();
        assert_eq!(done.id, "5");
        assert!(done.completed);
        assert!(library.complete_active(now()).is_none());
    }

    #[test]
    fn record_completion_clears_matching_timer() {
        let mut library = ExerciseLibrary::with_catalogue();
        library.start("2").unwrap();
        let done = library.record_completion("2", now()).unwrap();
        assert!(done.completed);
        assert!(library.timer().active().is_none());
    }

    #[test]
    fn reset_clears_completion() {
        let mut library = ExerciseLibrary::with_catalogue();
        let exercise = library.reset("4").unwrap();
        assert!(!exercise.completed);
        assert!(exercise.completed_at.is_none());
    }

    #[test]
    fn completed_on_counts_only_that_day() {
        let mut library = ExerciseLibrary::with_catalogue();
        assert_eq!(library.completed_on(now().date()), 0);
        assert_eq!(
            library.completed_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            1
        );

        library.start("2").unwrap();
        library.complete_active(now());
        assert_eq!(library.completed_on(now().date()), 1);
    }

    #[test]
    fn progress_totals_follow_completions() {
        let mut library = ExerciseLibrary::with_catalogue();
        assert_eq!(library.total_completed(), 2);
        assert_eq!(library.minutes_practiced(), 17);

        library.start("2").unwrap();
        library.complete_active(now());
        assert_eq!(library.total_completed(), 3);
        assert_eq!(library.minutes_practiced(), 27);

        library.reset("4").unwrap();
        assert_eq!(library.total_completed(), 2);
        assert_eq!(library.minutes_practiced(), 15);
    }
}
