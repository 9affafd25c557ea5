use serde::{Deserialize, Serialize};

/// Countdown currently attached to an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTimer {
    pub exercise_id: String,
    pub remaining_secs: u32,
    pub running: bool,
}

/// What a single one-second tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No timer attached.
    Idle,
    /// Timer attached but paused; nothing changed.
    Paused,
    Running { remaining_secs: u32 },
    /// Reached zero. The timer has been cleared.
    Completed { exercise_id: String },
}

/// Tick-driven exercise countdown. Owns no clock; something else calls
/// [`ExerciseTimer::tick`] once per second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseTimer {
    active: Option<ActiveTimer>,
}

impl ExerciseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a running countdown of `minutes`, replacing any previous one.
    /// Returns the remaining seconds.
    pub fn start(&mut self, exercise_id: &str, minutes: u32) -> u32 {
        let remaining_secs = minutes.saturating_mul(60);
        self.active = Some(ActiveTimer {
            exercise_id: exercise_id.to_string(),
            remaining_secs,
            running: true,
        });
        tracing::debug!(exercise_id, remaining_secs, "Exercise timer started");
        remaining_secs
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Idle;
        };
        if !active.running {
            return TickOutcome::Paused;
        }

        active.remaining_secs = active.remaining_secs.saturating_sub(1);
        if active.remaining_secs > 0 {
            return TickOutcome::Running {
                remaining_secs: active.remaining_secs,
            };
        }

        // Reaching zero stops the timer and clears it.
        let exercise_id = active.exercise_id.clone();
        self.active = None;
        TickOutcome::Completed { exercise_id }
    }

    /// Returns `true` if a running timer was paused.
    pub fn pause(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) if active.running => {
                active.running = false;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if a paused timer was resumed.
    pub fn resume(&mut self) -> bool {
        match self.active.as_mut() {
            Some(active) if !active.running => {
                active.running = true;
                true
            }
            _ => false,
        }
    }

    /// Detach the timer without completing the exercise. Stopping an idle
    /// timer is a no-op and returns `None`.
    pub fn stop(&mut self) -> Option<ActiveTimer> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&ActiveTimer> {
        self.active.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.running)
    }

    pub fn remaining_secs(&self) -> u32 {
        self.active.as_ref().map_or(0, |a| a.remaining_secs)
    }
}

/// `m:ss` clock face for a number of seconds.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
