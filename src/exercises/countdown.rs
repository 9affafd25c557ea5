//! Wall-clock driver for [`ExerciseTimer`]: one tick per second on a tokio
//! interval, with pause/resume/stop delivered over a channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::timer::{ExerciseTimer, TickOutcome};
use crate::error::CoreError;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    Pause,
    Resume,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownOutcome {
    Completed { exercise_id: String },
    Stopped { exercise_id: String, remaining_secs: u32 },
}

/// Handle to a running countdown task.
pub struct CountdownHandle {
    control: mpsc::Sender<TimerControl>,
    remaining: watch::Receiver<u32>,
    task: JoinHandle<CountdownOutcome>,
}

impl CountdownHandle {
    /// Live remaining-seconds value, updated every tick.
    pub fn remaining(&self) -> watch::Receiver<u32> {
        self.remaining.clone()
    }

    pub async fn pause(&self) {
        // The task may already have finished; a closed channel is fine.
        let _ = self.control.send(TimerControl::Pause).await;
    }

    pub async fn resume(&self) {
        let _ = self.control.send(TimerControl::Resume).await;
    }

    /// Stop the countdown and wait for the task. If it already completed,
    /// the completion is returned.
    pub async fn stop(self) -> Result<CountdownOutcome, CoreError> {
        let _ = self.control.send(TimerControl::Stop).await;
        self.join().await
    }

    /// Wait for the countdown to finish on its own.
    pub async fn join(self) -> Result<CountdownOutcome, CoreError> {
        self.task
            .await
            .map_err(|e| CoreError::TimerTask(e.to_string()))
    }
}

/// Spawn a countdown of `minutes` for `exercise_id` on the current runtime.
pub fn spawn_countdown(exercise_id: &str, minutes: u32) -> CountdownHandle {
    let mut timer = ExerciseTimer::new();
    let start = timer.start(exercise_id, minutes);
    let (control_tx, control_rx) = mpsc::channel(8);
    let (remaining_tx, remaining_rx) = watch::channel(start);

    let task = tokio::spawn(run_countdown(timer, control_rx, remaining_tx));

    CountdownHandle {
        control: control_tx,
        remaining: remaining_rx,
        task,
    }
}

async fn run_countdown(
    mut timer: ExerciseTimer,
    mut control: mpsc::Receiver<TimerControl>,
    remaining: watch::Sender<u32>,
) -> CountdownOutcome {
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => match timer.tick() {
                TickOutcome::Running { remaining_secs } => {
                    let _ = remaining.send(remaining_secs);
                }
                TickOutcome::Completed { exercise_id } => {
                    let _ = remaining.send(0);
                    tracing::info!(exercise_id = %exercise_id, "Exercise countdown completed");
                    return CountdownOutcome::Completed { exercise_id };
                }
                TickOutcome::Paused | TickOutcome::Idle => {}
            },
            msg = control.recv() => match msg {
                Some(TimerControl::Pause) => {
                    timer.pause();
                }
                Some(TimerControl::Resume) => {
                    if timer.resume() {
                        ticker.reset();
                    }
                }
                // A dropped handle stops the countdown too.
                Some(TimerControl::Stop) | None => {
                    let remaining_secs = timer.remaining_secs();
                    let exercise_id = timer
                        .stop()
                        .map(|a| a.exercise_id)
                        .unwrap_or_default();
                    tracing::debug!(exercise_id = %exercise_id, remaining_secs, "Exercise countdown stopped");
                    return CountdownOutcome::Stopped { exercise_id, remaining_secs };
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn one_minute_countdown_completes_after_sixty_seconds() {
        let started = Instant::now();
        let handle = spawn_countdown("1", 1);
        assert_eq!(*handle.remaining().borrow(), 60);

        let outcome = handle.join().await.unwrap();
        assert_eq!(
            outcome,
            CountdownOutcome::Completed {
                exercise_id: "1".into()
            }
        );
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(60) && elapsed < Duration::from_secs(61));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_holds_remaining_time() {
        let started = Instant::now();
        let handle = spawn_countdown("2", 1);
        let remaining = handle.remaining();

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(*remaining.borrow(), 50);

        handle.pause().await;
        tokio::time::sleep(Duration::from_secs(100)).await;
        assert_eq!(*remaining.borrow(), 50);

        handle.resume().await;
        let outcome = handle.join().await.unwrap();
        assert!(matches!(outcome, CountdownOutcome::Completed { .. }));
        assert!(started.elapsed() >= Duration::from_secs(160));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_reports_remaining_seconds() {
        let handle = spawn_countdown("3", 2);
        tokio::time::sleep(Duration::from_millis(30_500)).await;

        let outcome = handle.stop().await.unwrap();
        assert_eq!(
            outcome,
            CountdownOutcome::Stopped {
                exercise_id: "3".into(),
                remaining_secs: 90
            }
        );
    }
}
