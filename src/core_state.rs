//! Application state shared by every screen.
//!
//! `CoreState` owns the read-only knowledge base and one controller per
//! screen. Each controller sits behind its own `RwLock` so a host can
//! share the state behind an `Arc` and read snapshots concurrently while
//! writes only block the screen they touch.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDateTime};

use crate::assessment::{self, EvaluationResult};
use crate::calendar::Calendar;
use crate::chat::{ChatExchange, ChatSession, ReplyPicker};
use crate::config::AppConfig;
use crate::error::CoreError;
use crate::exercises::countdown::{spawn_countdown, CountdownHandle, CountdownOutcome};
use crate::exercises::{ExerciseLibrary, TickOutcome};
use crate::journal::Journal;
use crate::knowledge::KnowledgeBase;
use crate::models::{Exercise, MentalHealthStrategy, SeverityLevel};
use crate::mood::MoodTracker;
use crate::voice::{NullVoice, SpeechRecognizer, SpeechSynthesizer, VoiceCapabilities};
use crate::wellbeing::{self, QuickCheck, RecommendationBlock};

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    pub config: AppConfig,
    knowledge: Arc<KnowledgeBase>,
    /// Most recent evaluation, replaced on every run.
    last_evaluation: RwLock<Option<EvaluationResult>>,
    mood: RwLock<MoodTracker>,
    journal: RwLock<Journal>,
    exercises: RwLock<ExerciseLibrary>,
    chat: RwLock<ChatSession>,
    calendar: RwLock<Calendar>,
    recognizer: Mutex<Box<dyn SpeechRecognizer>>,
    synthesizer: Mutex<Box<dyn SpeechSynthesizer>>,
    voice: VoiceCapabilities,
}

impl CoreState {
    /// Resolve the knowledge base from `config` and build every controller
    /// with its sample data. Voice is unavailable until
    /// [`CoreState::with_voice`] plugs engines in.
    pub fn new(config: AppConfig) -> Result<Self, CoreError> {
        let knowledge = KnowledgeBase::load_or_builtin(&config)?;
        tracing::info!(
            symptoms = knowledge.symptoms.len(),
            medications = knowledge.medications.len(),
            strategies = knowledge.strategies.len(),
            protocols = knowledge.protocols.len(),
            "Core state ready"
        );
        Ok(Self::with_knowledge(config, knowledge))
    }

    pub fn with_knowledge(config: AppConfig, knowledge: KnowledgeBase) -> Self {
        Self {
            config,
            knowledge: Arc::new(knowledge),
            last_evaluation: RwLock::new(None),
            mood: RwLock::new(MoodTracker::with_sample_history()),
            journal: RwLock::new(Journal::with_sample_entries()),
            exercises: RwLock::new(ExerciseLibrary::with_catalogue()),
            chat: RwLock::new(ChatSession::new(ReplyPicker::from_entropy(), now())),
            calendar: RwLock::new(Calendar::with_sample_appointments()),
            recognizer: Mutex::new(Box::new(NullVoice)),
            synthesizer: Mutex::new(Box::new(NullVoice)),
            voice: VoiceCapabilities::default(),
        }
    }

    /// Install speech engines and record what they support.
    pub fn with_voice(
        mut self,
        recognizer: Box<dyn SpeechRecognizer>,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> Self {
        self.voice = VoiceCapabilities::detect(&*recognizer, &*synthesizer);
        self.recognizer = Mutex::new(recognizer);
        self.synthesizer = Mutex::new(synthesizer);
        self
    }

    pub fn knowledge(&self) -> Arc<KnowledgeBase> {
        Arc::clone(&self.knowledge)
    }

    pub fn voice_capabilities(&self) -> VoiceCapabilities {
        self.voice
    }

    // ── Assessment ──────────────────────────────────────────

    pub fn evaluate(
        &self,
        symptoms: &[String],
        severity: SeverityLevel,
    ) -> Result<EvaluationResult, CoreError> {
        let result = assessment::try_evaluate(symptoms, severity, &self.knowledge)?;
        let mut last = self
            .last_evaluation
            .write()
            .map_err(|_| CoreError::LockPoisoned)?;
        *last = Some(result.clone());
        Ok(result)
    }

    pub fn last_evaluation(&self) -> Result<Option<EvaluationResult>, CoreError> {
        let guard = self
            .last_evaluation
            .read()
            .map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// "Start new assessment".
    pub fn clear_evaluation(&self) -> Result<(), CoreError> {
        let mut guard = self
            .last_evaluation
            .write()
            .map_err(|_| CoreError::LockPoisoned)?;
        *guard = None;
        Ok(())
    }

    // ── Wellbeing ───────────────────────────────────────────

    pub fn strategy_for(&self, condition: &str) -> Option<MentalHealthStrategy> {
        wellbeing::select_strategy(condition, &self.knowledge).cloned()
    }

    pub fn quick_check(
        &self,
        mood: u8,
        stress: u8,
        sleep_quality: u8,
    ) -> Result<Vec<RecommendationBlock>, CoreError> {
        let check = QuickCheck::new(mood, stress, sleep_quality)?;
        Ok(wellbeing::recommend(&check))
    }

    // ── Controllers ─────────────────────────────────────────

    pub fn read_mood(&self) -> Result<RwLockReadGuard<'_, MoodTracker>, CoreError> {
        self.mood.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_mood(&self) -> Result<RwLockWriteGuard<'_, MoodTracker>, CoreError> {
        self.mood.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_journal(&self) -> Result<RwLockReadGuard<'_, Journal>, CoreError> {
        self.journal.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_journal(&self) -> Result<RwLockWriteGuard<'_, Journal>, CoreError> {
        self.journal.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_exercises(&self) -> Result<RwLockReadGuard<'_, ExerciseLibrary>, CoreError> {
        self.exercises.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_exercises(&self) -> Result<RwLockWriteGuard<'_, ExerciseLibrary>, CoreError> {
        self.exercises.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_chat(&self) -> Result<RwLockReadGuard<'_, ChatSession>, CoreError> {
        self.chat.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_chat(&self) -> Result<RwLockWriteGuard<'_, ChatSession>, CoreError> {
        self.chat.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_calendar(&self) -> Result<RwLockReadGuard<'_, Calendar>, CoreError> {
        self.calendar.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_calendar(&self) -> Result<RwLockWriteGuard<'_, Calendar>, CoreError> {
        self.calendar.write().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Exercises ───────────────────────────────────────────

    /// One-second tick for hosts that drive the timer from their own clock.
    pub fn tick_exercise(&self) -> Result<TickOutcome, CoreError> {
        Ok(self.write_exercises()?.tick(now()))
    }

    /// Start an exercise on a background countdown. The library's own
    /// tick timer is left alone; report the outcome back with
    /// [`CoreState::finish_countdown`].
    pub fn spawn_exercise_countdown(&self, exercise_id: &str) -> Result<CountdownHandle, CoreError> {
        let minutes = self
            .read_exercises()?
            .snapshot()
            .iter()
            .find(|e| e.id == exercise_id)
            .map(|e| e.duration_minutes)
            .ok_or_else(|| CoreError::ExerciseNotFound(exercise_id.to_string()))?;
        Ok(spawn_countdown(exercise_id, minutes))
    }

    /// Apply a finished countdown. Completed runs are recorded; stopped
    /// runs leave the exercise untouched.
    pub fn finish_countdown(&self, outcome: &CountdownOutcome) -> Result<Option<Exercise>, CoreError> {
        match outcome {
            CountdownOutcome::Completed { exercise_id } => self
                .write_exercises()?
                .record_completion(exercise_id, now())
                .map(Some),
            CountdownOutcome::Stopped { .. } => Ok(None),
        }
    }

    pub fn exercises_completed_today(&self) -> Result<usize, CoreError> {
        Ok(self.read_exercises()?.completed_today())
    }

    pub fn exercises_total_completed(&self) -> Result<usize, CoreError> {
        Ok(self.read_exercises()?.total_completed())
    }

    pub fn minutes_practiced(&self) -> Result<u32, CoreError> {
        Ok(self.read_exercises()?.minutes_practiced())
    }

    // ── Chat & voice ────────────────────────────────────────

    pub fn send_chat(&self, text: &str) -> Result<ChatExchange, CoreError> {
        self.write_chat()?.send(text, now())
    }

    /// Microphone button. Returns whether the recognizer is now listening.
    pub fn toggle_listening(&self) -> Result<bool, CoreError> {
        let mut recognizer = self.lock_recognizer()?;
        Ok(self.write_chat()?.toggle_listening(&mut **recognizer))
    }

    pub fn speak_last_reply(&self) -> Result<bool, CoreError> {
        let mut synthesizer = self.lock_synthesizer()?;
        Ok(self.read_chat()?.speak_last_reply(&mut **synthesizer))
    }

    fn lock_recognizer(&self) -> Result<MutexGuard<'_, Box<dyn SpeechRecognizer>>, CoreError> {
        self.recognizer.lock().map_err(|_| CoreError::LockPoisoned)
    }

    fn lock_synthesizer(&self) -> Result<MutexGuard<'_, Box<dyn SpeechSynthesizer>>, CoreError> {
        self.synthesizer.lock().map_err(|_| CoreError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodCheckIn;

    fn state() -> CoreState {
        CoreState::with_knowledge(AppConfig::default(), KnowledgeBase::builtin())
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_with_missing_override_dir_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            knowledge_dir: dir.path().join("absent"),
        };
        let state = CoreState::new(config).unwrap();
        assert_eq!(*state.knowledge(), KnowledgeBase::builtin());
    }

    #[test]
    fn new_surfaces_bad_override_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("symptoms.json"), "not json").unwrap();
        let config = AppConfig {
            knowledge_dir: dir.path().to_path_buf(),
        };
        assert!(matches!(
            CoreState::new(config),
            Err(CoreError::Knowledge(_))
        ));
    }

    #[test]
    fn evaluate_stores_last_result() {
        let state = state();
        assert!(state.last_evaluation().unwrap().is_none());

        let result = state
            .evaluate(&names(&["Fever"]), SeverityLevel::Mild)
            .unwrap();
        assert!(!result.is_emergency());
        assert_eq!(state.last_evaluation().unwrap(), Some(result));

        state.clear_evaluation().unwrap();
        assert!(state.last_evaluation().unwrap().is_none());
    }

    #[test]
    fn evaluate_rejects_empty_selection() {
        let state = state();
        assert!(matches!(
            state.evaluate(&[], SeverityLevel::Mild),
            Err(CoreError::EmptySelection)
        ));
    }

    #[test]
    fn wellbeing_passthrough() {
        let state = state();
        assert!(state.strategy_for("Anxiety").is_some());
        assert!(state.strategy_for("Unknown").is_none());
        assert_eq!(state.quick_check(2, 8, 3).unwrap().len(), 3);
        assert!(state.quick_check(0, 5, 5).is_err());
    }

    #[test]
    fn controllers_are_independent() {
        let state = state();
        state
            .write_mood()
            .unwrap()
            .record(MoodCheckIn::default(), now())
            .unwrap();
        assert_eq!(state.read_mood().unwrap().days_tracked(), 4);
        assert_eq!(state.read_journal().unwrap().snapshot().len(), 2);
    }

    #[test]
    fn chat_without_voice() {
        let state = state();
        assert_eq!(state.voice_capabilities(), VoiceCapabilities::default());
        assert!(!state.toggle_listening().unwrap());
        assert!(!state.speak_last_reply().unwrap());

        let exchange = state.send_chat("hello there").unwrap();
        assert_eq!(state.read_chat().unwrap().messages().len(), 3);
        assert!(exchange.escalation.is_none());
    }

    #[test]
    fn exercise_tick_through_state() {
        let state = state();
        state.write_exercises().unwrap().start("2").unwrap();
        assert!(matches!(
            state.tick_exercise().unwrap(),
            TickOutcome::Running { remaining_secs: 599 }
        ));
    }

    #[test]
    fn unknown_exercise_countdown_fails() {
        let state = state();
        assert!(matches!(
            state.spawn_exercise_countdown("42"),
            Err(CoreError::ExerciseNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_completion_is_recorded() {
        let state = state();
        state.write_exercises().unwrap().reset("1").unwrap();
        assert_eq!(state.exercises_total_completed().unwrap(), 1);
        assert_eq!(state.minutes_practiced().unwrap(), 12);

        let handle = state.spawn_exercise_countdown("1").unwrap();
        let outcome = handle.join().await.unwrap();
        let exercise = state.finish_countdown(&outcome).unwrap().unwrap();
        assert_eq!(exercise.id, "1");
        assert!(exercise.completed);
        assert_eq!(state.exercises_completed_today().unwrap(), 1);
        assert_eq!(state.exercises_total_completed().unwrap(), 2);
        assert_eq!(state.minutes_practiced().unwrap(), 17);
    }
}
