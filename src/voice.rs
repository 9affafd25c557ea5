//! Voice facade: speech-to-text for chat input and text-to-speech for
//! replies. The crate ships no engines; hosts plug theirs in behind these
//! traits and `NullVoice` stands in where the platform has none.
//!
//! Calls against an unsupported capability do nothing.

use serde::{Deserialize, Serialize};

pub trait SpeechRecognizer: Send {
    fn is_supported(&self) -> bool;

    fn start_listening(&mut self);

    /// Stop listening and hand back whatever was heard.
    fn stop_listening(&mut self) -> Option<String>;

    fn is_listening(&self) -> bool;
}

pub trait SpeechSynthesizer: Send {
    fn is_supported(&self) -> bool;

    /// Speak `text`, cancelling any utterance already in progress.
    fn speak(&mut self, text: &str);

    fn stop(&mut self);

    fn is_speaking(&self) -> bool;
}

/// Which voice controls to show. Queried once at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoiceCapabilities {
    pub speech_input: bool,
    pub speech_output: bool,
}

impl VoiceCapabilities {
    pub fn detect(recognizer: &dyn SpeechRecognizer, synthesizer: &dyn SpeechSynthesizer) -> Self {
        let caps = Self {
            speech_input: recognizer.is_supported(),
            speech_output: synthesizer.is_supported(),
        };
        tracing::debug!(
            speech_input = caps.speech_input,
            speech_output = caps.speech_output,
            "Voice capabilities detected"
        );
        caps
    }
}

/// No speech engine available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVoice;

impl SpeechRecognizer for NullVoice {
    fn is_supported(&self) -> bool {
        false
    }

    fn start_listening(&mut self) {}

    fn stop_listening(&mut self) -> Option<String> {
        None
    }

    fn is_listening(&self) -> bool {
        false
    }
}

impl SpeechSynthesizer for NullVoice {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str) {}

    fn stop(&mut self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}
