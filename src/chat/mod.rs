//! Companion chat: a single session seeded with a greeting, scripted
//! replies, crisis flagging, and optional voice input and output.

mod escalation;
mod replies;

use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{Message, MessageCategory, MessageSender, MessageSeverity, MessageType};
use crate::voice::{SpeechRecognizer, SpeechSynthesizer};

pub use escalation::{check_crisis, CrisisEscalation, CrisisKind};
pub use replies::{ReplyPicker, AI_REPLIES, GREETING};

/// One user turn and the answer it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatExchange {
    pub user: Message,
    pub reply: Message,
    pub escalation: Option<CrisisEscalation>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    picker: ReplyPicker,
}

impl ChatSession {
    pub fn new(picker: ReplyPicker, now: NaiveDateTime) -> Self {
        let greeting = message(GREETING, MessageSender::Ai, now, None);
        Self {
            messages: vec![greeting],
            input: String::new(),
            picker,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Text currently in the input box.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append a user message and the companion's answer.
    ///
    /// The reply is always one of [`AI_REPLIES`]. Crisis language only marks
    /// the user message as a critical emergency and is reported back in
    /// [`ChatExchange::escalation`].
    pub fn send(&mut self, text: &str, now: NaiveDateTime) -> Result<ChatExchange, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::BlankEntry("message"));
        }

        let escalation = check_crisis(text);
        let flag = escalation
            .as_ref()
            .map(|_| (MessageCategory::Emergency, MessageSeverity::Critical));

        let user = message(text, MessageSender::User, now, flag);
        let reply = message(self.picker.pick(), MessageSender::Ai, now, None);

        self.messages.push(user.clone());
        self.messages.push(reply.clone());
        Ok(ChatExchange {
            user,
            reply,
            escalation,
        })
    }

    /// Send whatever is in the input box and clear it.
    pub fn send_input(&mut self, now: NaiveDateTime) -> Result<ChatExchange, CoreError> {
        let text = std::mem::take(&mut self.input);
        match self.send(&text, now) {
            Ok(exchange) => Ok(exchange),
            Err(e) => {
                self.input = text;
                Err(e)
            }
        }
    }

    /// Put a finished transcript into the input box. Blank transcripts are
    /// ignored.
    pub fn apply_transcript(&mut self, transcript: Option<String>) {
        if let Some(text) = transcript.filter(|t| !t.trim().is_empty()) {
            self.input = text;
        }
    }

    /// Microphone button: start listening, or stop and take the transcript.
    /// Returns whether the recognizer is listening afterwards.
    pub fn toggle_listening(&mut self, recognizer: &mut dyn SpeechRecognizer) -> bool {
        if !recognizer.is_supported() {
            return false;
        }
        if recognizer.is_listening() {
            let transcript = recognizer.stop_listening();
            self.apply_transcript(transcript);
        } else {
            recognizer.start_listening();
        }
        recognizer.is_listening()
    }

    /// Speaker button on a message: stop if already speaking, else read it.
    pub fn toggle_speech(&self, synthesizer: &mut dyn SpeechSynthesizer, message_id: &str) {
        if !synthesizer.is_supported() {
            return;
        }
        if synthesizer.is_speaking() {
            synthesizer.stop();
        } else if let Some(m) = self.messages.iter().find(|m| m.id == message_id) {
            synthesizer.speak(&m.content);
        }
    }

    /// Read the latest companion message aloud. Returns whether anything
    /// was spoken.
    pub fn speak_last_reply(&self, synthesizer: &mut dyn SpeechSynthesizer) -> bool {
        if !synthesizer.is_supported() {
            return false;
        }
        match self
            .messages
            .iter()
            .rev()
            .find(|m| m.sender == MessageSender::Ai)
        {
            Some(m) => {
                synthesizer.speak(&m.content);
                true
            }
            None => false,
        }
    }
}

fn message(
    content: &str,
    sender: MessageSender,
    now: NaiveDateTime,
    flag: Option<(MessageCategory, MessageSeverity)>,
) -> Message {
    Message {
        id: Uuid::new_v4().to_string(),
        content: content.to_string(),
        sender,
        timestamp: now,
        kind: MessageType::Text,
        category: flag.map(|(c, _)| c),
        severity: flag.map(|(_, s)| s),
    }
}
