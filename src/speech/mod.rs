//! Speech input and output.
//!
//! Two independent streams: capture produces transcript events which are
//! filtered to finalized segments; synthesis is a fire-and-forget `speak`
//! command. [`VoiceAssistant`] joins them through the advisor.

mod assistant;
mod capture;
mod synthesis;

pub use assistant::VoiceAssistant;
pub use capture::{finalized_segments, ChannelCapture, SessionSender, SpeechCapture, TranscriptEvent, TranscriptStream};
pub use synthesis::{ChannelSpeechSink, SpeechSink, Utterance};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// The host has no recognizer for this device or locale.
    #[error("speech recognition is not supported")]
    Unsupported,

    #[error("speech capture failed: {0}")]
    Capture(String),
}
