use crate::localization::Locale;
use tokio::sync::mpsc;
use tracing::debug;

/// Text to speak and the voice to speak it in (`hi-IN`, `en-US`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub voice_code: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>, locale: Locale) -> Self {
        Self {
            text: text.into(),
            voice_code: locale.voice_code().to_string(),
        }
    }
}

/// A speech synthesizer. `speak` does not wait for playback.
pub trait SpeechSink: Send + Sync {
    fn speak(&self, utterance: Utterance);
}

/// Forwards utterances to a receiver owned by the host's audio layer.
#[derive(Clone)]
pub struct ChannelSpeechSink {
    tx: mpsc::UnboundedSender<Utterance>,
}

impl ChannelSpeechSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Utterance>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl SpeechSink for ChannelSpeechSink {
    fn speak(&self, utterance: Utterance) {
        debug!(voice = %utterance.voice_code, chars = utterance.text.chars().count(), "speak");
        // A dropped receiver means the host stopped playback; nothing to do.
        let _ = self.tx.send(utterance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn voice_follows_locale() {
        let (sink, mut rx) = ChannelSpeechSink::new();
        sink.speak(Utterance::new("नमस्ते", Locale::Mr));
        let u = rx.recv().await.unwrap();
        assert_eq!(u.voice_code, "mr-IN");
    }

    #[test]
    fn speaking_after_receiver_dropped_is_silent() {
        let (sink, rx) = ChannelSpeechSink::new();
        drop(rx);
        sink.speak(Utterance::new("hello", Locale::En));
    }
}
