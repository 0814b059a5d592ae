use super::SpeechError;
use crate::localization::Locale;
use futures::stream::{BoxStream, Stream, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// One recognizer update. Interim results are replaced by later ones; only
/// `is_final` text is acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEvent {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptEvent {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

pub type TranscriptStream = BoxStream<'static, Result<TranscriptEvent, SpeechError>>;

/// A speech recognizer. Each `listen` call starts a new session; the stream
/// ends when the session does.
pub trait SpeechCapture: Send + Sync {
    fn listen(&self, locale: Locale) -> TranscriptStream;
}

/// Trimmed text of finalized, non-blank segments. The first capture error
/// ends the session.
pub fn finalized_segments<S>(events: S) -> impl Stream<Item = String>
where
    S: Stream<Item = Result<TranscriptEvent, SpeechError>>,
{
    events
        .take_while(|event| {
            if let Err(e) = event {
                warn!(error = %e, "speech session ended");
            }
            futures::future::ready(event.is_ok())
        })
        .filter_map(|event| {
            let segment = match event {
                Ok(e) if e.is_final && !e.text.trim().is_empty() => Some(e.text.trim().to_string()),
                _ => None,
            };
            futures::future::ready(segment)
        })
}

/// Sending half of one capture session. The session ends when the host drops
/// it.
pub type SessionSender = mpsc::UnboundedSender<Result<TranscriptEvent, SpeechError>>;

type SessionStarter = dyn Fn(Locale, SessionSender) -> Result<(), SpeechError> + Send + Sync;

/// Capture fed by the host's platform recognizer.
///
/// Every `listen` opens a fresh channel and hands its sender to the starter
/// callback; the recognizer pushes events into it and drops it when the
/// session ends. A starter error (no microphone, unsupported locale) is
/// yielded as the session's only item.
pub struct ChannelCapture {
    start: Box<SessionStarter>,
}

impl ChannelCapture {
    pub fn new<F>(start: F) -> Self
    where
        F: Fn(Locale, SessionSender) -> Result<(), SpeechError> + Send + Sync + 'static,
    {
        Self {
            start: Box::new(start),
        }
    }
}

impl SpeechCapture for ChannelCapture {
    fn listen(&self, locale: Locale) -> TranscriptStream {
        let (tx, rx) = mpsc::unbounded_channel();
        match (self.start)(locale, tx) {
            Ok(()) => {
                debug!(locale = %locale, voice = locale.voice_code(), "speech session started");
                futures::stream::unfold(rx, |mut rx| async move {
                    rx.recv().await.map(|event| (event, rx))
                })
                .boxed()
            }
            Err(e) => {
                warn!(locale = %locale, error = %e, "speech session refused");
                futures::stream::once(async move { Err(e) }).boxed()
            }
        }
    }
}
