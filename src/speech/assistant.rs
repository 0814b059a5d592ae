use super::capture::{finalized_segments, SpeechCapture};
use super::synthesis::{SpeechSink, Utterance};
use crate::advisor::{AdvisorService, Resolved};
use crate::localization::Locale;
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use tracing::info;

/// Answers spoken questions out loud.
pub struct VoiceAssistant {
    advisor: Arc<AdvisorService>,
    sink: Arc<dyn SpeechSink>,
}

impl VoiceAssistant {
    pub fn new(advisor: Arc<AdvisorService>, sink: Arc<dyn SpeechSink>) -> Self {
        Self { advisor, sink }
    }

    /// Answer one segment and speak the answer.
    pub async fn answer(&self, segment: &str, locale: Locale) -> Resolved<String> {
        info!(locale = %locale, chars = segment.chars().count(), "voice question");
        let answer = self.advisor.voice_query(segment, locale).await;
        self.sink.speak(Utterance::new(answer.value.clone(), locale));
        answer
    }

    /// Answer each segment in turn, yielding the answers.
    pub fn answer_segments<'a, S>(&'a self, segments: S, locale: Locale) -> impl Stream<Item = Resolved<String>> + 'a
    where
        S: Stream<Item = String> + 'a,
    {
        segments.then(move |segment| async move { self.answer(&segment, locale).await })
    }

    /// One listening session: capture, answer, speak.
    pub fn listen<'a>(&'a self, capture: &dyn SpeechCapture, locale: Locale) -> impl Stream<Item = Resolved<String>> + 'a {
        self.answer_segments(finalized_segments(capture.listen(locale)), locale)
    }
}
