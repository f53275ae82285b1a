//! Session lifecycle and mood timeline through the chat pipeline.

use async_trait::async_trait;
use emotiva::classifier::{EmotionClassifier, EmotionDetector, EmotionScore, SharedClassifier};
use emotiva::mood::{MoodColor, timeline};
use emotiva::session::Role;
use emotiva::{ChatPipeline, LanguageKey, LanguageSelection, ReplyEngine, Session, TemplateRevision};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replays a fixed sequence of labels, one per call.
struct Scripted(Mutex<VecDeque<&'static str>>);

impl Scripted {
    fn new(labels: &[&'static str]) -> Self {
        Self(Mutex::new(labels.iter().copied().collect()))
    }
}

#[async_trait]
impl EmotionClassifier for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn scores(&self, _text: &str) -> emotiva::Result<Vec<EmotionScore>> {
        let label = self
            .0
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or("neutral");
        Ok(vec![
            EmotionScore::new("neutral", 0.1),
            EmotionScore::new(label, 0.9),
        ])
    }
}

fn pipeline(labels: &[&'static str]) -> ChatPipeline {
    let detector = EmotionDetector::new(
        Arc::new(SharedClassifier::ready(Arc::new(Scripted::new(labels)))),
        Duration::from_secs(1),
    );
    ChatPipeline::new(
        ReplyEngine::for_revision(TemplateRevision::Extended).expect("templates"),
        detector,
    )
    .with_selection(LanguageSelection::Explicit(LanguageKey::English))
}

#[tokio::test]
async fn three_turns_produce_ordered_coloured_timeline() {
    let pipeline = pipeline(&["happy", "sad", "angry"]);
    let mut session = Session::new();
    for text in ["hello!", "my delivery is late", "this is the worst"] {
        pipeline.handle_turn(&mut session, text).await.expect("reply");
    }

    let points = timeline(session.mood_history());
    assert_eq!(points.len(), 3);
    let summary: Vec<(usize, &str, MoodColor)> = points
        .iter()
        .map(|p| (p.index, p.label.as_str(), p.color))
        .collect();
    assert_eq!(
        summary,
        [
            (0, "happy", MoodColor::Green),
            (1, "sad", MoodColor::Blue),
            (2, "angry", MoodColor::Red),
        ]
    );
}

#[tokio::test]
async fn log_alternates_user_and_assistant_turns() {
    let pipeline = pipeline(&["joy", "fear"]);
    let mut session = Session::new();
    let first = pipeline.handle_turn(&mut session, "hey").await.expect("reply");
    let second = pipeline
        .handle_turn(&mut session, "I'm worried about my refund")
        .await
        .expect("reply");

    let roles: Vec<Role> = session.turns().iter().map(|t| t.role).collect();
    assert_eq!(roles, [Role::User, Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(first.assistant_index, 1);
    assert_eq!(second.assistant_index, 3);
    assert!(second.reply.text.starts_with("It's okay to feel scared."));
    assert_eq!(session.user_turn_count(), 2);
}

#[tokio::test]
async fn reset_clears_log_and_mood_together() {
    let pipeline = pipeline(&["sad", "joy"]);
    let mut session = Session::new();
    pipeline.handle_turn(&mut session, "hello").await.expect("reply");
    session.reset();
    assert!(session.turns().is_empty());
    assert!(timeline(session.mood_history()).is_empty());

    pipeline.handle_turn(&mut session, "hello again").await.expect("reply");
    assert_eq!(session.turns().len(), 2);
    assert_eq!(session.mood_history()[0].as_str(), "joy");
}

#[tokio::test]
async fn switching_language_mid_session_affects_only_later_turns() {
    let mut pipeline = pipeline(&["neutral", "neutral"]);
    let mut session = Session::new();
    pipeline.handle_turn(&mut session, "status?").await.expect("reply");
    pipeline
        .set_selection(LanguageSelection::Explicit(LanguageKey::Marathi))
        .expect("extended templates offer Marathi");
    pipeline.handle_turn(&mut session, "status?").await.expect("reply");

    assert_eq!(session.turns()[1].language, Some(LanguageKey::English));
    assert_eq!(session.turns()[3].language, Some(LanguageKey::Marathi));
    assert_ne!(session.turns()[1].text, session.turns()[3].text);
}
