//! Integration Tests
//!
//! End-to-end tests that run whole conversations through the analyzer, load lexicons
//! from disk and aggregate the results.

use crate::brain::{
    templates, FixedChoice, Lexicon, Message, ResponseKind, StressAssessment, StressLevel,
    StressSummary, TurnOutcome, WellbeingAnalyzer,
};
use crate::error::AppError;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Runs every message through the analyzer, appending both turns to the history as the
/// binary does.
fn run_conversation(analyzer: &WellbeingAnalyzer, messages: &[&str]) -> Vec<TurnOutcome> {
    let mut history: Vec<Message> = Vec::new();
    let mut outcomes = Vec::new();

    for message in messages {
        let outcome = analyzer.respond(message, &history, &mut FixedChoice(0));
        history.push(Message::user(*message));
        history.push(outcome.reply_message());
        outcomes.push(outcome);
    }

    outcomes
}

fn write_lexicon(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write lexicon");
    file
}

const CUSTOM_LEXICON: &str = r#"{
    "critical": ["Want To Disappear"],
    "high": ["spiralling"],
    "moderate": ["uneasy"],
    "low": ["alright"],
    "positive_words": ["hopeful"],
    "negative_words": ["gloomy"]
}"#;

// ============================================================================
// Conversation Flow
// ============================================================================

#[test]
fn test_anxiety_conversation_escalates_technique() {
    let analyzer = WellbeingAnalyzer::new();

    let outcomes = run_conversation(
        &analyzer,
        &["hi", "I've been so anxious lately", "still anxious about it"],
    );

    let kinds: Vec<ResponseKind> = outcomes.iter().map(|o| o.reply_kind).collect();
    assert_eq!(
        kinds,
        vec![
            ResponseKind::Greeting,
            ResponseKind::AnxietyFirstPass,
            ResponseKind::AnxietySecondPass
        ]
    );
    assert_eq!(outcomes[0].reply, templates::GREETINGS[0]);
    assert_eq!(outcomes[1].assessment.level, StressLevel::High);
}

#[test]
fn test_stress_conversation_moves_to_second_pass() {
    let analyzer = WellbeingAnalyzer::new();

    let outcomes = run_conversation(&analyzer, &["work is a burden", "still too much going on"]);

    assert_eq!(outcomes[0].reply_kind, ResponseKind::StressFirstPass);
    assert_eq!(outcomes[1].reply_kind, ResponseKind::StressSecondPass);
}

#[test]
fn test_crisis_mid_conversation() {
    let analyzer = WellbeingAnalyzer::new();

    let outcomes = run_conversation(&analyzer, &["hello", "honestly there's no point anymore"]);

    assert_eq!(outcomes[1].assessment.level, StressLevel::Critical);
    assert_eq!(outcomes[1].reply_kind, ResponseKind::Crisis);
    assert!(outcomes[1].reply.contains("988"));
}

#[test]
fn test_opening_up_after_long_messages() {
    let analyzer = WellbeingAnalyzer::new();
    let long_story = "my week has been a blur of group chats, part-time shifts at the cafe and \
                      commuting back and forth across town every single evening";

    let outcomes = run_conversation(&analyzer, &[long_story, "hmm"]);

    assert_eq!(outcomes[1].reply_kind, ResponseKind::ReflectiveOpeningUp);
}

#[test]
fn test_turn_outcome_json_shape() {
    let analyzer = WellbeingAnalyzer::new();

    let outcome = analyzer.respond("I'm so overwhelmed!!!", &[], &mut FixedChoice(0));
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["assessment"]["level"], "high");
    assert_eq!(json["assessment"]["post_id"], serde_json::Value::Null);
    assert_eq!(
        json["assessment"]["recommended_resources"],
        serde_json::json!(["coping_strategies", "professional_support", "mindfulness"])
    );
    assert_eq!(json["reply_kind"], "stress_first_pass");
    assert!(json["keywords"].is_array());
}

#[test]
fn test_assessment_round_trips_through_json() {
    let analyzer = WellbeingAnalyzer::new();
    let outcome = analyzer.respond("a bit worried", &[], &mut FixedChoice(0));

    let json = serde_json::to_string(&outcome.assessment).unwrap();
    let restored: StressAssessment = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.id, outcome.assessment.id);
    assert_eq!(restored.level, StressLevel::Moderate);
    assert_eq!(restored.created_at, outcome.assessment.created_at);
}

// ============================================================================
// Lexicon Files
// ============================================================================

#[test]
fn test_lexicon_loaded_from_file() {
    let file = write_lexicon(CUSTOM_LEXICON);
    let lexicon = Lexicon::from_json_file(file.path()).unwrap();
    let analyzer = WellbeingAnalyzer::with_lexicon(lexicon);

    let critical = analyzer.respond("I want to disappear", &[], &mut FixedChoice(0));
    assert_eq!(critical.assessment.level, StressLevel::Critical);

    // Built-in phrases no longer apply
    let former = analyzer.respond("I feel hopeless", &[], &mut FixedChoice(0));
    assert_eq!(former.assessment.level, StressLevel::Low);

    let mood = analyzer.respond("feeling hopeful", &[], &mut FixedChoice(0));
    assert!(mood.assessment.sentiment_score > 0.0);
}

#[test]
fn test_missing_lexicon_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = Lexicon::from_json_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_malformed_lexicon_file_is_validation_error() {
    let file = write_lexicon("{ \"critical\": [\"x\"] ");
    let err = Lexicon::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

// ============================================================================
// Dashboard Summary
// ============================================================================

#[test]
fn test_summary_over_conversation() {
    let analyzer = WellbeingAnalyzer::new();

    let outcomes = run_conversation(
        &analyzer,
        &[
            "things are fine",
            "a bit worried about money",
            "completely overwhelmed",
            "I feel hopeless",
        ],
    );
    let assessments: Vec<StressAssessment> =
        outcomes.into_iter().map(|o| o.assessment).collect();

    let summary = StressSummary::from_assessments(&assessments, 3);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.counts.critical, 1);
    assert_eq!(summary.elevated, 2);
    assert!((summary.average_level - 2.5).abs() < 1e-6);
    assert!(summary.top_indicators.len() <= 3);
}
