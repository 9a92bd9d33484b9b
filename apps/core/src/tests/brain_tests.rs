//! Brain Module Tests
//!
//! Tests for stress classification, topic routing, dialogue selection
//! and the WellbeingAnalyzer orchestrator.

use crate::brain::{
    templates, DialogueSelector, FixedChoice, Message, ResourceTag, ResponseKind, ResponseRequest,
    StressClassifier, StressLevel, Topic, TopicDetector, WellbeingAnalyzer, TOPIC_PRECEDENCE,
};

#[cfg(test)]
mod stress_classifier_tests {
    use super::*;

    #[test]
    fn test_critical_phrases() {
        let classifier = StressClassifier::new();

        let messages = vec![
            "I feel completely hopeless",
            "what's the point, I want to give up",
            "I'm worthless",
            "I just want to end it all",
            "I CAN'T GO ON",
        ];

        for message in messages {
            let result = classifier.classify(message);
            assert_eq!(
                result.level,
                StressLevel::Critical,
                "Expected Critical for '{}'",
                message
            );
            assert!(
                result.confidence_score >= 0.95,
                "Expected confidence >= 0.95 for '{}'",
                message
            );
            assert!(result
                .recommended_resources
                .contains(&ResourceTag::CrisisHotlines));
            assert_eq!(result.indicators[0], "Crisis-level language detected");
        }
    }

    #[test]
    fn test_low_tier_only_messages() {
        let classifier = StressClassifier::new();

        let messages = vec![
            "things are okay",
            "it's manageable",
            "just trying my best",
            "I'm working on it",
            "",
        ];

        for message in messages {
            let result = classifier.classify(message);
            assert_eq!(result.level, StressLevel::Low, "Expected Low for '{}'", message);
            assert_eq!(
                result.recommended_resources,
                vec![ResourceTag::Mindfulness, ResourceTag::SelfCare]
            );
        }
    }

    #[test]
    fn test_confidence_clamped_with_stacked_boosts() {
        let classifier = StressClassifier::new();

        let result = classifier.classify("HOPELESS!!! WHY??? WHY ME");

        assert_eq!(result.level, StressLevel::Critical);
        assert_eq!(result.confidence_score, 1.0);
        assert_eq!(result.indicators.len(), 4);
    }

    #[test]
    fn test_sentiment_bounds() {
        let classifier = StressClassifier::new();

        let inputs = vec![
            "",
            "happy excited grateful proud accomplished relieved better improving",
            "sad angry frustrated disappointed afraid lonely isolated",
            "a long neutral message about nothing at all in particular really",
        ];

        for input in inputs {
            let score = classifier.classify(input).sentiment_score;
            assert!(
                (-1.0..=1.0).contains(&score),
                "Sentiment out of range for '{}': {}",
                input,
                score
            );
        }
    }

    #[test]
    fn test_sentiment_direction() {
        let classifier = StressClassifier::new();

        assert!(classifier.classify("I'm happy and proud today").sentiment_score > 0.0);
        let long_positive = "so happy and relieved that the whole week went better than I expected";
        assert!(classifier.classify(long_positive).sentiment_score > 0.0);
        assert!(classifier.classify("I'm sad and lonely today").sentiment_score < 0.0);
        assert_eq!(classifier.classify("just a plain day").sentiment_score, 0.0);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = StressClassifier::new();
        let text = "Stressed about finals?? Really NERVOUS!!!";

        let first = classifier.classify(text);
        let second = classifier.classify(text);

        assert_eq!(first.level, second.level);
        assert_eq!(first.confidence_score, second.confidence_score);
        assert_eq!(first.indicators, second.indicators);
        assert_eq!(first.sentiment_score, second.sentiment_score);
        assert_eq!(first.recommended_resources, second.recommended_resources);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_post_id_is_attached_by_caller() {
        let classifier = StressClassifier::new();

        let result = classifier.classify("worried about grades");
        assert!(result.post_id.is_none());

        let result = result.with_post_id("post-17");
        assert_eq!(result.post_id.as_deref(), Some("post-17"));
    }
}

#[cfg(test)]
mod topic_detector_tests {
    use super::*;

    #[test]
    fn test_detect_follows_precedence() {
        let detector = TopicDetector::new();

        let topics = detector.detect("hey, thanks, my exam stress is too much");

        assert_eq!(
            topics,
            vec![Topic::Greeting, Topic::Stress, Topic::Academics, Topic::Gratitude]
        );
    }

    #[test]
    fn test_precedence_starts_with_greeting() {
        assert_eq!(TOPIC_PRECEDENCE[0], Topic::Greeting);
        assert_eq!(TOPIC_PRECEDENCE.len(), 10);
    }

    #[test]
    fn test_greeting_is_prefix_only() {
        let detector = TopicDetector::new();

        assert_eq!(detector.first_match("good morning"), Some(Topic::Greeting));
        assert!(!detector.matches(Topic::Greeting, "well, hello there"));
    }

    #[test]
    fn test_substring_matches_are_kept() {
        let detector = TopicDetector::new();

        // "test" inside "greatest"
        assert!(detector.matches(Topic::Academics, "the greatest day"));
    }
}

#[cfg(test)]
mod dialogue_selector_tests {
    use super::*;

    fn reply_kind(message: &str, history: &[Message], level: StressLevel) -> ResponseKind {
        let request = ResponseRequest {
            message,
            history,
            level,
            keywords: &[],
        };
        DialogueSelector::new()
            .select(&request, &mut FixedChoice(0))
            .kind
    }

    #[test]
    fn test_greeting_only_early_in_conversation() {
        let short = vec![Message::user("hi"), Message::assistant(templates::GREETINGS[0])];
        assert_eq!(reply_kind("hello", &short, StressLevel::Low), ResponseKind::Greeting);

        let long = vec![
            Message::user("hi"),
            Message::assistant(templates::GREETINGS[0]),
            Message::user("meh"),
        ];
        assert_ne!(reply_kind("hello", &long, StressLevel::Low), ResponseKind::Greeting);
    }

    #[test]
    fn test_anxiety_second_pass() {
        let history = vec![
            Message::user("I'm nervous"),
            Message::assistant(templates::ANXIETY_FIRST_PASS),
        ];
        assert_eq!(
            reply_kind("still so anxious", &history, StressLevel::High),
            ResponseKind::AnxietySecondPass
        );
    }

    #[test]
    fn test_crisis_ignores_history_and_topics() {
        let history = vec![Message::user("hi")];
        assert_eq!(
            reply_kind("thank you, I can't sleep", &history, StressLevel::Critical),
            ResponseKind::Crisis
        );
    }

    #[test]
    fn test_every_reply_is_non_empty() {
        let selector = DialogueSelector::new();
        let messages = vec![
            "", "hi", "anxious", "depressed", "stressed", "insomnia", "nobody cares", "exam",
            "breakup", "thanks", "advice please", "the weather",
        ];

        for message in messages {
            for level in StressLevel::ALL {
                let reply =
                    selector.select_response(message, &[], level, &[], &mut FixedChoice(0));
                assert!(!reply.is_empty(), "Empty reply for '{}' at {}", message, level);
            }
        }
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;
    use crate::brain::stress::INDICATOR_EXCLAMATION;

    #[test]
    fn test_anxious_exam_message() {
        let analyzer = WellbeingAnalyzer::new();

        let outcome = analyzer.respond(
            "I'm so anxious about my exam tomorrow, I can't stop panicking!!!",
            &[],
            &mut FixedChoice(0),
        );

        assert_eq!(outcome.assessment.level, StressLevel::High);
        assert!(outcome
            .assessment
            .indicators
            .contains(&"High stress indicators".to_string()));
        assert!(outcome
            .assessment
            .indicators
            .contains(&INDICATOR_EXCLAMATION.to_string()));
        assert!((outcome.assessment.confidence_score - 0.80).abs() < 1e-6);
        assert_eq!(outcome.reply_kind, ResponseKind::AnxietyFirstPass);
        assert_eq!(outcome.reply, templates::ANXIETY_FIRST_PASS);
    }

    #[test]
    fn test_empty_message() {
        let analyzer = WellbeingAnalyzer::new();

        let outcome = analyzer.respond("", &[], &mut FixedChoice(0));

        assert_eq!(outcome.assessment.level, StressLevel::Low);
        assert_eq!(outcome.assessment.confidence_score, 0.25);
        assert_eq!(outcome.assessment.sentiment_score, 0.0);
        assert_eq!(outcome.assessment.indicators, vec!["Low stress indicators".to_string()]);
        assert!(outcome.keywords.is_empty());
        assert_eq!(outcome.reply_kind, ResponseKind::ReflectiveClarify);
    }

    #[test]
    fn test_shared_analyzer_across_threads() {
        let analyzer = WellbeingAnalyzer::new();
        let messages = ["I feel hopeless", "so stressed", "hello", "can't sleep at all"];

        let levels: Vec<StressLevel> = std::thread::scope(|scope| {
            let handles: Vec<_> = messages
                .iter()
                .map(|message| {
                    let analyzer = &analyzer;
                    scope.spawn(move || {
                        analyzer
                            .respond(message, &[], &mut FixedChoice(0))
                            .assessment
                            .level
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(
            levels,
            vec![
                StressLevel::Critical,
                StressLevel::Moderate,
                StressLevel::Low,
                StressLevel::Low
            ]
        );
    }
}
