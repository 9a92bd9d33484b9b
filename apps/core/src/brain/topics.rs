//! Topic detection using regex patterns.
//!
//! Decides what a message is *about* (anxiety, sleep, exams...), independently of how
//! severe it is. Patterns run against the lower-cased message and are plain substring
//! alternations, so word fragments match too ("test" inside "greatest").

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Conversation topic used for response routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Anxiety,
    Depression,
    Stress,
    Sleep,
    Loneliness,
    Academics,
    Relationships,
    Gratitude,
    HelpRequest,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Anxiety => "anxiety",
            Topic::Depression => "depression",
            Topic::Stress => "stress",
            Topic::Sleep => "sleep",
            Topic::Loneliness => "loneliness",
            Topic::Academics => "academics",
            Topic::Relationships => "relationships",
            Topic::Gratitude => "gratitude",
            Topic::HelpRequest => "help_request",
        }
    }
}

/// Routing order: when a message matches several topics, the earliest one wins.
pub const TOPIC_PRECEDENCE: [Topic; 10] = [
    Topic::Greeting,
    Topic::Anxiety,
    Topic::Depression,
    Topic::Stress,
    Topic::Sleep,
    Topic::Loneliness,
    Topic::Academics,
    Topic::Relationships,
    Topic::Gratitude,
    Topic::HelpRequest,
];

/// Pattern set for one topic
struct TopicPattern {
    topic: Topic,
    pattern: Regex,
}

// NOTE: expect() is acceptable here: the patterns are literals, a bad one is a build defect
static TOPIC_PATTERNS: LazyLock<Vec<TopicPattern>> = LazyLock::new(|| {
    TOPIC_PRECEDENCE
        .iter()
        .map(|&topic| TopicPattern {
            topic,
            pattern: Regex::new(pattern_for(topic)).expect("Invalid regex: topic pattern"),
        })
        .collect()
});

fn pattern_for(topic: Topic) -> &'static str {
    match topic {
        // Greetings only count at the very start of the message
        Topic::Greeting => r"^(hi|hello|hey|good morning|good afternoon|good evening)",
        Topic::Anxiety => r"anxious|anxiety|panic|worried|nervous|fear|scared",
        Topic::Depression => r"depress|sad|hopeless|empty|numb|worthless|unmotivated",
        Topic::Stress => r"stress|overwhelm|pressure|burden|too much|can't handle",
        Topic::Sleep => r"sleep|insomnia|tired|exhausted|can't sleep|nightmares",
        Topic::Loneliness => r"lonely|alone|isolated|no friends|nobody",
        Topic::Academics => r"exam|test|grade|study|assignment|homework|class|professor|deadline",
        Topic::Relationships => r"relationship|friend|family|breakup|argument|fight|conflict",
        Topic::Gratitude => r"thank|helpful|appreciate|grateful",
        Topic::HelpRequest => r"help me|what should|what can|advice|suggest",
    }
}

/// Topic detector over the fixed pattern table
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicDetector;

impl TopicDetector {
    pub fn new() -> Self {
        Self
    }

    /// Whether `lower_message` matches the given topic
    pub fn matches(&self, topic: Topic, lower_message: &str) -> bool {
        TOPIC_PATTERNS
            .iter()
            .find(|p| p.topic == topic)
            .is_some_and(|p| p.pattern.is_match(lower_message))
    }

    /// Every matching topic, in precedence order
    pub fn detect(&self, lower_message: &str) -> Vec<Topic> {
        TOPIC_PATTERNS
            .iter()
            .filter(|p| p.pattern.is_match(lower_message))
            .map(|p| p.topic)
            .collect()
    }

    /// Highest-precedence matching topic
    pub fn first_match(&self, lower_message: &str) -> Option<Topic> {
        TOPIC_PATTERNS
            .iter()
            .find(|p| p.pattern.is_match(lower_message))
            .map(|p| p.topic)
    }
}
