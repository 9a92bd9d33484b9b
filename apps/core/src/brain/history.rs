//! Conversation turns and what the conversation has already covered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversation turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// A coping technique that may already have been offered in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveredTopic {
    /// Anxiety discussed, or 4-7-8 breathing already suggested
    AnxietyBreathing,
    /// Stress discussed, or the brain-dump triage already suggested
    StressTriage,
}

impl CoveredTopic {
    const ALL: [CoveredTopic; 2] = [CoveredTopic::AnxietyBreathing, CoveredTopic::StressTriage];

    /// Case-sensitive markers looked up in the raw text of every prior turn
    fn markers(&self) -> &'static [&'static str] {
        match self {
            CoveredTopic::AnxietyBreathing => &["anxiety", "4-7-8"],
            CoveredTopic::StressTriage => &["stressed", "Brain dump"],
        }
    }

    fn is_marked_in(&self, text: &str) -> bool {
        self.markers().iter().any(|m| text.contains(m))
    }
}

/// Set of techniques already covered, folded from the history (both roles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoveredTopics {
    anxiety_breathing: bool,
    stress_triage: bool,
}

impl CoveredTopics {
    pub fn from_history(history: &[Message]) -> Self {
        history.iter().fold(Self::default(), |covered, message| {
            CoveredTopic::ALL
                .into_iter()
                .filter(|topic| topic.is_marked_in(&message.text))
                .fold(covered, Self::with)
        })
    }

    fn with(self, topic: CoveredTopic) -> Self {
        match topic {
            CoveredTopic::AnxietyBreathing => Self {
                anxiety_breathing: true,
                ..self
            },
            CoveredTopic::StressTriage => Self {
                stress_triage: true,
                ..self
            },
        }
    }

    pub fn contains(&self, topic: CoveredTopic) -> bool {
        match topic {
            CoveredTopic::AnxietyBreathing => self.anxiety_breathing,
            CoveredTopic::StressTriage => self.stress_triage,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.anxiety_breathing && !self.stress_triage
    }
}

/// Last `n` user turns, lower-cased and joined with a single space.
pub fn recent_user_text(history: &[Message], n: usize) -> String {
    let user_turns: Vec<&Message> = history.iter().filter(|m| m.role == Role::User).collect();
    let start = user_turns.len().saturating_sub(n);

    user_turns[start..]
        .iter()
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
