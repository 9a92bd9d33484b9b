//! Dialogue selection.
//!
//! Picks the reply for a user message from the template library. Routing is ordered and
//! first match wins:
//! 1. a critical stress level always gets the crisis response;
//! 2. otherwise the message's topics are tried in
//!    [`TOPIC_PRECEDENCE`](super::topics::TOPIC_PRECEDENCE) order, greetings only being
//!    admitted at the start of a conversation;
//! 3. otherwise a reflective fallback, deeper when the user has been opening up.
//!
//! Severity (the caller-supplied level) and topic (detected here) are independent axes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::history::{recent_user_text, CoveredTopic, CoveredTopics, Message};
use super::stress::StressLevel;
use super::templates;
use super::topics::{Topic, TopicDetector};

/// Greetings are only answered as greetings while the history is this short
pub const GREETING_HISTORY_LIMIT: usize = 2;

/// Number of recent user turns inspected by the reflective fallback
pub const REFLECTIVE_WINDOW: usize = 3;

/// Above this many characters across the recent user turns, the user is opening up
pub const OPENING_UP_THRESHOLD: usize = 100;

/// Words that send a stress message to the more specific academic template
const ACADEMIC_DEADLINE_WORDS: [&str; 2] = ["exam", "deadline"];

/// Source of the one non-deterministic choice (which greeting to use).
pub trait RandomSource {
    /// Index in `0..len`; `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: rand::RngCore> RandomSource for R {
    fn choose_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range). Pins greeting selection in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChoice(pub usize);

impl RandomSource for FixedChoice {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Which generator (and variant) produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Crisis,
    Greeting,
    AnxietyFirstPass,
    AnxietySecondPass,
    Depression,
    StressFirstPass,
    StressSecondPass,
    Sleep,
    Loneliness,
    Academics,
    Relationships,
    Gratitude,
    Help,
    ReflectiveOpeningUp,
    ReflectiveClarify,
}

/// Everything the selector reads for one message
#[derive(Debug, Clone, Copy)]
pub struct ResponseRequest<'a> {
    pub message: &'a str,
    /// Prior turns, oldest first, not including `message`
    pub history: &'a [Message],
    pub level: StressLevel,
    pub keywords: &'a [String],
}

/// Chosen reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ResponseKind,
    pub text: &'static str,
}

impl Reply {
    fn new(kind: ResponseKind, text: &'static str) -> Self {
        Self { kind, text }
    }
}

/// Rule-based dialogue selector
#[derive(Debug, Clone, Default)]
pub struct DialogueSelector {
    detector: TopicDetector,
}

impl DialogueSelector {
    pub fn new() -> Self {
        Self {
            detector: TopicDetector::new(),
        }
    }

    /// Reply text for a message. Never empty.
    pub fn select_response<R>(
        &self,
        message: &str,
        history: &[Message],
        level: StressLevel,
        keywords: &[String],
        rng: &mut R,
    ) -> String
    where
        R: RandomSource + ?Sized,
    {
        let request = ResponseRequest {
            message,
            history,
            level,
            keywords,
        };
        self.select(&request, rng).text.to_string()
    }

    /// Routes a request to a generator and returns its reply.
    pub fn select<R>(&self, request: &ResponseRequest<'_>, rng: &mut R) -> Reply
    where
        R: RandomSource + ?Sized,
    {
        if request.level == StressLevel::Critical {
            warn!(
                history_len = request.history.len(),
                "Crisis-level message, routing to crisis response"
            );
            return Reply::new(ResponseKind::Crisis, templates::CRISIS);
        }

        let lower = request.message.to_lowercase();
        let routed = self
            .detector
            .detect(&lower)
            .into_iter()
            .find(|topic| Self::admits(*topic, request));

        let reply = match routed {
            Some(topic) => self.generate(topic, &lower, request, rng),
            None => Self::reflective(request.history),
        };

        debug!(
            topic = routed.map(|t| t.label()).unwrap_or("none"),
            kind = ?reply.kind,
            level = %request.level,
            keywords = request.keywords.len(),
            "Selected response"
        );

        reply
    }

    /// Extra routing conditions beyond the topic pattern itself
    fn admits(topic: Topic, request: &ResponseRequest<'_>) -> bool {
        match topic {
            Topic::Greeting => request.history.len() <= GREETING_HISTORY_LIMIT,
            _ => true,
        }
    }

    fn generate<R>(
        &self,
        topic: Topic,
        lower: &str,
        request: &ResponseRequest<'_>,
        rng: &mut R,
    ) -> Reply
    where
        R: RandomSource + ?Sized,
    {
        match topic {
            Topic::Greeting => {
                let count = templates::GREETINGS.len();
                let index = rng.choose_index(count) % count;
                Reply::new(ResponseKind::Greeting, templates::GREETINGS[index])
            }
            Topic::Anxiety => {
                if CoveredTopics::from_history(request.history)
                    .contains(CoveredTopic::AnxietyBreathing)
                {
                    Reply::new(ResponseKind::AnxietySecondPass, templates::ANXIETY_SECOND_PASS)
                } else {
                    Reply::new(ResponseKind::AnxietyFirstPass, templates::ANXIETY_FIRST_PASS)
                }
            }
            Topic::Depression => Reply::new(ResponseKind::Depression, templates::DEPRESSION),
            Topic::Stress => {
                if Self::mentions_deadline(lower, request.keywords) {
                    Reply::new(ResponseKind::Academics, templates::ACADEMICS)
                } else if CoveredTopics::from_history(request.history)
                    .contains(CoveredTopic::StressTriage)
                {
                    Reply::new(ResponseKind::StressSecondPass, templates::STRESS_SECOND_PASS)
                } else {
                    Reply::new(ResponseKind::StressFirstPass, templates::STRESS_FIRST_PASS)
                }
            }
            Topic::Sleep => Reply::new(ResponseKind::Sleep, templates::SLEEP),
            Topic::Loneliness => Reply::new(ResponseKind::Loneliness, templates::LONELINESS),
            Topic::Academics => Reply::new(ResponseKind::Academics, templates::ACADEMICS),
            Topic::Relationships => {
                Reply::new(ResponseKind::Relationships, templates::RELATIONSHIPS)
            }
            Topic::Gratitude => Reply::new(ResponseKind::Gratitude, templates::GRATITUDE),
            Topic::HelpRequest => Reply::new(ResponseKind::Help, templates::HELP),
        }
    }

    /// Exam or deadline language, in the message itself or among the caller's keywords
    fn mentions_deadline(lower: &str, keywords: &[String]) -> bool {
        ACADEMIC_DEADLINE_WORDS.iter().any(|word| {
            lower.contains(word) || keywords.iter().any(|k| k.eq_ignore_ascii_case(word))
        })
    }

    fn reflective(history: &[Message]) -> Reply {
        let recent = recent_user_text(history, REFLECTIVE_WINDOW);

        if recent.chars().count() > OPENING_UP_THRESHOLD {
            Reply::new(ResponseKind::ReflectiveOpeningUp, templates::REFLECTIVE_OPENING_UP)
        } else {
            Reply::new(ResponseKind::ReflectiveClarify, templates::REFLECTIVE_CLARIFY)
        }
    }
}
