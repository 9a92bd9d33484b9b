//! Stress classification.
//!
//! Maps free-form text to a [`StressAssessment`]: a severity tier resolved by ordered
//! substring matching, paralinguistic boosts, a word-list sentiment score and the
//! resource tags attached to the tier. Total over any input; nothing here can fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::lexicon::{Lexicon, DEFAULT_LEXICON};

const EXCLAMATION_THRESHOLD: usize = 2;
const QUESTION_THRESHOLD: usize = 2;
const CAPITALS_THRESHOLD: usize = 5;

const EXCLAMATION_BOOST: f32 = 0.05;
const QUESTION_BOOST: f32 = 0.03;
const CAPITALS_BOOST: f32 = 0.05;

/// Word count below this floor is raised to it, so short texts can't swing sentiment
/// to the extremes
const SENTIMENT_WORD_FLOOR: usize = 10;

pub const INDICATOR_EXCLAMATION: &str = "Heightened emotional expression";
pub const INDICATOR_QUESTIONS: &str = "Seeking answers or clarity";
pub const INDICATOR_CAPITALS: &str = "Emphasis through capitalization";

/// Severity tier of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StressLevel {
    pub const ALL: [StressLevel; 4] = [
        StressLevel::Low,
        StressLevel::Moderate,
        StressLevel::High,
        StressLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::Critical => "critical",
        }
    }

    /// Badge label shown next to a post or message
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low Stress",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High Stress",
            StressLevel::Critical => "Critical",
        }
    }

    /// Ordinal weight used when averaging levels (low = 1 .. critical = 4)
    pub fn weight(&self) -> u8 {
        match self {
            StressLevel::Low => 1,
            StressLevel::Moderate => 2,
            StressLevel::High => 3,
            StressLevel::Critical => 4,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, StressLevel::High | StressLevel::Critical)
    }
}

/// Resource catalog category recommended for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceTag {
    ProfessionalSupport,
    CrisisHotlines,
    CopingStrategies,
    Mindfulness,
    AcademicStress,
    SelfCare,
}

/// Classification of a single user message. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressAssessment {
    pub id: Uuid,
    /// Post or message this assessment annotates; filled in by the caller
    pub post_id: Option<String>,
    pub level: StressLevel,
    /// Base tier confidence plus boosts, clamped to [0, 1]
    pub confidence_score: f32,
    /// Evidence, base tier indicator first
    pub indicators: Vec<String>,
    /// Clamped to [-1, 1]
    pub sentiment_score: f32,
    pub recommended_resources: Vec<ResourceTag>,
    pub created_at: DateTime<Utc>,
}

impl StressAssessment {
    /// Associates the assessment with the caller's post or message id.
    pub fn with_post_id(self, post_id: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            ..self
        }
    }
}

/// Paralinguistic signals read from the raw (not lower-cased) text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Emphasis {
    exclamations: bool,
    questions: bool,
    capitals: bool,
}

impl Emphasis {
    fn detect(text: &str) -> Self {
        let exclamation_count = text.matches('!').count();
        let question_count = text.matches('?').count();
        let capital_count = text.chars().filter(|c| c.is_ascii_uppercase()).count();

        Self {
            exclamations: exclamation_count > EXCLAMATION_THRESHOLD,
            questions: question_count > QUESTION_THRESHOLD,
            capitals: text != text.to_lowercase() && capital_count > CAPITALS_THRESHOLD,
        }
    }

    fn signals(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            (self.exclamations, INDICATOR_EXCLAMATION, EXCLAMATION_BOOST),
            (self.questions, INDICATOR_QUESTIONS, QUESTION_BOOST),
            (self.capitals, INDICATOR_CAPITALS, CAPITALS_BOOST),
        ]
        .into_iter()
        .filter(|(present, _, _)| *present)
        .map(|(_, indicator, boost)| (indicator, boost))
    }
}

/// Rule-based stress classifier
pub struct StressClassifier {
    lexicon: Arc<Lexicon>,
}

impl Default for StressClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl StressClassifier {
    /// Create a classifier backed by the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Arc::clone(&*DEFAULT_LEXICON),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Classify a message. Deterministic apart from `id` and `created_at`.
    pub fn classify(&self, text: &str) -> StressAssessment {
        let lower = text.to_lowercase();

        let (tier, trigger) = self.lexicon.resolve_tier(&lower);
        let mut confidence = tier.base_confidence;
        let mut indicators = vec![tier.indicator.to_string()];

        for (indicator, boost) in Emphasis::detect(text).signals() {
            indicators.push(indicator.to_string());
            confidence += boost;
        }

        let sentiment = self.sentiment(&lower);

        debug!(
            level = %tier.level,
            trigger = trigger.unwrap_or("-"),
            confidence,
            sentiment,
            "Classified message"
        );

        StressAssessment {
            id: Uuid::new_v4(),
            post_id: None,
            level: tier.level,
            confidence_score: confidence.clamp(0.0, 1.0),
            indicators,
            sentiment_score: sentiment,
            recommended_resources: tier.resource_tags.to_vec(),
            created_at: Utc::now(),
        }
    }

    /// Word-list sentiment in [-1, 1]. Each list word counts once if it appears anywhere.
    pub fn sentiment(&self, lower_text: &str) -> f32 {
        let count_present = |words: &[String]| {
            words
                .iter()
                .filter(|w| lower_text.contains(w.as_str()))
                .count() as f32
        };

        let positive = count_present(self.lexicon.positive_words.as_slice());
        let negative = count_present(self.lexicon.negative_words.as_slice());
        let word_count = lower_text.split_whitespace().count().max(SENTIMENT_WORD_FLOOR) as f32;

        ((positive - negative) / word_count * 2.0).clamp(-1.0, 1.0)
    }
}
