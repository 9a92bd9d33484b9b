//! # Brain Module
//!
//! Rule-based text understanding for MindCare.
//! Rates how stressed a post sounds and picks a supportive reply for chat messages.
//!
//! ## Components
//! - `lexicon`: Severity tiers and sentiment word lists (built-in or loaded from JSON)
//! - `stress`: Stress classification, sentiment scoring and resource recommendation
//! - `topics`: Topic detection using regex patterns
//! - `history`: Conversation turns and the techniques already offered
//! - `templates`: Reply library
//! - `dialogue`: Reply selection (crisis override, topic routing, reflective fallback)
//! - `keywords`: TF-IDF keyword extraction
//! - `summary`: Aggregate figures over many assessments
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod dialogue;
pub mod history;
pub mod keywords;
pub mod lexicon;
pub mod stress;
pub mod summary;
pub mod templates;
pub mod topics;

// Re-export main types for convenience
pub use analyzer::{TurnOutcome, WellbeingAnalyzer};
pub use dialogue::{
    DialogueSelector, FixedChoice, RandomSource, Reply, ResponseKind, ResponseRequest,
};
pub use history::{CoveredTopic, CoveredTopics, Message, Role};
pub use keywords::{KeywordExtractor, KeywordResult};
pub use lexicon::{Lexicon, SeverityTier};
pub use stress::{ResourceTag, StressAssessment, StressClassifier, StressLevel};
pub use summary::{IndicatorCount, LevelCounts, StressSummary};
pub use topics::{Topic, TopicDetector, TOPIC_PRECEDENCE};
