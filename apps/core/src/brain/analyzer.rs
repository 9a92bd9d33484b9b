//! Wellbeing Analyzer - Main orchestrator for the brain module.
//!
//! Runs stress classification, keyword extraction and dialogue selection for one user
//! message. Classification and topic routing look at the same text independently; the
//! selector only consumes the classifier's level.

use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument};

use super::dialogue::{DialogueSelector, RandomSource, ResponseKind, ResponseRequest};
use super::history::Message;
use super::keywords::KeywordExtractor;
use super::lexicon::Lexicon;
use super::stress::{StressAssessment, StressClassifier};

/// Keywords handed to the selector (and returned to the caller) per message
const MAX_KEYWORDS: usize = 10;

/// Everything the caller needs to display and persist one exchange
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub assessment: StressAssessment,
    pub keywords: Vec<String>,
    pub reply_kind: ResponseKind,
    pub reply: String,
    pub processing_time_ms: u64,
}

impl TurnOutcome {
    /// The reply as the next assistant turn of the conversation
    pub fn reply_message(&self) -> Message {
        Message::assistant(self.reply.clone())
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Level: {} ({:.0}%), Sentiment: {:.2}, Keywords: {}, Reply: {:?}",
            self.assessment.level,
            self.assessment.confidence_score * 100.0,
            self.assessment.sentiment_score,
            self.keywords.len(),
            self.reply_kind
        )
    }
}

/// Main analyzer combining the classifier and the dialogue selector
#[derive(Default)]
pub struct WellbeingAnalyzer {
    classifier: StressClassifier,
    keyword_extractor: KeywordExtractor,
    selector: DialogueSelector,
}

impl WellbeingAnalyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            classifier: StressClassifier::with_lexicon(lexicon),
            ..Self::default()
        }
    }

    /// Classify a message and choose the reply.
    ///
    /// `history` holds the prior turns only; appending the message and the reply to it
    /// is the caller's job.
    #[instrument(skip_all, fields(history_len = history.len()))]
    pub fn respond<R>(&self, text: &str, history: &[Message], rng: &mut R) -> TurnOutcome
    where
        R: RandomSource + ?Sized,
    {
        let start = Instant::now();

        // 1. Severity
        let assessment = self.classifier.classify(text);

        // 2. Keywords
        let keywords = self
            .keyword_extractor
            .extract_keywords(text, Some(MAX_KEYWORDS));

        // 3. Reply, routed on topic with the severity as override
        let request = ResponseRequest {
            message: text,
            history,
            level: assessment.level,
            keywords: &keywords,
        };
        let reply = self.selector.select(&request, rng);

        let outcome = TurnOutcome {
            assessment,
            keywords,
            reply_kind: reply.kind,
            reply: reply.text.to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!("{}", outcome.summary());

        outcome
    }
}
