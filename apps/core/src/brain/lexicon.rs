//! Severity tiers and sentiment word lists.
//!
//! Tier precedence (critical, high, moderate, low) is carried by the order of
//! [`Lexicon::tiers`], never by a chain of conditionals. Only the phrase lists can be
//! replaced from a file; levels, base confidences, indicators and resource tags are fixed.

use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use validator::Validate;

use super::stress::{ResourceTag, StressLevel};
use crate::error::AppError;

const CRITICAL_TRIGGERS: &[&str] = &[
    "suicidal",
    "kill myself",
    "end it all",
    "no point",
    "give up",
    "can't go on",
    "worthless",
    "hopeless",
];

const HIGH_TRIGGERS: &[&str] = &[
    "overwhelmed",
    "anxious",
    "panic",
    "breakdown",
    "can't cope",
    "terrified",
    "exhausted",
    "failing",
    "drowning",
    "crushed",
];

const MODERATE_TRIGGERS: &[&str] = &[
    "stressed",
    "worried",
    "nervous",
    "pressure",
    "difficult",
    "struggling",
    "tired",
    "concerned",
    "uncertain",
    "frustrated",
];

const LOW_TRIGGERS: &[&str] = &[
    "okay",
    "manageable",
    "fine",
    "handling",
    "coping",
    "getting through",
    "trying",
    "working on",
];

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "excited",
    "grateful",
    "proud",
    "accomplished",
    "relieved",
    "better",
    "improving",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "frustrated",
    "disappointed",
    "afraid",
    "lonely",
    "isolated",
];

const CRITICAL_RESOURCES: &[ResourceTag] =
    &[ResourceTag::ProfessionalSupport, ResourceTag::CrisisHotlines];
const HIGH_RESOURCES: &[ResourceTag] = &[
    ResourceTag::CopingStrategies,
    ResourceTag::ProfessionalSupport,
    ResourceTag::Mindfulness,
];
const MODERATE_RESOURCES: &[ResourceTag] = &[
    ResourceTag::CopingStrategies,
    ResourceTag::Mindfulness,
    ResourceTag::AcademicStress,
];
const LOW_RESOURCES: &[ResourceTag] = &[ResourceTag::Mindfulness, ResourceTag::SelfCare];

/// Built once, shared read-only by every classifier that doesn't bring its own lexicon.
pub(crate) static DEFAULT_LEXICON: LazyLock<Arc<Lexicon>> =
    LazyLock::new(|| Arc::new(Lexicon::default()));

/// One severity tier: what triggers it and what it contributes to an assessment.
#[derive(Debug, Clone)]
pub struct SeverityTier {
    pub level: StressLevel,
    pub base_confidence: f32,
    /// Base indicator recorded when this tier wins
    pub indicator: &'static str,
    /// Lower-cased trigger phrases, matched as substrings
    pub triggers: Vec<String>,
    pub resource_tags: &'static [ResourceTag],
}

impl SeverityTier {
    fn new(level: StressLevel, triggers: Vec<String>) -> Self {
        let (base_confidence, indicator, resource_tags) = match level {
            StressLevel::Critical => (0.95, "Crisis-level language detected", CRITICAL_RESOURCES),
            StressLevel::High => (0.75, "High stress indicators", HIGH_RESOURCES),
            StressLevel::Moderate => (0.50, "Moderate stress signals", MODERATE_RESOURCES),
            StressLevel::Low => (0.25, "Low stress indicators", LOW_RESOURCES),
        };

        Self {
            level,
            base_confidence,
            indicator,
            triggers,
            resource_tags,
        }
    }

    /// First trigger phrase contained in `lower_text`, if any.
    pub fn matched_trigger(&self, lower_text: &str) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| lower_text.contains(t.as_str()))
            .map(String::as_str)
    }
}

/// Complete static configuration consumed by the classifier.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Always four tiers, highest severity first; the last one is the low tier
    tiers: Vec<SeverityTier>,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}

/// On-disk shape of an externalized lexicon.
#[derive(Debug, Deserialize, Validate)]
struct LexiconFile {
    #[validate(length(min = 1))]
    critical: Vec<String>,
    #[validate(length(min = 1))]
    high: Vec<String>,
    #[validate(length(min = 1))]
    moderate: Vec<String>,
    #[validate(length(min = 1))]
    low: Vec<String>,
    #[validate(length(min = 1))]
    positive_words: Vec<String>,
    #[validate(length(min = 1))]
    negative_words: Vec<String>,
}

impl LexiconFile {
    fn normalize_phrases(&mut self) {
        for list in [
            &mut self.critical,
            &mut self.high,
            &mut self.moderate,
            &mut self.low,
            &mut self.positive_words,
            &mut self.negative_words,
        ] {
            *list = normalize(std::mem::take(list));
        }
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::from_lists(
            to_owned_list(CRITICAL_TRIGGERS),
            to_owned_list(HIGH_TRIGGERS),
            to_owned_list(MODERATE_TRIGGERS),
            to_owned_list(LOW_TRIGGERS),
            to_owned_list(POSITIVE_WORDS),
            to_owned_list(NEGATIVE_WORDS),
        )
    }
}

impl Lexicon {
    fn from_lists(
        critical: Vec<String>,
        high: Vec<String>,
        moderate: Vec<String>,
        low: Vec<String>,
        positive_words: Vec<String>,
        negative_words: Vec<String>,
    ) -> Self {
        let tiers = vec![
            SeverityTier::new(StressLevel::Critical, normalize(critical)),
            SeverityTier::new(StressLevel::High, normalize(high)),
            SeverityTier::new(StressLevel::Moderate, normalize(moderate)),
            SeverityTier::new(StressLevel::Low, normalize(low)),
        ];

        Self {
            tiers,
            positive_words: normalize(positive_words),
            negative_words: normalize(negative_words),
        }
    }

    /// Parses a lexicon from JSON with keys `critical`, `high`, `moderate`, `low`,
    /// `positive_words` and `negative_words`. Every list must be non-empty.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let mut file: LexiconFile = serde_json::from_str(json)?;
        // Blank phrases are dropped first so a list of blanks counts as empty
        file.normalize_phrases();
        file.validate()?;

        Ok(Self::from_lists(
            file.critical,
            file.high,
            file.moderate,
            file.low,
            file.positive_words,
            file.negative_words,
        ))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Tiers in precedence order.
    pub fn tiers(&self) -> &[SeverityTier] {
        &self.tiers
    }

    pub fn tier(&self, level: StressLevel) -> &SeverityTier {
        // from_lists builds exactly one tier per level, so the index lookup is total
        &self.tiers[Self::precedence_index(level)]
    }

    fn precedence_index(level: StressLevel) -> usize {
        match level {
            StressLevel::Critical => 0,
            StressLevel::High => 1,
            StressLevel::Moderate => 2,
            StressLevel::Low => 3,
        }
    }

    /// First tier (in precedence order) with a trigger contained in `lower_text`,
    /// falling back to the low tier. Returns the tier and the phrase that matched.
    pub fn resolve_tier(&self, lower_text: &str) -> (&SeverityTier, Option<&str>) {
        self.tiers
            .iter()
            .find_map(|tier| tier.matched_trigger(lower_text).map(|t| (tier, Some(t))))
            .unwrap_or_else(|| (self.tier(StressLevel::Low), None))
    }
}
