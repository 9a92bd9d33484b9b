//! Aggregate view over many assessments (dashboard figures).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::stress::{StressAssessment, StressLevel};

/// Per-level counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
    pub critical: usize,
}

impl LevelCounts {
    fn increment(&mut self, level: StressLevel) {
        match level {
            StressLevel::Low => self.low += 1,
            StressLevel::Moderate => self.moderate += 1,
            StressLevel::High => self.high += 1,
            StressLevel::Critical => self.critical += 1,
        }
    }

    pub fn get(&self, level: StressLevel) -> usize {
        match level {
            StressLevel::Low => self.low,
            StressLevel::Moderate => self.moderate,
            StressLevel::High => self.high,
            StressLevel::Critical => self.critical,
        }
    }
}

/// How often an indicator appeared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorCount {
    pub indicator: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressSummary {
    pub total: usize,
    pub counts: LevelCounts,
    /// Mean of level weights (low = 1 .. critical = 4); 0 when there is nothing to average
    pub average_level: f32,
    /// High plus critical
    pub elevated: usize,
    /// Most frequent indicators, count descending then alphabetical
    pub top_indicators: Vec<IndicatorCount>,
}

impl StressSummary {
    pub fn from_assessments<'a, I>(assessments: I, top_n: usize) -> Self
    where
        I: IntoIterator<Item = &'a StressAssessment>,
    {
        let mut total = 0;
        let mut counts = LevelCounts::default();
        let mut weight_sum: u64 = 0;
        let mut indicator_counts: HashMap<&str, usize> = HashMap::new();

        for assessment in assessments {
            total += 1;
            counts.increment(assessment.level);
            weight_sum += u64::from(assessment.level.weight());
            for indicator in &assessment.indicators {
                *indicator_counts.entry(indicator.as_str()).or_insert(0) += 1;
            }
        }

        let average_level = if total > 0 {
            weight_sum as f32 / total as f32
        } else {
            0.0
        };

        let mut top_indicators: Vec<IndicatorCount> = indicator_counts
            .into_iter()
            .map(|(indicator, count)| IndicatorCount {
                indicator: indicator.to_string(),
                count,
            })
            .collect();
        top_indicators.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.indicator.cmp(&b.indicator))
        });
        top_indicators.truncate(top_n);

        Self {
            total,
            counts,
            average_level,
            elevated: counts.high + counts.critical,
            top_indicators,
        }
    }
}
