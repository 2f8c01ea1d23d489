//! Readability scoring
//!
//! A fixed, ordered battery of readability metrics applied to a text blob.
//! Each metric is evaluated exactly once per [`measure`] call. The consensus
//! metric (`text_standard`) produces text that is reduced to the mean of its
//! two grades before it lands in the result.
//!
//! # Examples
//!
//! ```
//! use versemeter::readability::{measure, Metric};
//!
//! let result = measure("We want to hear from you and know how you prosper.").unwrap();
//! assert_eq!(result.len(), Metric::ALL.len());
//! assert!(result.get(Metric::FleschReadingEase) > 50.0);
//! ```

mod consensus;
mod familiar;
mod formulas;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use consensus::{GradeParseError, parse_consensus_grade};
pub use formulas::TextStats;

/// A named readability formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Flesch reading ease (higher is easier)
    FleschReadingEase,
    /// SMOG grade
    SmogIndex,
    /// Flesch-Kincaid grade level
    FleschKincaidGrade,
    /// Coleman-Liau index
    ColemanLiauIndex,
    /// Automated readability index
    AutomatedReadabilityIndex,
    /// Dale-Chall score
    DaleChallReadabilityScore,
    /// Linsear Write grade
    LinsearWriteFormula,
    /// Gunning fog index
    GunningFog,
    /// Consensus grade across the other formulas
    TextStandard,
}

/// Raw output of a metric before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawScore {
    /// A plain number
    Number(f64),
    /// A consensus grade range, e.g. "7th and 8th grade"
    Grade(String),
}

impl Metric {
    /// Every metric, in report order
    pub const ALL: [Self; 9] = [
        Self::FleschReadingEase,
        Self::SmogIndex,
        Self::FleschKincaidGrade,
        Self::ColemanLiauIndex,
        Self::AutomatedReadabilityIndex,
        Self::DaleChallReadabilityScore,
        Self::LinsearWriteFormula,
        Self::GunningFog,
        Self::TextStandard,
    ];

    /// Machine name, as used in config files and JSON
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FleschReadingEase => "flesch_reading_ease",
            Self::SmogIndex => "smog_index",
            Self::FleschKincaidGrade => "flesch_kincaid_grade",
            Self::ColemanLiauIndex => "coleman_liau_index",
            Self::AutomatedReadabilityIndex => "automated_readability_index",
            Self::DaleChallReadabilityScore => "dale_chall_readability_score",
            Self::LinsearWriteFormula => "linsear_write_formula",
            Self::GunningFog => "gunning_fog",
            Self::TextStandard => "text_standard",
        }
    }

    /// Human title for panels
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::SmogIndex => "SMOG",
            Self::FleschKincaidGrade => "Flesch–Kincaid",
            Self::ColemanLiauIndex => "Coleman–Liau",
            Self::AutomatedReadabilityIndex => "Automated Readability Index",
            Self::DaleChallReadabilityScore => "Dale–Chall",
            Self::LinsearWriteFormula => "Linsear Write",
            Self::GunningFog => "Gunning fog",
            Self::TextStandard => "Consensus grade",
        }
    }

    /// What the value on the axis means
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::FleschReadingEase | Self::DaleChallReadabilityScore => "score",
            Self::GunningFog => "grade level to comprehend on first reading",
            _ => "grade level to comprehend",
        }
    }

    /// Evaluate the underlying formula
    #[must_use]
    pub fn evaluate(self, stats: &TextStats, content: &str) -> RawScore {
        match self {
            Self::FleschReadingEase => RawScore::Number(formulas::flesch_reading_ease(stats)),
            Self::SmogIndex => RawScore::Number(formulas::smog_index(stats)),
            Self::FleschKincaidGrade => RawScore::Number(formulas::flesch_kincaid_grade(stats)),
            Self::ColemanLiauIndex => RawScore::Number(formulas::coleman_liau_index(stats)),
            Self::AutomatedReadabilityIndex => {
                RawScore::Number(formulas::automated_readability_index(stats))
            },
            Self::DaleChallReadabilityScore => {
                RawScore::Number(formulas::dale_chall_readability_score(stats))
            },
            Self::LinsearWriteFormula => RawScore::Number(formulas::linsear_write_formula(content)),
            Self::GunningFog => RawScore::Number(formulas::gunning_fog(stats)),
            Self::TextStandard => RawScore::Grade(consensus::consensus_grade(stats, content)),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|m| m.name() == s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|m| m.name()).collect();
            format!("Unknown metric: {s}. Use one of: {}", known.join(", "))
        })
    }
}

impl RawScore {
    /// Reduce to a single number
    pub fn normalize(self) -> Result<f64, GradeParseError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Grade(text) => parse_consensus_grade(&text),
        }
    }
}

/// Metric name to score, in metric order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadabilityResult {
    scores: BTreeMap<Metric, f64>,
}

impl ReadabilityResult {
    /// Score for one metric (0.0 if the metric was not measured)
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        self.scores.get(&metric).copied().unwrap_or_default()
    }

    /// Iterate scores in metric order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.scores.iter().map(|(m, v)| (*m, *v))
    }

    /// Number of metrics measured
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether nothing was measured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(Metric, f64)> for ReadabilityResult {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Score a text with every metric
pub fn measure(content: &str) -> Result<ReadabilityResult, GradeParseError> {
    let stats = TextStats::from_text(content);
    Metric::ALL
        .into_iter()
        .map(|metric| metric.evaluate(&stats, content).normalize().map(|score| (metric, score)))
        .collect()
}
