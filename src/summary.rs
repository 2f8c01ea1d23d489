//! Length filter and per-metric summaries
//!
//! Very short chapters give unstable formula outputs, so chapters whose text
//! is shorter than a minimum length are left out of the per-metric series.
//! Series keep chapter order; they are never sorted in place.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::models::ChapterRecord;
use crate::readability::{Metric, ReadabilityResult};

/// Default minimum chapter length, in characters
pub const MIN_CHAR_LENGTH: usize = 50;

/// Chapter scores per metric, for chapters that passed the length filter
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Metric to chapter scores, in chapter order
    pub series: BTreeMap<Metric, Vec<f64>>,
    /// Keys of chapters that contributed
    pub retained: Vec<String>,
    /// Keys of chapters dropped for being too short
    pub dropped: Vec<String>,
}

impl Summary {
    /// Filter scored chapters by length and collect their scores.
    ///
    /// Chapters that were never scored contribute nothing.
    #[must_use]
    pub fn build(records: &[ChapterRecord], min_char_length: usize) -> Self {
        let mut summary = Self::default();

        for record in records {
            if record.text_length < min_char_length {
                info!("chapter shorter than {min_char_length} characters; dropping {}", record.key);
                summary.dropped.push(record.key.clone());
                continue;
            }
            let Some(scores) = &record.readability else {
                continue;
            };
            for (metric, score) in scores.iter() {
                summary.series.entry(metric).or_default().push(score);
            }
            summary.retained.push(record.key.clone());
        }

        summary
    }

    /// Chapter scores for one metric
    #[must_use]
    pub fn scores(&self, metric: Metric) -> &[f64] {
        self.series.get(&metric).map(Vec::as_slice).unwrap_or_default()
    }

    /// For each metric, the share of chapters scoring at or below a reference
    #[must_use]
    pub fn percentages_at_or_below(&self, reference: &ReadabilityResult) -> BTreeMap<Metric, f64> {
        self.series
            .iter()
            .map(|(metric, scores)| (*metric, percent_at_or_below(scores, reference.get(*metric))))
            .collect()
    }
}

/// Percentage of scores less than or equal to a reference score.
///
/// Scores are sorted ascending and counted up to the first one strictly
/// greater than the reference. An empty series yields 0.
///
/// ```
/// use versemeter::summary::percent_at_or_below;
///
/// assert_eq!(percent_at_or_below(&[1.0, 2.0, 3.0, 10.0], 3.0), 75.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_at_or_below(scores: &[f64], reference: f64) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut at_or_below = 0usize;
    for value in sorted {
        if reference >= value {
            at_or_below += 1;
        } else {
            break;
        }
    }

    at_or_below as f64 / scores.len() as f64 * 100.0
}
