//! Output formatting for human and JSON modes
//!
//! Analysis results are shown through a [`Presenter`], chosen by
//! configuration: a plain comparison table, text distribution panels, text
//! chapter-sequence panels, or JSON. Smaller command results render themselves for an [`OutputMode`].

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::config::Presentation;
use crate::pipeline::Analysis;
use crate::readability::{Metric, ReadabilityResult};

/// Longest bar drawn in a distribution panel
const BAR_WIDTH: usize = 40;

/// Label of the whole-corpus column
pub const CORPUS_LABEL: &str = "Corpus";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Strategy for showing an analysis
pub trait Presenter {
    /// Render the analysis to text
    fn render(&self, analysis: &Analysis) -> String;

    /// Render and print to stdout
    fn present(&self, analysis: &Analysis) {
        print!("{}", self.render(analysis));
    }
}

/// Pick the presenter for a presentation mode
#[must_use]
pub fn presenter_for(presentation: Presentation, bins: usize) -> Box<dyn Presenter> {
    match presentation {
        Presentation::Table => Box::new(TablePresenter),
        Presentation::Histogram => Box::new(HistogramPresenter::new(bins)),
        Presentation::Sequence => Box::new(SequencePresenter),
        Presentation::Json => Box::new(JsonPresenter),
    }
}

/// Pipe-delimited comparison table
#[derive(Debug, Clone, Copy, Default)]
pub struct TablePresenter;

impl Presenter for TablePresenter {
    fn render(&self, analysis: &Analysis) -> String {
        comparison_table(analysis)
    }
}

/// Whole analysis as pretty JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, analysis: &Analysis) -> String {
        let mut out = serde_json::to_string_pretty(analysis).unwrap_or_default();
        out.push('\n');
        out
    }
}

/// One text panel per metric showing the chapter distribution, followed by
/// the comparison table
#[derive(Debug, Clone, Copy)]
pub struct HistogramPresenter {
    bins: usize,
}

impl HistogramPresenter {
    /// Create a presenter drawing `bins` rows per panel (at least one)
    #[must_use]
    pub fn new(bins: usize) -> Self {
        Self { bins: bins.max(1) }
    }

    fn panel(&self, analysis: &Analysis, metric: Metric, out: &mut String) {
        let scores = analysis.summary.scores(metric);
        let corpus_score = analysis.corpus.get(metric);
        let primary = analysis.primary_reference();

        let _ = writeln!(out, "{}", metric.title().bold());
        let _ = writeln!(out, "{}", metric.axis_label().dimmed());

        if scores.is_empty() {
            let _ = writeln!(out, "  (no chapters)\n");
            return;
        }

        let histogram = Histogram::build(scores, self.bins);
        let largest = histogram.counts.iter().copied().max().unwrap_or(1).max(1);

        let letter_bin = primary.map(|r| histogram.bin_of(r.readability.get(metric)));
        let corpus_bin = histogram.bin_of(corpus_score);

        for (index, &count) in histogram.counts.iter().enumerate() {
            let (low, high) = histogram.bounds(index);
            let bar = "█".repeat(count * BAR_WIDTH / largest);
            let _ = write!(out, "  {low:>8.1} .. {high:>8.1} | {bar:<BAR_WIDTH$} {count:>4}");

            if let (Some(reference), Some(bin)) = (primary, letter_bin)
                && bin == index
            {
                let _ = write!(out, "  {}", format!("◀ {}", reference.label).red());
            }
            if corpus_bin == index {
                let _ = write!(out, "  {}", format!("◀ {CORPUS_LABEL}").bold());
            }
            out.push('\n');
        }

        if let Some(reference) = primary {
            let percent = analysis.at_or_below_primary.get(&metric).copied().unwrap_or_default();
            let _ = writeln!(
                out,
                "  {}: {:.1}  {CORPUS_LABEL}: {corpus_score:.1}  Letter ≥ {percent:.1}%",
                reference.label,
                reference.readability.get(metric),
            );
        }
        out.push('\n');
    }
}

impl Default for HistogramPresenter {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Presenter for HistogramPresenter {
    fn render(&self, analysis: &Analysis) -> String {
        let mut out = String::new();
        for metric in Metric::ALL {
            self.panel(analysis, metric, &mut out);
        }
        out.push_str(&comparison_table(analysis));
        out
    }
}

/// One text panel per metric with a row per retained chapter, in chapter
/// order, followed by the comparison table.
///
/// Each row places the chapter score on a shared axis. The letter and corpus
/// scores are drawn as fixed columns through every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequencePresenter;

impl SequencePresenter {
    const CHAPTER: char = '●';
    const LETTER: char = '┊';
    const CORPUS: char = '┆';

    fn panel(analysis: &Analysis, metric: Metric, out: &mut String) {
        let scores = analysis.summary.scores(metric);
        let corpus_score = analysis.corpus.get(metric);
        let primary = analysis.primary_reference();
        let letter_score = primary.map(|r| r.readability.get(metric));

        let _ = writeln!(out, "{}", metric.title().bold());
        let _ = writeln!(out, "{}", metric.axis_label().dimmed());

        if scores.is_empty() {
            let _ = writeln!(out, "  (no chapters)\n");
            return;
        }

        let axis = Axis::spanning(scores.iter().copied().chain([corpus_score]).chain(letter_score));
        let corpus_column = axis.column(corpus_score);
        let letter_column = letter_score.map(|score| axis.column(score));

        for (index, (key, &score)) in analysis.summary.retained.iter().zip(scores).enumerate() {
            let mut track = vec![' '; BAR_WIDTH];
            track[corpus_column] = Self::CORPUS;
            if let Some(column) = letter_column {
                track[column] = Self::LETTER;
            }
            track[axis.column(score)] = Self::CHAPTER;
            let track: String = track.into_iter().collect();

            let _ = writeln!(out, "  {:>4} {key:<24} {score:>8.2} |{track}|", index + 1);
        }

        let _ = write!(out, "  {}", format!("{} {CORPUS_LABEL}: {corpus_score:.1}", Self::CORPUS).bold());
        if let (Some(reference), Some(score)) = (primary, letter_score) {
            let _ = write!(out, "  {}", format!("{} {}: {score:.1}", Self::LETTER, reference.label).red());
        }
        let _ = writeln!(out, "  axis {:.1} .. {:.1}\n", axis.min, axis.max);
    }
}

impl Presenter for SequencePresenter {
    fn render(&self, analysis: &Analysis) -> String {
        let mut out = String::new();
        for metric in Metric::ALL {
            Self::panel(analysis, metric, &mut out);
        }
        out.push_str(&comparison_table(analysis));
        out
    }
}

/// Linear mapping of scores onto `BAR_WIDTH` columns
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    min: f64,
    max: f64,
}

impl Axis {
    fn spanning(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values
            .filter(|value| value.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
                (min.min(value), max.max(value))
            });
        if min > max {
            return Self { min: 0.0, max: 0.0 };
        }
        Self { min, max }
    }

    /// Column for a value; values outside the axis land on the edges
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn column(&self, value: f64) -> usize {
        let last = BAR_WIDTH - 1;
        if self.max <= self.min || !value.is_finite() {
            return 0;
        }
        let position = ((value - self.min) / (self.max - self.min) * last as f64).round();
        (position.max(0.0) as usize).min(last)
    }
}

/// Equal-width bins over the range of a series
#[derive(Debug, Clone, PartialEq)]
struct Histogram {
    min: f64,
    width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    fn build(values: &[f64], bins: usize) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        #[allow(clippy::cast_precision_loss)]
        let width = if max > min { (max - min) / bins as f64 } else { 1.0 };
        let bins = if max > min { bins } else { 1 };

        let mut histogram = Self {
            min,
            width,
            counts: vec![0; bins],
        };
        for &value in values {
            let bin = histogram.bin_of(value);
            histogram.counts[bin] += 1;
        }
        histogram
    }

    /// Bin index for a value; values outside the range land in the edge bins
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn bin_of(&self, value: f64) -> usize {
        let last = self.counts.len() - 1;
        if value <= self.min || !value.is_finite() {
            return 0;
        }
        let index = ((value - self.min) / self.width).floor() as usize;
        index.min(last)
    }

    #[allow(clippy::cast_precision_loss)]
    fn bounds(&self, index: usize) -> (f64, f64) {
        let low = self.min + self.width * index as f64;
        (low, low + self.width)
    }
}

/// Comparison table: one row per metric, one column for the corpus and one
/// per reference text
#[must_use]
pub fn comparison_table(analysis: &Analysis) -> String {
    let mut header = vec!["metric".to_string(), CORPUS_LABEL.to_string()];
    header.extend(analysis.references.iter().map(|r| r.label.clone()));

    let mut alignment = vec!["---:"];
    alignment.extend(std::iter::repeat_n(":---", header.len() - 1));

    let mut out = String::new();
    let _ = writeln!(out, "{}", header.join(" | "));
    let _ = writeln!(out, "{}", alignment.join(" | "));

    for metric in Metric::ALL {
        let mut row = vec![metric.name().to_string(), format!("{:.1}", analysis.corpus.get(metric))];
        row.extend(
            analysis
                .references
                .iter()
                .map(|r| format!("{:.1}", r.readability.get(metric))),
        );
        let _ = writeln!(out, "{}", row.join(" | "));
    }
    out
}

/// Result of scoring a single text
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    /// Where the text came from
    pub source: String,
    /// Length in characters
    pub text_length: usize,
    /// Scores
    pub readability: ReadabilityResult,
}

impl ScoreResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable form
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({} characters)\n", self.source, self.text_length);
        for (metric, score) in self.readability.iter() {
            let _ = writeln!(out, "  {:<30} {score:>8.2}", metric.name());
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of listing the exclusion set
#[derive(Debug, Serialize)]
pub struct ExclusionListResult {
    /// Number of patterns before expansion
    pub patterns: usize,
    /// Concrete verse ids, sorted
    pub verses: Vec<String>,
}

impl ExclusionListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!(
                    "{} pattern(s) expand to {} verse id(s):\n",
                    self.patterns,
                    self.verses.len()
                );
                for verse in &self.verses {
                    println!("  {verse}");
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Result of checking one verse id against the exclusion set
#[derive(Debug, Serialize)]
pub struct ExclusionCheckResult {
    /// The verse id checked
    pub verse: String,
    /// Whether it is excluded
    pub excluded: bool,
}

impl ExclusionCheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.excluded {
                    println!("{} is excluded (quotation)", self.verse);
                } else {
                    println!("{} is included", self.verse);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
