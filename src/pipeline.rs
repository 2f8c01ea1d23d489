//! Analysis pipeline
//!
//! Inputs are read once, then everything is computed in memory:
//!
//! 1. expand the exclusion list
//! 2. aggregate chapters without quoted verses
//! 3. score every chapter
//! 4. filter by length and collect per-metric series
//! 5. score the whole corpus and each reference text once
//!
//! Nothing here prints or writes files; presentation and side outputs are
//! handled by the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::aggregate::{aggregate, corpus_text, score_chapters};
use crate::config::{ConfigError, PipelineConfig};
use crate::models::{ChapterRecord, Corpus};
use crate::readability::{self, GradeParseError, Metric, ReadabilityResult};
use crate::summary::Summary;

/// Built-in text of the October 1829 letter to Oliver Cowdery
pub const BUILTIN_LETTER: &str = include_str!("../data/letter_to_cowdery_oct_1829.txt");

/// Label of the letter reference
pub const LETTER_LABEL: &str = "1829 Letter";

/// Label of the preface reference
pub const PREFACE_LABEL: &str = "Preface";

/// Errors reading the input files
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be read
    #[error("cannot read {what} {path}: {source}")]
    Read {
        /// Which input this was
        what: &'static str,
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The corpus export is not valid JSON of the expected shape
    #[error("cannot parse corpus {path}: {source}")]
    Corpus {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Errors from running the analysis
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration could not produce an exclusion set
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A consensus grade could not be reduced to a number
    #[error("while scoring {target}: {source}")]
    Scoring {
        /// Chapter key or reference label
        target: String,
        /// Underlying error
        source: GradeParseError,
    },
}

/// A document scored as a comparison baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceText {
    /// Label used in tables and panels
    pub label: String,
    /// Full text
    pub text: String,
}

impl ReferenceText {
    /// Create a reference text
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Everything read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// The corpus under analysis
    pub corpus: Corpus,
    /// Reference texts; the first is the one percentages are computed against
    pub references: Vec<ReferenceText>,
}

/// Paths to read inputs from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPaths {
    /// Corpus export (JSON)
    pub corpus: PathBuf,
    /// Letter text; the built-in letter is used when absent
    pub letter: Option<PathBuf>,
    /// Preface text, optional
    pub preface: Option<PathBuf>,
}

/// Scores of one reference text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceScore {
    /// Reference label
    pub label: String,
    /// Length of the reference text in characters
    pub text_length: usize,
    /// Scores
    pub readability: ReadabilityResult,
}

/// Result of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Every chapter, scored, in corpus order
    pub chapters: Vec<ChapterRecord>,
    /// Series of chapters that passed the length filter
    pub summary: Summary,
    /// Scores of the whole corpus without quotations
    pub corpus: ReadabilityResult,
    /// Scores of each reference text, in input order
    pub references: Vec<ReferenceScore>,
    /// Percentage of retained chapters at or below the primary reference
    pub at_or_below_primary: BTreeMap<Metric, f64>,
    /// The whole corpus text without quotations
    #[serde(skip)]
    pub corpus_text: String,
}

impl Analysis {
    /// The reference percentages are computed against
    #[must_use]
    pub fn primary_reference(&self) -> Option<&ReferenceScore> {
        self.references.first()
    }

    /// Chapters that passed the length filter
    pub fn retained_chapters(&self) -> impl Iterator<Item = &ChapterRecord> {
        self.chapters
            .iter()
            .filter(|record| self.summary.retained.contains(&record.key))
    }
}

/// Read every input file, naming the file in any error
pub fn load_inputs(paths: &InputPaths) -> Result<Inputs, LoadError> {
    let json = read("corpus", &paths.corpus)?;
    let corpus = Corpus::from_json(&json).map_err(|source| LoadError::Corpus {
        path: paths.corpus.clone(),
        source,
    })?;
    debug!("loaded {} chapter(s) from {}", corpus.chapter_count(), paths.corpus.display());

    let letter = match &paths.letter {
        Some(path) => read("letter", path)?,
        None => BUILTIN_LETTER.to_string(),
    };
    let mut references = vec![ReferenceText::new(LETTER_LABEL, letter)];

    if let Some(path) = &paths.preface {
        references.push(ReferenceText::new(PREFACE_LABEL, read("preface", path)?));
    }

    Ok(Inputs { corpus, references })
}

fn read(what: &'static str, path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Run the analysis
pub fn run(inputs: &Inputs, config: &PipelineConfig) -> Result<Analysis, PipelineError> {
    let exclusions = config.exclusion_set()?;
    debug!("excluding {} verse id(s)", exclusions.len());

    let chapters = aggregate(&inputs.corpus, &exclusions);
    let corpus_text = corpus_text(&chapters);
    let chapters = score_chapters(chapters).map_err(|source| PipelineError::Scoring {
        target: "chapters".to_string(),
        source,
    })?;

    let summary = Summary::build(&chapters, config.min_char_length);
    info!(
        "{} chapter(s) scored, {} retained, {} dropped",
        chapters.len(),
        summary.retained.len(),
        summary.dropped.len()
    );

    let corpus = score("corpus", &corpus_text)?;

    let references = inputs
        .references
        .iter()
        .map(|reference| -> Result<ReferenceScore, PipelineError> {
            Ok(ReferenceScore {
                label: reference.label.clone(),
                text_length: reference.text.chars().count(),
                readability: score(&reference.label, &reference.text)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let at_or_below_primary = references
        .first()
        .map(|primary| summary.percentages_at_or_below(&primary.readability))
        .unwrap_or_default();

    Ok(Analysis {
        chapters,
        summary,
        corpus,
        references,
        at_or_below_primary,
        corpus_text,
    })
}

fn score(target: &str, text: &str) -> Result<ReadabilityResult, PipelineError> {
    readability::measure(text).map_err(|source| PipelineError::Scoring {
        target: target.to_string(),
        source,
    })
}
