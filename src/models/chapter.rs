//! Chapter record
//!
//! One record per (book, chapter) pair, built by the aggregator and scored
//! once. Records are never mutated after scoring.

use serde::Serialize;

use crate::readability::ReadabilityResult;

/// Text and scores for one chapter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterRecord {
    /// "<book> <chapter>", e.g. "1 Nephi 3"
    pub key: String,
    /// Included verse texts in source order, one entry per edition
    #[serde(skip)]
    pub verses: Vec<String>,
    /// Verses joined, each terminated by a line break
    #[serde(skip)]
    pub text: String,
    /// Length of `text` in characters
    pub text_length: usize,
    /// Scores, once measured
    pub readability: Option<ReadabilityResult>,
}

impl ChapterRecord {
    /// Build a record from its included verse texts
    #[must_use]
    pub fn new(book: &str, chapter: &str, verses: Vec<String>) -> Self {
        let text: String = verses.iter().map(|verse| format!("{verse}\n")).collect();
        Self {
            key: chapter_key(book, chapter),
            text_length: text.chars().count(),
            verses,
            text,
            readability: None,
        }
    }

    /// Whether every verse was excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Key naming a chapter: book and chapter separated by a space
#[must_use]
pub fn chapter_key(book: &str, chapter: &str) -> String {
    format!("{book} {chapter}")
}
