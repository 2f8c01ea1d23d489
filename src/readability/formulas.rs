//! Numeric readability formulas
//!
//! ASL is average sentence length in words, ASW average syllables per word.
//! Every formula returns 0.0 for text without words and rounds to two
//! decimal places.

use super::familiar::is_familiar;
use crate::text;

/// Words considered by the Linsear Write formula
const LINSEAR_EXCERPT_WORDS: usize = 100;

/// Counts gathered in one pass over a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Number of words
    pub words: usize,
    /// Number of sentences (at least 1)
    pub sentences: usize,
    /// Total syllables
    pub syllables: usize,
    /// Words of three or more syllables
    pub polysyllables: usize,
    /// Alphabetic characters
    pub letters: usize,
    /// Non-whitespace characters
    pub chars: usize,
    /// Words of two or more syllables that are not familiar
    pub difficult_words: usize,
    /// Words of three or more syllables that are not familiar
    pub complex_words: usize,
}

impl TextStats {
    /// Gather counts for a text
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        let words = text::words(content);
        let mut stats = Self {
            words: words.len(),
            sentences: text::sentence_count(content),
            letters: text::letter_count(content),
            chars: text::char_count(content),
            ..Self::default()
        };

        for word in &words {
            let syllables = text::syllable_count(word);
            stats.syllables += syllables;
            if syllables >= 3 {
                stats.polysyllables += 1;
            }
            if syllables >= 2 && !is_familiar(word) {
                stats.difficult_words += 1;
                if syllables >= 3 {
                    stats.complex_words += 1;
                }
            }
        }

        stats
    }

    const fn is_empty(&self) -> bool {
        self.words == 0
    }

    #[allow(clippy::cast_precision_loss)]
    fn avg_sentence_length(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn avg_syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn percent_of_words(&self, count: usize) -> f64 {
        count as f64 / self.words as f64 * 100.0
    }
}

pub fn flesch_reading_ease(stats: &TextStats) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    round2(206.835 - 1.015 * stats.avg_sentence_length() - 84.6 * stats.avg_syllables_per_word())
}

pub fn flesch_kincaid_grade(stats: &TextStats) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    round2(0.39 * stats.avg_sentence_length() + 11.8 * stats.avg_syllables_per_word() - 15.59)
}

/// SMOG needs at least three sentences to mean anything
#[allow(clippy::cast_precision_loss)]
pub fn smog_index(stats: &TextStats) -> f64 {
    if stats.is_empty() || stats.sentences < 3 {
        return 0.0;
    }
    let scaled = stats.polysyllables as f64 * 30.0 / stats.sentences as f64;
    round2(1.043 * scaled.sqrt() + 3.1291)
}

pub fn coleman_liau_index(stats: &TextStats) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    let letters_per_100 = stats.percent_of_words(stats.letters);
    let sentences_per_100 = stats.percent_of_words(stats.sentences);
    round2(0.058 * letters_per_100 - 0.296 * sentences_per_100 - 15.8)
}

#[allow(clippy::cast_precision_loss)]
pub fn automated_readability_index(stats: &TextStats) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    let chars_per_word = stats.chars as f64 / stats.words as f64;
    round2(4.71 * chars_per_word + 0.5 * stats.avg_sentence_length() - 21.43)
}

pub fn dale_chall_readability_score(stats: &TextStats) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    let percent_difficult = stats.percent_of_words(stats.difficult_words);
    let mut score = 0.1579 * percent_difficult + 0.0496 * stats.avg_sentence_length();
    if percent_difficult > 5.0 {
        score += 3.6365;
    }
    round2(score)
}

pub fn gunning_fog(stats: &TextStats) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    let percent_complex = stats.percent_of_words(stats.complex_words);
    round2(0.4 * (stats.avg_sentence_length() + percent_complex))
}

/// Linsear Write over the first hundred words of the text
#[allow(clippy::cast_precision_loss)]
pub fn linsear_write_formula(content: &str) -> f64 {
    let excerpt: Vec<&str> =
        content.split_whitespace().take(LINSEAR_EXCERPT_WORDS).collect();
    let excerpt = excerpt.join(" ");

    let words = text::words(&excerpt);
    if words.is_empty() {
        return 0.0;
    }

    let points: usize = words
        .iter()
        .map(|word| if text::syllable_count(word) < 3 { 1 } else { 3 })
        .sum();

    let mut number = points as f64 / text::sentence_count(&excerpt) as f64;
    if number <= 20.0 {
        number -= 2.0;
    }
    round2(number / 2.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
