//! Familiar-word list used to decide which long words count as difficult

use std::collections::HashSet;
use std::sync::LazyLock;

const FAMILIAR_WORDS: &str = include_str!("../../data/familiar_words.txt");

static FAMILIAR: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    FAMILIAR_WORDS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Whether a word is on the familiar list (case-insensitive)
pub fn is_familiar(word: &str) -> bool {
    FAMILIAR.contains(word.to_lowercase().as_str())
}
