//! Tokenization primitives shared by the readability formulas
//!
//! Everything here is a pure function over `&str`. Counts are heuristics, not
//! a linguistic parser.

/// Split text into words.
///
/// Tokens are whitespace separated; leading and trailing punctuation is
/// stripped, inner apostrophes and hyphens are kept. Tokens that are left
/// empty (bare punctuation such as `--`) are dropped.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Count words in text
#[must_use]
pub fn word_count(text: &str) -> usize {
    words(text).len()
}

/// Count sentences.
///
/// A sentence is a run of text terminated by `.`, `!` or `?` (a trailing run
/// without a terminator also counts). Runs of two words or fewer are ignored
/// so that abbreviations and verse numbers do not inflate the count. The
/// result is never below 1.
#[must_use]
pub fn sentence_count(text: &str) -> usize {
    let counted = text
        .split(['.', '!', '?'])
        .filter(|run| word_count(run) > 2)
        .count();
    counted.max(1)
}

/// Count alphabetic characters
#[must_use]
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Count non-whitespace characters
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Estimate the number of syllables in a single word.
///
/// Counts groups of consecutive vowels (`y` included), then corrects for a
/// silent trailing `e` and for `-es` / `-ed` endings that are not voiced.
/// Any word containing a letter has at least one syllable.
#[must_use]
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return 0;
    }
    if letters.len() <= 3 {
        return 1;
    }

    let mut groups: usize = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    let last = letters[n - 1];
    let before_last = letters[n - 2];

    if last == 'e' && !is_vowel(before_last) {
        // "-le" after a consonant is voiced: "ta-ble", "sim-ple"
        let voiced_le = before_last == 'l' && n >= 3 && !is_vowel(letters[n - 3]);
        if !voiced_le {
            groups = groups.saturating_sub(1);
        }
    } else if (last == 's' || last == 'd') && before_last == 'e' && n >= 3 {
        // "-es" / "-ed" only add a syllable after sibilants or t/d
        let stem_end = letters[n - 3];
        let voiced = if last == 's' {
            matches!(stem_end, 's' | 'x' | 'z' | 'c' | 'g' | 'h')
        } else {
            matches!(stem_end, 't' | 'd')
        };
        if !voiced && !is_vowel(stem_end) {
            groups = groups.saturating_sub(1);
        }
    }

    groups.max(1)
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
