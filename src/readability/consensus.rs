//! Consensus grade: the most common grade across the numeric formulas
//!
//! The consensus is rendered as text ("5th and 6th grade") and then reduced
//! back to a number by [`parse_consensus_grade`], which averages the two
//! grades. Anything that does not have that shape is an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::formulas::{self, TextStats};

static CONSENSUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\-\d]+)[tsnr][htd] and ([\-\d]+)[tsnr][htd] grade")
        .unwrap_or_else(|e| panic!("consensus grade pattern is invalid: {e}"))
});

/// Errors from reducing a consensus grade to a number
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeParseError {
    /// Text is not of the form "<N>th and <M>th grade"
    #[error("not a consensus grade: {0:?}")]
    Malformed(String),

    /// One of the two grades is not an integer
    #[error("invalid grade number {number:?} in {text:?}")]
    InvalidNumber {
        /// The offending number
        number: String,
        /// The full consensus text
        text: String,
    },
}

/// Reduce "<N>th and <M>th grade" to the mean of N and M.
///
/// ```
/// use versemeter::readability::parse_consensus_grade;
///
/// assert_eq!(parse_consensus_grade("5th and 7th grade"), Ok(6.0));
/// assert!(parse_consensus_grade("5th and 7th").is_err());
/// ```
pub fn parse_consensus_grade(text: &str) -> Result<f64, GradeParseError> {
    let caps = CONSENSUS_RE
        .captures(text)
        .ok_or_else(|| GradeParseError::Malformed(text.to_string()))?;

    let mut sum = 0i64;
    for group in [&caps[1], &caps[2]] {
        let grade: i64 = group.parse().map_err(|_| GradeParseError::InvalidNumber {
            number: group.to_string(),
            text: text.to_string(),
        })?;
        sum += grade;
    }

    #[allow(clippy::cast_precision_loss)]
    Ok(sum as f64 / 2.0)
}

/// Compute the consensus grade text for a text's counts
#[must_use]
pub fn consensus_grade(stats: &TextStats, content: &str) -> String {
    let grade = if stats.words == 0 {
        0
    } else {
        most_common(&candidate_grades(stats, content))
    };
    let lower = grade - 1;
    format!("{lower}{} and {grade}{} grade", grade_suffix(lower), grade_suffix(grade))
}

/// Every formula votes; grade-level formulas vote for both the rounded and
/// ceiling grade, score formulas vote through their published bands.
fn candidate_grades(stats: &TextStats, content: &str) -> Vec<i64> {
    let mut grades = Vec::with_capacity(16);

    let mut vote_both = |score: f64| {
        grades.push(to_grade(score.round_ties_even()));
        grades.push(to_grade(score.ceil()));
    };

    vote_both(formulas::flesch_kincaid_grade(stats));
    let ease_bands = reading_ease_bands(formulas::flesch_reading_ease(stats));
    vote_both(formulas::smog_index(stats));
    vote_both(formulas::coleman_liau_index(stats));
    vote_both(formulas::automated_readability_index(stats));
    vote_both(formulas::dale_chall_readability_score(stats));
    vote_both(formulas::linsear_write_formula(content));
    vote_both(formulas::gunning_fog(stats));

    // reading ease votes land right after Flesch-Kincaid
    grades.splice(2..2, ease_bands);
    grades
}

fn reading_ease_bands(score: f64) -> Vec<i64> {
    match score {
        s if (90.0..100.0).contains(&s) => vec![5],
        s if (80.0..90.0).contains(&s) => vec![6],
        s if (70.0..80.0).contains(&s) => vec![7],
        s if (60.0..70.0).contains(&s) => vec![8, 9],
        s if (50.0..60.0).contains(&s) => vec![10],
        s if (40.0..50.0).contains(&s) => vec![11],
        s if (30.0..40.0).contains(&s) => vec![12],
        _ => vec![13],
    }
}

/// Most frequent value; ties go to the value seen first
fn most_common(values: &[i64]) -> i64 {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut best: Option<(i64, usize)> = None;
    for &value in values {
        let count = counts[&value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map_or(0, |(value, _)| value)
}

#[allow(clippy::cast_possible_truncation)]
fn to_grade(value: f64) -> i64 {
    value as i64
}

fn grade_suffix(grade: i64) -> &'static str {
    if (11..=13).contains(&grade.rem_euclid(100)) {
        return "th";
    }
    match grade.rem_euclid(10) {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
