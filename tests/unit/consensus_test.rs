//! Consensus grade parsing and scoring

use test_case::test_case;
use versemeter::readability::{GradeParseError, Metric, measure, parse_consensus_grade};

#[test_case("7th and 8th grade", 7.5 ; "adjacent grades")]
#[test_case("1st and 2nd grade", 1.5 ; "first and second")]
#[test_case("2nd and 3rd grade", 2.5 ; "second and third")]
#[test_case("12th and 13th grade", 12.5 ; "two digit grades")]
#[test_case("-1th and 0th grade", -0.5 ; "empty text consensus")]
#[test_case("5th and 7th grade", 6.0 ; "non adjacent grades")]
fn test_parse_consensus(text: &str, expected: f64) {
    assert!((parse_consensus_grade(text).unwrap() - expected).abs() < f64::EPSILON);
}

#[test_case("grade 7" ; "no ordinal")]
#[test_case("7th grade" ; "single grade")]
#[test_case("" ; "empty")]
fn test_parse_consensus_malformed(text: &str) {
    assert_eq!(
        parse_consensus_grade(text),
        Err(GradeParseError::Malformed(text.to_string()))
    );
}

#[test]
fn invalid_number_names_the_number() {
    let err = parse_consensus_grade("1-2th and 3rd grade").unwrap_err();
    assert!(matches!(err, GradeParseError::InvalidNumber { ref number, .. } if number == "1-2"));
}

#[test]
fn measure_covers_every_metric() {
    let result = measure("The cat sat on the mat. The dog ran in the park. It was a fine day.").unwrap();
    assert_eq!(result.len(), Metric::ALL.len());
    for metric in Metric::ALL {
        assert!(result.get(metric).is_finite(), "{metric} is not finite");
    }
}

#[test]
fn text_standard_is_a_half_grade() {
    let result = measure("And it came to pass that the people were gathered together. They did rejoice exceedingly.").unwrap();
    let consensus = result.get(Metric::TextStandard);
    assert!(((consensus * 2.0).fract()).abs() < f64::EPSILON);
    assert!(((consensus + 0.5).fract()).abs() < f64::EPSILON);
}

#[test]
fn empty_text_scores_zero_with_negative_consensus() {
    let result = measure("").unwrap();
    assert!((result.get(Metric::FleschKincaidGrade)).abs() < f64::EPSILON);
    assert!((result.get(Metric::TextStandard) + 0.5).abs() < f64::EPSILON);
}
