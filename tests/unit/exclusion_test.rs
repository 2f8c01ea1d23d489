//! Exclusion pattern parsing and expansion

use test_case::test_case;
use versemeter::exclusion::{ExclusionSet, PatternError, VersePattern, WILDCARD_VERSE_LIMIT};

#[test_case("Mosiah 14:1", VersePattern::Verse("Mosiah 14:1".to_string()) ; "single verse")]
#[test_case("1 Nephi 20:*", VersePattern::Chapter("1 Nephi 20".to_string()) ; "wildcard with numbered book")]
#[test_case("  3 Nephi 24:*  ", VersePattern::Chapter("3 Nephi 24".to_string()) ; "surrounding whitespace")]
fn test_parse(input: &str, expected: VersePattern) {
    assert_eq!(VersePattern::parse(input).unwrap(), expected);
}

#[test_case("", PatternError::Empty ; "empty")]
#[test_case("Mosiah", PatternError::Malformed("Mosiah".to_string()) ; "book only")]
#[test_case("Mosiah 14", PatternError::Malformed("Mosiah 14".to_string()) ; "no verse")]
#[test_case("Mosiah *:1", PatternError::MisplacedWildcard("Mosiah *:1".to_string()) ; "wildcard chapter")]
fn test_parse_errors(input: &str, expected: PatternError) {
    assert_eq!(VersePattern::parse(input).unwrap_err(), expected);
}

#[test]
fn wildcard_expands_to_limit() {
    let set = ExclusionSet::expand(["2 Nephi 12:*"]).unwrap();
    assert_eq!(set.len(), WILDCARD_VERSE_LIMIT as usize);
    assert!(set.contains("2 Nephi 12:1"));
    assert!(set.contains("2 Nephi 12:100"));
    assert!(!set.contains("2 Nephi 12:101"));
    assert!(!set.contains("2 Nephi 12:0"));
}

#[test]
fn overlapping_patterns_collapse() {
    let set = ExclusionSet::expand(["Mosiah 14:*", "Mosiah 14:3", "Mosiah 14:3"]).unwrap();
    assert_eq!(set.len(), 100);
}

#[test]
fn list_skips_comments_and_blank_lines() {
    let set = ExclusionSet::from_list("# quoted passages\n\nMosiah 14:1\n  # indented comment\nMosiah 14:2\n").unwrap();
    assert_eq!(set.sorted(), vec!["Mosiah 14:1", "Mosiah 14:2"]);
}

#[test]
fn malformed_entry_fails_whole_list() {
    assert!(ExclusionSet::from_list("Mosiah 14:1\nnot a reference\n").is_err());
}

#[test]
fn builtin_list_parses() {
    let set = ExclusionSet::builtin().unwrap();
    assert!(!set.is_empty());
    assert!(set.contains("2 Nephi 12:1"));
    assert!(!ExclusionSet::builtin_patterns().is_empty());
}

#[test]
fn empty_pattern_list_excludes_nothing() {
    let set = ExclusionSet::expand(Vec::<String>::new()).unwrap();
    assert!(set.is_empty());
    assert!(!set.contains("Enos 1:1"));
}
