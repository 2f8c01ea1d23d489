//! Config parsing and loading

use std::fs;

use tempfile::TempDir;
use versemeter::config::{ConfigError, PipelineConfig, Presentation};

#[test]
fn full_config_parses() {
    let config = PipelineConfig::from_toml(
        r#"
min_char_length = 120
exclusions = ["Mosiah 14:*"]
extra_exclusions = ["Enos 1:2"]

[output]
dir = "out"
presentation = "table"
bins = 12
"#,
    )
    .unwrap();

    assert_eq!(config.min_char_length, 120);
    assert_eq!(config.output.presentation, Presentation::Table);
    assert_eq!(config.output.bins, 12);
    assert_eq!(config.output.dir.as_deref(), Some(std::path::Path::new("out")));

    let set = config.exclusion_set().unwrap();
    assert_eq!(set.len(), 101);
    assert!(set.contains("Enos 1:2"));
    assert!(!set.contains("2 Nephi 12:1"));
}

#[test]
fn empty_config_uses_defaults() {
    assert_eq!(PipelineConfig::from_toml("").unwrap(), PipelineConfig::default());
}

#[test]
fn extra_exclusions_extend_builtin_list() {
    let config = PipelineConfig::from_toml(r#"extra_exclusions = ["Enos 1:2"]"#).unwrap();
    let set = config.exclusion_set().unwrap();
    assert!(set.contains("Enos 1:2"));
    assert!(set.contains("2 Nephi 12:1"));
}

#[test]
fn malformed_exclusion_is_reported() {
    let config = PipelineConfig::from_toml(r#"exclusions = ["Enos"]"#).unwrap();
    assert!(matches!(config.exclusion_set(), Err(ConfigError::Exclusion(_))));
}

#[test]
fn unknown_presentation_fails_to_parse() {
    assert!(PipelineConfig::from_toml("[output]\npresentation = \"pie\"").is_err());
}

#[test]
fn explicit_path_must_exist() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");
    let err = PipelineConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn explicit_path_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("versemeter.toml");
    fs::write(&path, "min_char_length = 7\n").unwrap();
    assert_eq!(PipelineConfig::load(Some(&path)).unwrap().min_char_length, 7);
}

#[test]
fn presentation_from_str() {
    assert_eq!("TABLE".parse::<Presentation>().unwrap(), Presentation::Table);
    assert_eq!("histogram".parse::<Presentation>().unwrap(), Presentation::Histogram);
    assert!("pie".parse::<Presentation>().is_err());
}

#[test]
fn sequence_presentation_parses() {
    let config = PipelineConfig::from_toml("[output]\npresentation = \"sequence\"").unwrap();
    assert_eq!(config.output.presentation, Presentation::Sequence);
}
