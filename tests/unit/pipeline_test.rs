//! Aggregation and the full analysis run

use std::fs;

use tempfile::TempDir;
use versemeter::aggregate::{aggregate, corpus_text};
use versemeter::config::PipelineConfig;
use versemeter::exclusion::ExclusionSet;
use versemeter::export::{CORPUS_FILE, write_texts};
use versemeter::models::Corpus;
use versemeter::pipeline::{self, BUILTIN_LETTER, InputPaths, LETTER_LABEL, PREFACE_LABEL};

use crate::common::{SMALL_CORPUS, small_corpus, small_inputs};

#[test]
fn corpus_keeps_document_order() {
    let corpus = small_corpus();
    let books: Vec<&str> = corpus.books().map(|(name, _)| name).collect();
    assert_eq!(books, vec!["1 Nephi", "Enos"]);
    assert_eq!(corpus.chapter_count(), 3);
}

#[test]
fn excluded_verses_leave_the_text() {
    let exclusions = ExclusionSet::expand(["1 Nephi 1:*", "Enos 1:2"]).unwrap();
    let chapters = aggregate(&small_corpus(), &exclusions);

    assert_eq!(chapters.len(), 3);
    assert!(chapters[0].is_empty());
    assert_eq!(chapters[0].text_length, 0);
    assert_eq!(
        chapters[2].text,
        "Behold, it came to pass that I, Enos, knowing my father that he was a just man.\n\
         Behold, I went to hunt beasts in the forests.\n"
    );
    assert!(!corpus_text(&chapters).contains("wrestle"));
}

#[test]
fn emptied_chapter_is_dropped_from_summary() {
    let config = PipelineConfig {
        exclusions: Some(vec!["1 Nephi 1:*".to_string()]),
        ..PipelineConfig::default()
    };
    let analysis = pipeline::run(&small_inputs(), &config).unwrap();

    assert_eq!(analysis.summary.dropped, vec!["1 Nephi 1"]);
    assert_eq!(analysis.retained_chapters().count(), 2);
}

#[test]
fn malformed_corpus_names_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("corpus.json");
    fs::write(&path, r#"{"contents": {"Enos": "not a book"}}"#).unwrap();

    let err = pipeline::load_inputs(&InputPaths {
        corpus: path,
        ..InputPaths::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("corpus.json"));
}

#[test]
fn load_inputs_reads_letter_and_preface() {
    let temp = TempDir::new().unwrap();
    let corpus = temp.path().join("corpus.json");
    let preface = temp.path().join("preface.txt");
    fs::write(&corpus, SMALL_CORPUS).unwrap();
    fs::write(&preface, "To the reader.").unwrap();

    let inputs = pipeline::load_inputs(&InputPaths {
        corpus,
        letter: None,
        preface: Some(preface),
    })
    .unwrap();

    assert_eq!(inputs.references.len(), 2);
    assert_eq!(inputs.references[0].label, LETTER_LABEL);
    assert_eq!(inputs.references[0].text, BUILTIN_LETTER);
    assert_eq!(inputs.references[1].label, PREFACE_LABEL);
    assert_eq!(inputs.corpus, Corpus::from_json(SMALL_CORPUS).unwrap());
}

#[test]
fn export_writes_retained_chapters_and_corpus() {
    let temp = TempDir::new().unwrap();
    let analysis = pipeline::run(&small_inputs(), &PipelineConfig::default()).unwrap();

    let written = write_texts(&analysis, temp.path()).unwrap();
    assert_eq!(written.len(), analysis.summary.retained.len() + 1);

    let combined = fs::read_to_string(temp.path().join(CORPUS_FILE)).unwrap();
    assert_eq!(combined, analysis.corpus_text);
    assert_eq!(
        fs::read_to_string(temp.path().join("Enos 1.txt")).unwrap(),
        analysis.chapters[2].text
    );
}
