//! Chapter aggregation
//!
//! Walks the corpus in source order and builds one [`ChapterRecord`] per
//! chapter from the verses that are not excluded. Every edition of an
//! included verse contributes its own entry.
//!
//! Chapters whose verses were all excluded are kept as empty records; the
//! length filter in [`crate::summary`] decides what feeds the statistics.

use log::debug;

use crate::exclusion::ExclusionSet;
use crate::models::{ChapterRecord, Corpus};
use crate::readability::{self, GradeParseError};

/// Build chapter records, dropping excluded verses
#[must_use]
pub fn aggregate(corpus: &Corpus, exclusions: &ExclusionSet) -> Vec<ChapterRecord> {
    let mut records = Vec::with_capacity(corpus.chapter_count());

    for (book_name, book) in corpus.books() {
        for (chapter_name, chapter) in book.iter() {
            let mut verses = Vec::new();
            let mut skipped = 0usize;

            for (verse_id, editions) in chapter.iter() {
                if exclusions.contains(verse_id) {
                    skipped += 1;
                    continue;
                }
                verses.extend(editions.iter().map(|(_, text)| text.clone()));
            }

            let record = ChapterRecord::new(book_name, chapter_name, verses);
            if skipped > 0 {
                debug!("{}: excluded {skipped} quoted verse(s)", record.key);
            }
            records.push(record);
        }
    }

    records
}

/// Measure every record, including empty ones
pub fn score_chapters(records: Vec<ChapterRecord>) -> Result<Vec<ChapterRecord>, GradeParseError> {
    records
        .into_iter()
        .map(|mut record| -> Result<ChapterRecord, GradeParseError> {
            record.readability = Some(readability::measure(&record.text)?);
            Ok(record)
        })
        .collect()
}

/// Concatenate every chapter's text in order
#[must_use]
pub fn corpus_text(records: &[ChapterRecord]) -> String {
    records.iter().map(|record| record.text.as_str()).collect()
}
