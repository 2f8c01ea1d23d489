//! Plain-text side outputs
//!
//! ```text
//! <dir>/
//! ├── 1 Nephi 1.txt                       # one file per retained chapter
//! ├── 1 Nephi 2.txt
//! └── corpus-without-quotations.txt       # every chapter, quotations removed
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::pipeline::Analysis;

/// File name of the combined corpus text
pub const CORPUS_FILE: &str = "corpus-without-quotations.txt";

/// Write retained chapters and the combined corpus into `dir`.
///
/// The directory is created if missing. Returns the paths written, combined
/// corpus last.
pub fn write_texts(analysis: &Analysis, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for chapter in analysis.retained_chapters() {
        let path = dir.join(chapter_file_name(&chapter.key));
        fs::write(&path, &chapter.text)?;
        written.push(path);
    }

    let corpus_path = dir.join(CORPUS_FILE);
    fs::write(&corpus_path, &analysis.corpus_text)?;
    written.push(corpus_path);

    debug!("wrote {} file(s) to {}", written.len(), dir.display());
    Ok(written)
}

/// File name for a chapter key; path separators are replaced
#[must_use]
pub fn chapter_file_name(key: &str) -> String {
    let safe: String = key
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{safe}.txt")
}
