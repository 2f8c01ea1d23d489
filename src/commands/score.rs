//! Score command - readability of a single text file

use std::fs;
use std::path::Path;

use anyhow::Context;

use versemeter::output::{OutputMode, ScoreResult};
use versemeter::readability;

/// Score one text file with every metric
pub fn score(path: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read text file {}", path.display()))?;

    let readability = readability::measure(&text)
        .with_context(|| format!("failed to score {}", path.display()))?;

    ScoreResult {
        source: path.display().to_string(),
        text_length: text.chars().count(),
        readability,
    }
    .render(output_mode);

    Ok(())
}
