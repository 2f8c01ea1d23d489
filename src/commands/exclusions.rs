//! Exclusions command - inspect the quotation exclusion list

use std::path::Path;

use versemeter::config::PipelineConfig;
use versemeter::exclusion::ExclusionSet;
use versemeter::output::{ExclusionCheckResult, ExclusionListResult, OutputMode};

/// List the expanded exclusion set, or check a single verse id
pub fn exclusions(
    config_path: Option<&Path>,
    check: Option<&str>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let config = PipelineConfig::load(config_path)?;
    let set = config.exclusion_set()?;

    if let Some(verse) = check {
        ExclusionCheckResult {
            verse: verse.to_string(),
            excluded: set.contains(verse),
        }
        .render(output_mode);
        return Ok(());
    }

    let patterns = config
        .exclusions
        .as_ref()
        .map_or_else(|| ExclusionSet::builtin_patterns().len(), Vec::len)
        + config.extra_exclusions.len();

    ExclusionListResult {
        patterns,
        verses: set.sorted().into_iter().map(String::from).collect(),
    }
    .render(output_mode);

    Ok(())
}
