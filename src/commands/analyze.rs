//! Analyze command - score every chapter and compare against references

use std::path::PathBuf;

use anyhow::Context;
use log::info;

use versemeter::config::{PipelineConfig, Presentation};
use versemeter::export;
use versemeter::output::{OutputMode, presenter_for};
use versemeter::pipeline::{self, InputPaths};

/// Command-line overrides for one analysis run
#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    /// Corpus export
    pub corpus: PathBuf,
    /// Letter text file (built-in letter when absent)
    pub letter: Option<PathBuf>,
    /// Preface text file
    pub preface: Option<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Side-output directory, overriding config
    pub out_dir: Option<PathBuf>,
    /// Presentation, overriding config
    pub presentation: Option<Presentation>,
    /// Minimum chapter length, overriding config
    pub min_chars: Option<usize>,
}

/// Run the full analysis and present it
pub fn analyze(args: AnalyzeArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = resolve_config(&args, output_mode)?;

    let inputs = pipeline::load_inputs(&InputPaths {
        corpus: args.corpus,
        letter: args.letter,
        preface: args.preface,
    })?;

    let analysis = pipeline::run(&inputs, &config).context("analysis failed")?;

    if let Some(dir) = &config.output.dir {
        let written = export::write_texts(&analysis, dir)
            .with_context(|| format!("failed to write texts to {}", dir.display()))?;
        info!("wrote {} text file(s) to {}", written.len(), dir.display());
    }

    presenter_for(config.output.presentation, config.output.bins).present(&analysis);
    Ok(())
}

/// Config file, then command-line overrides; `--json` wins over everything
fn resolve_config(args: &AnalyzeArgs, output_mode: OutputMode) -> anyhow::Result<PipelineConfig> {
    let mut config = PipelineConfig::load(args.config.as_deref())?;

    if let Some(dir) = &args.out_dir {
        config.output.dir = Some(dir.clone());
    }
    if let Some(presentation) = args.presentation {
        config.output.presentation = presentation;
    }
    if let Some(min_chars) = args.min_chars {
        config.min_char_length = min_chars;
    }
    if output_mode == OutputMode::Json {
        config.output.presentation = Presentation::Json;
    }

    Ok(config)
}
