//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, AnalyzeArgs};
use versemeter::config::Presentation;
use versemeter::output::OutputMode;

/// versemeter - Chapter readability against reference texts
#[derive(Parser, Debug)]
#[command(
    name = "versemeter",
    version,
    about = "Chapter readability against reference texts",
    long_about = "Score every chapter of a verse corpus with nine readability metrics.\n\n\
                  Known quotations are removed first. The distribution of chapter scores\n\
                  is compared against a reference letter and, optionally, a preface."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a corpus export and compare it against the reference texts
    Analyze {
        /// Corpus JSON (book -> chapter -> verse id -> edition -> text)
        corpus: PathBuf,

        /// Letter text file (defaults to the built-in 1829 letter)
        #[arg(long)]
        letter: Option<PathBuf>,

        /// Preface text file, added as a second reference
        #[arg(long)]
        preface: Option<PathBuf>,

        /// Config file (defaults to ./versemeter.toml, then the global config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write per-chapter and combined texts into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Presentation: table, histogram, sequence, json
        #[arg(short, long)]
        presentation: Option<Presentation>,

        /// Leave out chapters shorter than this many characters
        #[arg(long)]
        min_chars: Option<usize>,
    },

    /// Score a single text file
    Score {
        /// Text file
        file: PathBuf,
    },

    /// Show the expanded quotation exclusion list
    Exclusions {
        /// Only report whether this verse id is excluded
        #[arg(long, value_name = "VERSE_ID")]
        check: Option<String>,

        /// Config file (defaults to ./versemeter.toml, then the global config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Analyze {
            corpus,
            letter,
            preface,
            config,
            out_dir,
            presentation,
            min_chars,
        }) => commands::analyze(
            AnalyzeArgs {
                corpus,
                letter,
                preface,
                config,
                out_dir,
                presentation,
                min_chars,
            },
            output_mode,
        ),
        Some(Command::Score { file }) => commands::score(&file, output_mode),
        Some(Command::Exclusions { check, config }) => {
            commands::exclusions(config.as_deref(), check.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": versemeter::VERSION
                    })
                );
            } else {
                println!("versemeter v{}", versemeter::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": versemeter::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("versemeter v{}", versemeter::VERSION);
                println!("\nRun 'versemeter --help' for usage");
                println!("Run 'versemeter analyze <corpus.json>' to get started");
            }
            Ok(())
        },
    }
}
