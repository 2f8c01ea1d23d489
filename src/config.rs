//! Pipeline configuration
//!
//! A run is described by a single [`PipelineConfig`] value that is passed to
//! the pipeline explicitly. It is read from a TOML file:
//!
//! ```toml
//! min_char_length = 50
//! extra_exclusions = ["Alma 42:3"]
//!
//! [output]
//! dir = "chapters"
//! presentation = "table"
//! bins = 20
//! ```
//!
//! Lookup order: an explicit `--config` path, then `./versemeter.toml`, then
//! `~/.config/versemeter/config.toml`, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::exclusion::{ExclusionSet, PatternError};
use crate::summary::MIN_CHAR_LENGTH;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "versemeter.toml";

/// Directory under the user config dir
const GLOBAL_DIR: &str = "versemeter";

/// Global config file name
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// An exclusion pattern in the config is malformed
    #[error("invalid exclusion in config: {0}")]
    Exclusion(#[from] PatternError),
}

/// How results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Pipe-delimited table only
    Table,
    /// Distribution panels per metric, then the table
    #[default]
    Histogram,
    /// Chapter scores in chapter order per metric, then the table
    Sequence,
    /// The full analysis as JSON
    Json,
}

impl std::fmt::Display for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Histogram => write!(f, "histogram"),
            Self::Sequence => write!(f, "sequence"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for Presentation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "histogram" => Ok(Self::Histogram),
            "sequence" => Ok(Self::Sequence),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid presentation: {s}. Use: table, histogram, sequence, json")),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for per-chapter and combined text files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Presentation strategy
    pub presentation: Presentation,
    /// Histogram bins per panel
    pub bins: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            presentation: Presentation::default(),
            bins: 20,
        }
    }
}

/// Everything one analysis run needs besides its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Chapters shorter than this are left out of the statistics
    pub min_char_length: usize,
    /// Replaces the built-in quotation list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    /// Appended to the quotation list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_exclusions: Vec<String>,
    /// Output settings
    pub output: OutputConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_char_length: MIN_CHAR_LENGTH,
            exclusions: None,
            extra_exclusions: Vec::new(),
            output: OutputConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file that must exist
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config: explicit path, working directory, user config, defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("loading config from {}", path.display());
            return Self::load_file(path);
        }

        for candidate in [Some(PathBuf::from(CONFIG_FILE)), global_config_path()].into_iter().flatten() {
            if candidate.is_file() {
                debug!("loading config from {}", candidate.display());
                return Self::load_file(&candidate);
            }
        }

        debug!("no config file found; using defaults");
        Ok(Self::default())
    }

    /// Build the exclusion set this config describes
    pub fn exclusion_set(&self) -> Result<ExclusionSet, ConfigError> {
        let mut patterns = self
            .exclusions
            .clone()
            .unwrap_or_else(ExclusionSet::builtin_patterns);
        patterns.extend(self.extra_exclusions.iter().cloned());
        Ok(ExclusionSet::expand(&patterns)?)
    }
}

/// Path of the user-level config file, if a config dir exists
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR).join(GLOBAL_CONFIG_FILE))
}
