//! Quotation exclusion list
//!
//! Verses quoted from another source text are removed before analysis. They
//! are listed as verse references, either concrete (`2 Nephi 6:6`) or with
//! the verse replaced by `*` to mean the whole chapter (`2 Nephi 7:*`).
//!
//! A wildcard expands to verses 1 through [`WILDCARD_VERSE_LIMIT`]. Chapters
//! with fewer verses simply produce identifiers that never match.
//!
//! # Examples
//!
//! ```
//! use versemeter::exclusion::ExclusionSet;
//!
//! let set = ExclusionSet::expand(["Alma 42:2", "2 Nephi 7:*"]).unwrap();
//! assert!(set.contains("Alma 42:2"));
//! assert!(set.contains("2 Nephi 7:11"));
//! assert!(!set.contains("2 Nephi 8:1"));
//! assert_eq!(set.len(), 101);
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Highest verse number a wildcard expands to
pub const WILDCARD_VERSE_LIMIT: u32 = 100;

/// Marker standing in for every verse of a chapter
pub const WILDCARD: &str = "*";

const BUILTIN_QUOTATIONS: &str = include_str!("../data/bible_quotations.txt");

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<chapter>[^*:]+ \d+):(?P<verse>\d+|\*)$")
        .unwrap_or_else(|e| panic!("verse reference pattern is invalid: {e}"))
});

/// Errors from parsing exclusion patterns
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern was empty or whitespace
    #[error("empty verse reference")]
    Empty,

    /// Pattern is not of the form "Book Chapter:Verse"
    #[error("malformed verse reference {0:?} (expected \"Book Chapter:Verse\" or \"Book Chapter:*\")")]
    Malformed(String),

    /// A wildcard appears somewhere other than the verse position
    #[error("wildcard is only allowed in the verse position: {0:?}")]
    MisplacedWildcard(String),
}

/// One parsed exclusion pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersePattern {
    /// A single verse id
    Verse(String),
    /// Every verse of a chapter; holds the "Book Chapter" prefix
    Chapter(String),
}

impl VersePattern {
    /// Parse one reference
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let caps = REFERENCE_RE.captures(pattern).ok_or_else(|| {
            if pattern.contains(WILDCARD) && !pattern.ends_with(":*") {
                PatternError::MisplacedWildcard(pattern.to_string())
            } else {
                PatternError::Malformed(pattern.to_string())
            }
        })?;

        let chapter = caps["chapter"].to_string();
        if &caps["verse"] == WILDCARD {
            Ok(Self::Chapter(chapter))
        } else {
            Ok(Self::Verse(pattern.to_string()))
        }
    }

    /// Concrete verse ids this pattern stands for
    #[must_use]
    pub fn expand(&self) -> Vec<String> {
        match self {
            Self::Verse(id) => vec![id.clone()],
            Self::Chapter(prefix) => {
                (1..=WILDCARD_VERSE_LIMIT).map(|n| format!("{prefix}:{n}")).collect()
            },
        }
    }
}

/// Immutable set of excluded verse ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    verses: HashSet<String>,
}

impl ExclusionSet {
    /// Expand patterns into concrete verse ids
    pub fn expand<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut verses = HashSet::new();
        for pattern in patterns {
            verses.extend(VersePattern::parse(pattern.as_ref())?.expand());
        }
        Ok(Self { verses })
    }

    /// Parse a pattern list file: one reference per line, `#` comments
    pub fn from_list(contents: &str) -> Result<Self, PatternError> {
        Self::expand(list_entries(contents))
    }

    /// The bundled list of Bible passages quoted in the Book of Mormon
    pub fn builtin() -> Result<Self, PatternError> {
        Self::from_list(BUILTIN_QUOTATIONS)
    }

    /// Patterns of the bundled list, unexpanded
    #[must_use]
    pub fn builtin_patterns() -> Vec<String> {
        list_entries(BUILTIN_QUOTATIONS).map(String::from).collect()
    }

    /// Whether a verse id is excluded
    #[must_use]
    pub fn contains(&self, verse_id: &str) -> bool {
        self.verses.contains(verse_id)
    }

    /// Number of concrete ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Whether nothing is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// All ids, sorted for display
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.verses.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

fn list_entries(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
