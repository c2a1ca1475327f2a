//! Error types for note lookup.
//!
//! Library code returns these `thiserror` enums; the `search-notes` binary
//! wraps them in `anyhow` at the process boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can end a lookup run.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The search root does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A note file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The `--id` glob pattern does not compile.
    #[error("invalid id pattern {pattern:?}: {source}")]
    InvalidIdPattern {
        /// Pattern as supplied by the caller.
        pattern: String,
        /// Compilation error from `globset`.
        #[source]
        source: globset::Error,
    },

    /// A settings file was given but could not be loaded.
    #[error("invalid settings file {}: {message}", .path.display())]
    Config {
        /// Settings file path.
        path: PathBuf,
        /// Reason the file was rejected.
        message: String,
    },
}

/// Reasons a single note's frontmatter is rejected.
///
/// These never abort a run; the note is skipped.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// No opening `---` at the start, or no closing `---`.
    #[error("missing frontmatter delimiter")]
    MissingDelimiter,

    /// The block is not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The block parsed to something other than a mapping.
    #[error("frontmatter is not a mapping")]
    NotAMapping,

    /// The block parsed to an empty mapping or null.
    #[error("frontmatter is empty")]
    Empty,

    /// A top-level key is a sequence or mapping.
    #[error("frontmatter key is not a scalar")]
    NonScalarKey,
}

/// Result alias for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
