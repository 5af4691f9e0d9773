//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a divider or loading its word list.
///
/// Parsing itself never fails; these only surface at construction time.
#[derive(Debug, Error)]
pub enum DividerError {
    /// The word list file could not be read
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry has no letters or digits left after canonicalization
    #[error("Invalid street entry at position {line}: {entry:?}")]
    InvalidEntry { line: usize, entry: String },

    /// The word list contained no usable entries
    #[error("Word list is empty: {0}")]
    EmptyWordList(PathBuf),
}

pub type Result<T> = std::result::Result<T, DividerError>;
