//! Error types for recent-project extraction
//!
//! Only document-level and enrichment I/O failures surface here. A missing
//! source file is an empty result and a single malformed entry is skipped, so
//! neither has a variant.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source file exists but is not well-formed XML
    #[error("Malformed recent projects file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The source file is not valid UTF-8
    #[error("Malformed recent projects file {}: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Reading the source file or a project's name file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True when the document itself could not be parsed
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Encoding { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
