//! Parsers for JetBrains "recent projects" files
//!
//! # Error Handling Strategy
//!
//! The source file is either usable as a whole or reported:
//!
//! - **Missing file**: An IDE that was never started has no file. This yields an empty list,
//!   not an error.
//!
//! - **Malformed XML**: Surfaced as [`ExtractError::Malformed`](crate::ExtractError) so the
//!   caller can decide whether to abort or skip that IDE.
//!
//! - **Individual entry failures**: An entry node without a path attribute is logged and
//!   skipped. One corrupt entry never hides the rest of the list.
//!
//! - **Per-project enrichment**: A missing `.idea/.name` or icon falls back to defaults.
//!   Other I/O errors on the name file propagate.

pub mod recent_projects;
pub mod rules;

pub use recent_projects::{RecentPath, extract, parse_recent_paths};
pub use rules::{EXTRACTION_RULES, EntryShape, ExtractionRule, Manager};
