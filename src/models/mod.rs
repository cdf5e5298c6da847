//! Data models for recent-project extraction.
//!
//! - [`ProjectDescriptor`] - One de-duplicated recent project with its display metadata
//! - [`IdeKey`] - Opaque identifier of the IDE variant that wrote the source file

pub mod ide;
pub mod project;

pub use ide::IdeKey;
pub use project::ProjectDescriptor;
