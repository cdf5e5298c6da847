//! Recent Projects - Read the recent project lists of JetBrains IDEs
//!
//! JetBrains IDEs remember recently opened projects in a `recentProjects.xml`
//! file whose layout has changed several times. This library reconciles the
//! known layouts into one de-duplicated list:
//!
//! - Reading paths from both `RecentProjectsManager` and `RecentDirectoryProjectsManager`
//! - Normalizing the `$USER_HOME$` placeholder to `~`
//! - Resolving display names from `.idea/.name` and icons from `.idea/icon.*`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use recent_projects::{IdeKey, extract_recent_projects};
//!
//! let file = Path::new("/home/alice/.config/JetBrains/IntelliJIdea2024.1/options/recentProjects.xml");
//! let projects = extract_recent_projects(file, &IdeKey::new("idea"))?;
//! println!("Found {} projects", projects.len());
//! # Ok::<(), recent_projects::ExtractError>(())
//! ```

pub mod cli;
pub mod enrichment;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::ExtractError;
pub use models::{IdeKey, ProjectDescriptor};
pub use parsers::recent_projects::extract as extract_recent_projects;
pub use utils::paths::format_path_with_tilde;
