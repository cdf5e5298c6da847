//! Per-project enrichment: display name and icon from the project's `.idea` directory

pub mod icon;
pub mod name;

use chrono::{DateTime, Utc};

pub use icon::find_icon;
pub use name::read_name_file;

use crate::error::Result;
use crate::models::{IdeKey, ProjectDescriptor};
use crate::utils::{expand_tilde, path_basename};

/// Builds the descriptor for one normalized recent-project path
///
/// `path` keeps its `~` form in the result; only filesystem lookups use the
/// expanded location.
///
/// # Errors
///
/// Returns an error if the project's `.idea/.name` exists but cannot be read.
pub fn describe_project(
    path: String,
    opened_at: Option<DateTime<Utc>>,
    ide: &IdeKey,
) -> Result<ProjectDescriptor> {
    let project_dir = expand_tilde(&path);

    let name = match read_name_file(&project_dir)? {
        Some(name) => name,
        None => path_basename(&path).to_string(),
    };
    let icon = find_icon(&project_dir);

    Ok(ProjectDescriptor { name, path, icon, score: 0, ide: ide.clone(), opened_at })
}
