use std::path::{Path, PathBuf};

use tracing::debug;

/// Finds a per-project icon matching `<project>/.idea/icon.*`
///
/// When several files match, the first one the directory walk yields is
/// returned. Lookup problems are logged and treated as "no icon".
pub fn find_icon(project_dir: &Path) -> Option<PathBuf> {
    let pattern = format!("{}/.idea/icon.*", glob::Pattern::escape(&project_dir.to_string_lossy()));

    let paths = match glob::glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            debug!(pattern = %pattern, error = %e, "Invalid icon pattern");
            return None;
        }
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "Skipping unreadable icon candidate");
                None
            }
        })
        .next()
}
