use std::borrow::Cow;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};
use crate::utils::environment::get_home_dir;

/// Placeholder JetBrains IDEs write in place of the user's home directory
pub const HOME_MARKER: &str = "$USER_HOME$";

// Maximum size for a recent projects file: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Replaces every home directory placeholder with `~`
///
/// # Examples
///
/// ```
/// use recent_projects::utils::normalize_home_marker;
///
/// assert_eq!(normalize_home_marker("$USER_HOME$/work/app"), "~/work/app");
/// assert_eq!(normalize_home_marker("/opt/app"), "/opt/app");
/// ```
pub fn normalize_home_marker(raw: &str) -> String {
    raw.replace(HOME_MARKER, "~")
}

/// Expands a leading `~` to the home directory of the running user
///
/// Paths that don't start with `~` (or `~/`) are returned unchanged, as are
/// all paths when no home directory can be determined.
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_internal(path, get_home_dir().as_deref())
}

/// Internal helper for tilde expansion with an explicit home (for testing)
pub(crate) fn expand_tilde_internal(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(path),
    }
}

/// Last segment of a stored project path, used as the fallback display name
///
/// Trailing separators are ignored. When nothing is left (e.g. `/`), the
/// path itself is returned so the name is never empty.
///
/// # Examples
///
/// ```
/// use recent_projects::utils::path_basename;
///
/// assert_eq!(path_basename("~/work/app"), "app");
/// assert_eq!(path_basename("C:\\work\\app\\"), "app");
/// ```
pub fn path_basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    match trimmed.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => path,
    }
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file.metadata().map_err(|e| ExtractError::io(path, e))?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(ExtractError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use recent_projects::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/work/app/.idea/icon.png");
/// // Returns "~/work/app/.idea/icon.png" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home = match home_override {
        Some(home) => Some(PathBuf::from(home)),
        None => get_home_dir(),
    };

    // Component-wise so /home/al is not a prefix of /home/alice
    if let Some(home) = home
        && !home.as_os_str().is_empty()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    // Avoid double allocation when converting Cow to String
    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
