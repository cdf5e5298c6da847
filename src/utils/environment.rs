use std::env;
use std::path::PathBuf;

/// Get the current user's home directory
///
/// `HOME` wins when set and non-empty so callers (and tests) can redirect it;
/// otherwise the platform lookup from `dirs` is used.
pub fn get_home_dir() -> Option<PathBuf> {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir(),
    }
}
