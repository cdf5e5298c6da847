pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::get_home_dir;
pub use paths::{
    HOME_MARKER, expand_tilde, format_path_with_tilde, normalize_home_marker, path_basename,
    validate_file_size,
};
