use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use roxmltree::{Document, ParsingOptions};
use tracing::debug;

use crate::enrichment::describe_project;
use crate::error::{ExtractError, Result};
use crate::models::{IdeKey, ProjectDescriptor};
use crate::parsers::rules::collect_entries;
use crate::utils::{normalize_home_marker, validate_file_size};

/// A de-duplicated, normalized project path with the metadata found alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentPath {
    pub path: String,
    pub opened_at: Option<DateTime<Utc>>,
}

/// Extract the recent projects recorded in a JetBrains `recentProjects.xml` file
///
/// Paths from every known location are normalized (`$USER_HOME$` becomes `~`),
/// de-duplicated keeping the first occurrence, and enriched with a display
/// name and icon from the project's `.idea` directory.
///
/// # Arguments
///
/// * `document_path` - Path to the recent projects file
/// * `ide` - IDE the file belongs to, copied into every descriptor
///
/// # Returns
///
/// Returns an empty Vec if the file doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but is not well-formed UTF-8 XML ([`ExtractError::is_malformed`])
/// - The file exists but cannot be read, or is larger than 10MB
/// - A project's `.idea/.name` file exists but cannot be read
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use recent_projects::{IdeKey, extract_recent_projects};
///
/// let file = Path::new("/home/alice/.config/JetBrains/PyCharm2024.1/options/recentProjects.xml");
/// let projects = extract_recent_projects(file, &IdeKey::new("pycharm"))?;
/// for project in &projects {
///     println!("{} ({})", project.name, project.path);
/// }
/// # Ok::<(), recent_projects::ExtractError>(())
/// ```
pub fn extract(document_path: &Path, ide: &IdeKey) -> Result<Vec<ProjectDescriptor>> {
    let Some(text) = read_document(document_path)? else {
        debug!(path = %document_path.display(), "Recent projects file not found");
        return Ok(Vec::new());
    };

    let paths = parse_recent_paths(&text)
        .map_err(|source| ExtractError::Malformed { path: document_path.to_path_buf(), source })?;

    let projects = paths
        .into_iter()
        .map(|recent| describe_project(recent.path, recent.opened_at, ide))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        path = %document_path.display(),
        ide = %ide,
        count = projects.len(),
        "Extracted recent projects"
    );

    Ok(projects)
}

/// Parse document text into unique normalized paths, in first-seen order
///
/// # Errors
///
/// Returns the XML parser error if `text` is not well-formed.
pub fn parse_recent_paths(text: &str) -> std::result::Result<Vec<RecentPath>, roxmltree::Error> {
    // JetBrains never writes a DOCTYPE, but a hand-edited file with one is still well-formed
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(text, options)?;

    // Position of each path in `unique`, so later duplicates can fill in metadata
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<RecentPath> = Vec::new();
    for entry in collect_entries(&doc) {
        let path = normalize_home_marker(entry.path);
        match seen.get(&path) {
            Some(&index) => {
                let existing = &mut unique[index];
                if existing.opened_at.is_none() {
                    existing.opened_at = entry.opened_at;
                }
            }
            None => {
                seen.insert(path.clone(), unique.len());
                unique.push(RecentPath { path, opened_at: entry.opened_at });
            }
        }
    }

    Ok(unique)
}

/// Reads the whole document, or `None` when there is no file to read
fn read_document(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }

    let mut file = match File::open(path) {
        Ok(file) => file,
        // Removed between the check and the open
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ExtractError::io(path, e)),
    };
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| ExtractError::io(path, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ExtractError::Encoding { path: path.to_path_buf(), source: e.utf8_error() })?;
    Ok(Some(text))
}
