//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for the contents of one manager component
#[derive(Default, Clone)]
pub struct ManagerBuilder {
    recent_paths: Vec<String>,
    additional_info: Vec<(String, Option<i64>)>,
    groups: Vec<(String, Vec<String>)>,
    raw: Vec<String>,
}

impl ManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an `<option value="..."/>` to `recentPaths`
    pub fn recent_path(mut self, path: &str) -> Self {
        self.recent_paths.push(path.to_string());
        self
    }

    /// Add an `<entry key="..."/>` to `additionalInfo`
    pub fn info(mut self, path: &str) -> Self {
        self.additional_info.push((path.to_string(), None));
        self
    }

    /// Add an `additionalInfo` entry carrying a `projectOpenTimestamp`
    pub fn info_opened_at(mut self, path: &str, timestamp_ms: i64) -> Self {
        self.additional_info.push((path.to_string(), Some(timestamp_ms)));
        self
    }

    /// Add a project group with the given member paths
    pub fn group(mut self, name: &str, paths: &[&str]) -> Self {
        self.groups.push((name.to_string(), paths.iter().map(|p| p.to_string()).collect()));
        self
    }

    /// Add arbitrary XML inside the component
    pub fn raw(mut self, xml: &str) -> Self {
        self.raw.push(xml.to_string());
        self
    }

    fn to_xml(&self, component: &str) -> String {
        let mut xml = format!("  <component name=\"{}\">\n", component);

        if !self.recent_paths.is_empty() {
            xml.push_str("    <option name=\"recentPaths\">\n      <list>\n");
            for path in &self.recent_paths {
                xml.push_str(&format!("        <option value=\"{}\" />\n", path));
            }
            xml.push_str("      </list>\n    </option>\n");
        }

        if !self.groups.is_empty() {
            xml.push_str("    <option name=\"groups\">\n      <list>\n");
            for (name, paths) in &self.groups {
                xml.push_str("        <ProjectGroup>\n");
                xml.push_str(&format!("          <option name=\"name\" value=\"{}\" />\n", name));
                xml.push_str("          <option name=\"projects\">\n            <list>\n");
                for path in paths {
                    xml.push_str(&format!("              <option value=\"{}\" />\n", path));
                }
                xml.push_str("            </list>\n          </option>\n        </ProjectGroup>\n");
            }
            xml.push_str("      </list>\n    </option>\n");
        }

        if !self.additional_info.is_empty() {
            xml.push_str("    <option name=\"additionalInfo\">\n      <map>\n");
            for (path, timestamp) in &self.additional_info {
                xml.push_str(&format!("        <entry key=\"{}\">\n", path));
                xml.push_str("          <value>\n            <RecentProjectMetaInfo>\n");
                if let Some(ts) = timestamp {
                    xml.push_str(&format!(
                        "              <option name=\"projectOpenTimestamp\" value=\"{}\" />\n",
                        ts
                    ));
                }
                xml.push_str("            </RecentProjectMetaInfo>\n          </value>\n");
                xml.push_str("        </entry>\n");
            }
            xml.push_str("      </map>\n    </option>\n");
        }

        for raw in &self.raw {
            xml.push_str(raw);
            xml.push('\n');
        }

        xml.push_str("  </component>\n");
        xml
    }
}

/// Builder for a whole recentProjects.xml document
#[derive(Default)]
pub struct RecentProjectsXml {
    projects_manager: Option<ManagerBuilder>,
    directory_manager: Option<ManagerBuilder>,
}

impl RecentProjectsXml {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `RecentProjectsManager` component
    pub fn projects_manager(mut self, manager: ManagerBuilder) -> Self {
        self.projects_manager = Some(manager);
        self
    }

    /// Set the `RecentDirectoryProjectsManager` component
    pub fn directory_manager(mut self, manager: ManagerBuilder) -> Self {
        self.directory_manager = Some(manager);
        self
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<application>\n");
        if let Some(manager) = &self.directory_manager {
            xml.push_str(&manager.to_xml("RecentDirectoryProjectsManager"));
        }
        if let Some(manager) = &self.projects_manager {
            xml.push_str(&manager.to_xml("RecentProjectsManager"));
        }
        xml.push_str("</application>\n");
        xml
    }

    /// Write the document into `dir` as recentProjects.xml
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("recentProjects.xml");
        fs::write(&path, self.to_xml()).expect("Failed to write recentProjects.xml");
        path
    }
}

/// Builder for a project directory with optional `.idea` metadata
pub struct ProjectDirBuilder {
    dir: PathBuf,
}

impl ProjectDirBuilder {
    /// Create `<root>/<relative>` (and parents)
    pub fn new(root: &Path, relative: &str) -> Self {
        let dir = root.join(relative);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        Self { dir }
    }

    /// Write `.idea/.name` with the given contents
    pub fn with_name_file(self, contents: &str) -> Self {
        let idea = self.dir.join(".idea");
        fs::create_dir_all(&idea).expect("Failed to create .idea dir");
        fs::write(idea.join(".name"), contents).expect("Failed to write .name");
        self
    }

    /// Write `.idea/<file_name>` as an icon
    pub fn with_icon(self, file_name: &str) -> Self {
        let idea = self.dir.join(".idea");
        fs::create_dir_all(&idea).expect("Failed to create .idea dir");
        fs::write(idea.join(file_name), b"icon").expect("Failed to write icon");
        self
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Project path as an IDE would store it
    pub fn path_string(&self) -> String {
        self.dir.to_string_lossy().into_owned()
    }
}

/// Temp directory holding a realistic document plus the projects it refers to
pub fn realistic_workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let backend = ProjectDirBuilder::new(root, "work/backend").with_name_file("Backend API\n");
    let frontend = ProjectDirBuilder::new(root, "work/frontend").with_icon("icon.svg");
    let scratch = ProjectDirBuilder::new(root, "scratch");

    let document = RecentProjectsXml::new()
        .projects_manager(
            ManagerBuilder::new()
                .recent_path(&backend.path_string())
                .recent_path(&frontend.path_string())
                .info_opened_at(&backend.path_string(), 1_700_000_000_000)
                .group("Playground", &[&scratch.path_string()]),
        )
        .directory_manager(ManagerBuilder::new().info(&frontend.path_string()))
        .write_to(root);

    (temp_dir, document)
}
