//! Declarative locations of path-bearing entries in a recent projects file
//!
//! JetBrains IDEs have stored recent projects under two manager components
//! and three layouts over the years. Each known location is one
//! [`ExtractionRule`]; supporting another layout means adding a row to
//! [`EXTRACTION_RULES`].

use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};
use tracing::{debug, warn};

/// Manager component that owns a block of recent project data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manager {
    /// `RecentProjectsManager`
    Projects,
    /// `RecentDirectoryProjectsManager`, used by the "directory based" IDEs
    DirectoryProjects,
}

impl Manager {
    pub const fn component_name(self) -> &'static str {
        match self {
            Manager::Projects => "RecentProjectsManager",
            Manager::DirectoryProjects => "RecentDirectoryProjectsManager",
        }
    }

    /// First `component` element carrying this manager's name, in document order
    pub fn locate<'a, 'input>(self, doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
        doc.descendants().find(|node| {
            node.has_tag_name("component") && node.attribute("name") == Some(self.component_name())
        })
    }
}

/// One child-axis step: an element tag, optionally constrained by its `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    tag: &'static str,
    name: Option<&'static str>,
}

impl Step {
    pub const fn element(tag: &'static str) -> Self {
        Self { tag, name: None }
    }

    pub const fn named(tag: &'static str, name: &'static str) -> Self {
        Self { tag, name: Some(name) }
    }

    fn matches(&self, node: Node<'_, '_>) -> bool {
        node.is_element()
            && node.has_tag_name(self.tag)
            && self.name.is_none_or(|name| node.attribute("name") == Some(name))
    }
}

/// Walks `steps` from `root`, keeping every matching child at each level
pub fn select<'a, 'input>(root: Node<'a, 'input>, steps: &[Step]) -> Vec<Node<'a, 'input>> {
    let mut current = vec![root];
    for step in steps {
        current = current
            .into_iter()
            .flat_map(|node| node.children().filter(move |child| step.matches(*child)))
            .collect();
    }
    current
}

/// How a location stores the project path on its entry nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// `<option value="..."/>` items of a `<list>`
    List,
    /// `<entry key="...">` items of a `<map>`
    Map,
}

impl EntryShape {
    /// Path stored on `node`, trying the shape's own attribute first
    pub fn path_of<'a>(self, node: Node<'a, '_>) -> Option<&'a str> {
        let (primary, fallback) = match self {
            EntryShape::List => ("value", "key"),
            EntryShape::Map => ("key", "value"),
        };
        node.attribute(primary).or_else(|| node.attribute(fallback))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExtractionRule {
    pub label: &'static str,
    pub manager: Manager,
    pub steps: &'static [Step],
    pub shape: EntryShape,
}

const RECENT_PATHS: &[Step] =
    &[Step::named("option", "recentPaths"), Step::element("list"), Step::element("option")];

const ADDITIONAL_INFO: &[Step] =
    &[Step::named("option", "additionalInfo"), Step::element("map"), Step::element("entry")];

const GROUP_PROJECTS: &[Step] = &[
    Step::named("option", "groups"),
    Step::element("list"),
    Step::element("ProjectGroup"),
    Step::named("option", "projects"),
    Step::element("list"),
    Step::element("option"),
];

/// Metadata under an `additionalInfo` entry holding the last open time (ms since epoch)
const OPEN_TIMESTAMP: &[Step] = &[
    Step::element("value"),
    Step::element("RecentProjectMetaInfo"),
    Step::named("option", "projectOpenTimestamp"),
];

/// All known locations, in precedence order. Earlier rules win deduplication
/// and decide output position.
pub const EXTRACTION_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        label: "recentPaths",
        manager: Manager::Projects,
        steps: RECENT_PATHS,
        shape: EntryShape::List,
    },
    ExtractionRule {
        label: "recentPaths",
        manager: Manager::DirectoryProjects,
        steps: RECENT_PATHS,
        shape: EntryShape::List,
    },
    ExtractionRule {
        label: "additionalInfo",
        manager: Manager::Projects,
        steps: ADDITIONAL_INFO,
        shape: EntryShape::Map,
    },
    ExtractionRule {
        label: "additionalInfo",
        manager: Manager::DirectoryProjects,
        steps: ADDITIONAL_INFO,
        shape: EntryShape::Map,
    },
    ExtractionRule {
        label: "groups",
        manager: Manager::Projects,
        steps: GROUP_PROJECTS,
        shape: EntryShape::List,
    },
];

/// A project path as stored in the document, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub path: &'a str,
    pub opened_at: Option<DateTime<Utc>>,
}

/// Applies [`EXTRACTION_RULES`] to `doc`, returning entries in rule order
///
/// Entry nodes whose path attribute is missing, empty or blank are logged and skipped.
pub fn collect_entries<'a>(doc: &'a Document<'_>) -> Vec<RawEntry<'a>> {
    let projects = Manager::Projects.locate(doc);
    let directory_projects = Manager::DirectoryProjects.locate(doc);
    debug!(
        has_projects_manager = projects.is_some(),
        has_directory_projects_manager = directory_projects.is_some(),
        "Located recent project managers"
    );

    let mut entries = Vec::new();
    for rule in EXTRACTION_RULES {
        let manager_node = match rule.manager {
            Manager::Projects => projects,
            Manager::DirectoryProjects => directory_projects,
        };
        let Some(manager_node) = manager_node else {
            continue;
        };

        for node in select(manager_node, rule.steps) {
            let path = rule.shape.path_of(node).filter(|path| !path.trim().is_empty());
            let Some(path) = path else {
                warn!(
                    manager = rule.manager.component_name(),
                    location = rule.label,
                    position = ?doc.text_pos_at(node.range().start),
                    "Skipping recent project entry without a usable path"
                );
                continue;
            };

            let opened_at = match rule.shape {
                EntryShape::Map => open_timestamp(node),
                EntryShape::List => None,
            };
            entries.push(RawEntry { path, opened_at });
        }
    }

    entries
}

fn open_timestamp(entry: Node<'_, '_>) -> Option<DateTime<Utc>> {
    let raw = select(entry, OPEN_TIMESTAMP).into_iter().find_map(|n| n.attribute("value"))?;

    match raw.trim().parse::<i64>().ok().and_then(DateTime::from_timestamp_millis) {
        Some(ts) => Some(ts),
        None => {
            debug!(value = raw, "Ignoring unparseable projectOpenTimestamp");
            None
        }
    }
}
