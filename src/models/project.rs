use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::IdeKey;

/// One recently opened project, as recorded by an IDE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    /// Display name, never empty
    pub name: String,
    /// Project location with the home directory shown as `~`; identity key
    pub path: String,
    pub icon: Option<PathBuf>,
    /// Always 0 here; ranking happens downstream
    pub score: u32,
    pub ide: IdeKey,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
}
