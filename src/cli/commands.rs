use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing::warn;

use crate::models::{IdeKey, ProjectDescriptor};
use crate::parsers::extract;
use crate::utils::format_path_with_tilde;
use crate::utils::terminal::sanitize_field;

#[derive(Parser)]
#[command(name = "recent-projects")]
#[command(version = "0.1.0")]
#[command(about = "List recently opened projects from JetBrains IDE configuration files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the recent projects recorded in one or more recentProjects.xml files
    List {
        /// IDE the files belong to, copied into every project
        #[arg(long)]
        ide: IdeKey,

        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,

        /// Warn about files that are not valid XML instead of failing
        #[arg(long)]
        skip_malformed: bool,

        /// recentProjects.xml files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { ide, json, skip_malformed, files }) => {
            let projects = list_projects(&files, &ide, skip_malformed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                for project in &projects {
                    println!("{}", format_line(project));
                }
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Extracts every file concurrently, keeping results in argument order
fn list_projects(
    files: &[PathBuf],
    ide: &IdeKey,
    skip_malformed: bool,
) -> Result<Vec<ProjectDescriptor>> {
    let results: Vec<_> = files.par_iter().map(|file| (file, extract(file, ide))).collect();

    let mut projects = Vec::new();
    for (file, result) in results {
        match result {
            Ok(found) => projects.extend(found),
            Err(e) if skip_malformed && e.is_malformed() => {
                warn!(path = %file.display(), error = %e, "Skipping malformed recent projects file");
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to list projects from {}", file.display()));
            }
        }
    }

    Ok(projects)
}

fn format_line(project: &ProjectDescriptor) -> String {
    let mut line = format!("{}\t{}", sanitize_field(&project.name), sanitize_field(&project.path));
    if let Some(icon) = &project.icon {
        line.push('\t');
        line.push_str(&sanitize_field(&format_path_with_tilde(icon)));
    }
    line
}
