//! # projtree TOML Project Manifest Reader
//!
//! File: cli/src/common/solution/manifest.rs
//! Author: Christi Mahu
//!
//! A manifest describes a solution tree directly, for hosts that do not have
//! a `.sln` file. Entries deserialize straight into `ProjectNode`; relative
//! `path` values are anchored at the manifest's directory.
//!
//! ```toml
//! name = "Shop"
//!
//! [[projects]]
//! name = "Solution Items"
//! kind = "container"
//!
//! [[projects]]
//! name = "App"
//! path = "src/App/App.csproj"
//!
//! [[projects.children]]
//! name = "Core"
//! path = "src/Core/Core.csproj"
//! ```
//!
use super::{anchor_path, solution_name, Solution};
use crate::core::error::{ProjtreeError, Result};
use anyhow::Context;
use projtree_lib::ProjectNode;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Manifest {
    /// Overrides the solution name derived from the file name.
    name: Option<String>,
    #[serde(default)]
    projects: Vec<ProjectNode>,
}

/// Reads and anchors a manifest file.
pub fn read_manifest(path: &Path) -> Result<Solution> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project manifest: {}", path.display()))?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|e| ProjtreeError::Manifest {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut projects = manifest.projects;
    anchor_paths(&mut projects, base_dir);
    debug!(
        "Loaded {} root entr(ies) from manifest {}",
        projects.len(),
        path.display()
    );

    Ok(Solution {
        name: manifest.name.unwrap_or_else(|| solution_name(path)),
        path: path.to_path_buf(),
        projects,
    })
}

/// Rewrites every non-empty relative path in the forest against `base_dir`.
fn anchor_paths(nodes: &mut [ProjectNode], base_dir: &Path) {
    let mut pending: Vec<&mut ProjectNode> = nodes.iter_mut().collect();
    while let Some(node) = pending.pop() {
        let ProjectNode {
            full_path,
            children,
            ..
        } = node;
        *full_path = anchor_path(base_dir, full_path);
        pending.extend(children.iter_mut());
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use projtree_lib::{walker, ProjectEntry, ProjectKind};
    use tempfile::tempdir;

    #[test]
    fn test_read_manifest_nested() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("shop.toml");
        fs::write(
            &path,
            r#"
name = "Shop"

[[projects]]
name = "Solution Items"
kind = "container"

[[projects]]
name = "App"
path = "src/App/App.csproj"

[[projects.children]]
name = "Core"
path = "/abs/Core/Core.csproj"
"#,
        )
        .unwrap();

        let solution = read_manifest(&path).unwrap();
        assert_eq!(solution.name, "Shop");
        assert_eq!(solution.projects[0].kind, ProjectKind::Container);
        assert_eq!(solution.projects[0].full_path, "");

        let app_path = temp_dir
            .path()
            .join("src/App/App.csproj")
            .to_string_lossy()
            .into_owned();
        assert_eq!(
            walker::enumerate(&solution.projects),
            vec![
                ProjectEntry::new("App", app_path),
                ProjectEntry::new("Core", "/abs/Core/Core.csproj"),
            ]
        );
    }

    #[test]
    fn test_read_manifest_name_defaults_to_file_stem() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("projtree.toml");
        fs::write(&path, "").unwrap();

        let solution = read_manifest(&path).unwrap();
        assert_eq!(solution.name, "projtree");
        assert!(solution.projects.is_empty());
    }

    #[test]
    fn test_read_manifest_invalid_kind() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[[projects]]\nname = \"App\"\nkind = \"folder\"\n").unwrap();

        let err = read_manifest(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid project manifest"));
    }

    #[test]
    fn test_read_manifest_syntax_error_reports_line() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[[projects]]\nname = \"App\"\npath = \n").unwrap();

        let err = read_manifest(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid project manifest"));
        assert!(message.contains("line 3"), "missing location: {message}");
    }
}
