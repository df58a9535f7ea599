//! # projtree Visual Studio Solution Reader
//!
//! File: cli/src/common/solution/sln.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds a `ProjectNode` forest from a Visual Studio `.sln` file. Only the
//! two parts of the format that describe the project tree are read:
//!
//! ```text
//! Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "src\App\App.csproj", "{6F1B...}"
//! EndProject
//! Project("{2150E333-8FDC-42A3-9474-1A3956D46DE8}") = "Solution Items", "Solution Items", "{9C2D...}"
//! EndProject
//! Global
//!     GlobalSection(NestedProjects) = preSolution
//!         {6F1B...} = {9C2D...}
//!     EndGlobalSection
//! EndGlobal
//! ```
//!
//! Each `Project(...)` line declares an entry: its type GUID, name, path
//! relative to the solution, and its own GUID. `NestedProjects` lines map a
//! child GUID to its parent GUID. Everything else is ignored.
//!
//! ## Resolution Rules
//!
//! - Solution folder type GUIDs become containers with an empty path.
//! - Project paths are anchored at the solution's directory.
//! - Children keep the order their `Project` lines appear in the file.
//! - A child whose parent GUID is not declared becomes a root (logged).
//! - A nesting cycle is rejected with `ProjtreeError::NestingCycle`, so the
//!   walker never receives a graph it could loop on.
//!
use super::{anchor_path, solution_name, Solution};
use crate::core::error::{ProjtreeError, Result};
use anyhow::Context;
use projtree_lib::{ProjectKind, ProjectNode};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};
use tracing::{debug, warn};

/// Type GUIDs that mark a solution folder rather than a project. The first
/// is written in `.sln` files; the second is the automation model's
/// solution-folder kind, accepted for hand-written or exported files.
const SOLUTION_FOLDER_TYPE_GUIDS: [&str; 2] = [
    "2150E333-8FDC-42A3-9474-1A3956D46DE8",
    "66A26720-8FB5-11D2-AA7E-00C04F688DDE",
];

const NESTED_PROJECTS_SECTION: &str = "GlobalSection(NestedProjects)";
const END_SECTION: &str = "EndGlobalSection";

/// One `Project(...)` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SlnEntry {
    type_guid: String,
    name: String,
    location: String,
    guid: String,
}

impl SlnEntry {
    fn kind(&self) -> ProjectKind {
        if SOLUTION_FOLDER_TYPE_GUIDS.contains(&self.type_guid.as_str()) {
            ProjectKind::Container
        } else {
            ProjectKind::Project
        }
    }
}

/// Reads a `.sln` file from disk.
pub fn read_sln(path: &Path) -> Result<Solution> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read solution file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let projects = parse_sln(&content, base_dir)
        .with_context(|| format!("Failed to load solution: {}", path.display()))?;
    Ok(Solution {
        name: solution_name(path),
        path: path.to_path_buf(),
        projects,
    })
}

/// # Parse Solution Text (`parse_sln`)
///
/// Parses `.sln` content into a forest, anchoring project paths at
/// `base_dir`.
///
/// ## Returns
///
/// * `Ok(Vec<ProjectNode>)` - Roots in file order, children nested.
/// * `Err` - The `NestedProjects` section contains a cycle.
pub fn parse_sln(content: &str, base_dir: &Path) -> Result<Vec<ProjectNode>> {
    let (entries, nesting) = scan(content);
    debug!(
        "Scanned {} project entr(ies) and {} nesting rule(s)",
        entries.len(),
        nesting.len()
    );

    let index_by_guid: HashMap<&str, usize> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.guid.as_str(), index))
        .collect();

    // Parent index for each entry; None for roots.
    let mut parents: Vec<Option<usize>> = vec![None; entries.len()];
    for (child_guid, parent_guid) in &nesting {
        let Some(&child) = index_by_guid.get(child_guid.as_str()) else {
            warn!(
                "Ignoring nesting rule for undeclared project {{{}}}.",
                child_guid
            );
            continue;
        };
        match index_by_guid.get(parent_guid.as_str()) {
            Some(&parent) => parents[child] = Some(parent),
            None => warn!(
                "Parent {{{}}} of project '{}' is not declared; listing it at the top level.",
                parent_guid, entries[child].name
            ),
        }
    }

    reject_cycles(&entries, &parents)?;

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
    let mut roots = Vec::new();
    for (index, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(index),
            None => roots.push(index),
        }
    }

    Ok(roots
        .into_iter()
        .map(|root| build_node(root, &entries, &children, base_dir))
        .collect())
}

/// Collects `Project` declarations and `NestedProjects` rules, in file order.
fn scan(content: &str) -> (Vec<SlnEntry>, Vec<(String, String)>) {
    let mut entries: Vec<SlnEntry> = Vec::new();
    let mut nesting: Vec<(String, String)> = Vec::new();
    let mut in_nested_section = false;

    for (line_number, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        if in_nested_section {
            if line.starts_with(END_SECTION) {
                in_nested_section = false;
            } else if let Some((child, parent)) = line.split_once('=') {
                nesting.push((normalize_guid(child), normalize_guid(parent)));
            }
            continue;
        }

        if line.starts_with(NESTED_PROJECTS_SECTION) {
            in_nested_section = true;
        } else if line.starts_with("Project(") {
            match parse_project_line(line) {
                Some(entry) => {
                    if entries.iter().any(|existing| existing.guid == entry.guid) {
                        warn!(
                            "Line {}: duplicate project GUID {{{}}} for '{}'; keeping the first declaration.",
                            line_number + 1,
                            entry.guid,
                            entry.name
                        );
                    } else {
                        entries.push(entry);
                    }
                }
                None => warn!(
                    "Line {}: skipping malformed project declaration: {}",
                    line_number + 1,
                    line
                ),
            }
        }
    }

    (entries, nesting)
}

/// Parses `Project("{TYPE}") = "Name", "Path", "{GUID}"`.
fn parse_project_line(line: &str) -> Option<SlnEntry> {
    // Quoted values sit at the odd positions of a split on '"'.
    let quoted: Vec<&str> = line.split('"').skip(1).step_by(2).collect();
    match quoted.as_slice() {
        [type_guid, name, location, guid, ..] => Some(SlnEntry {
            type_guid: normalize_guid(type_guid),
            name: name.to_string(),
            location: location.to_string(),
            guid: normalize_guid(guid),
        }),
        _ => None,
    }
}

/// Uppercases a GUID and strips its braces and surrounding whitespace.
fn normalize_guid(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .to_ascii_uppercase()
}

fn reject_cycles(entries: &[SlnEntry], parents: &[Option<usize>]) -> Result<()> {
    for start in 0..entries.len() {
        let mut seen = HashSet::from([start]);
        let mut current = start;
        while let Some(parent) = parents[current] {
            if !seen.insert(parent) {
                return Err(ProjtreeError::NestingCycle {
                    name: entries[parent].name.clone(),
                }
                .into());
            }
            current = parent;
        }
    }
    Ok(())
}

fn build_node(
    index: usize,
    entries: &[SlnEntry],
    children: &[Vec<usize>],
    base_dir: &Path,
) -> ProjectNode {
    let entry = &entries[index];
    let kind = entry.kind();
    let full_path = match kind {
        ProjectKind::Container => String::new(),
        ProjectKind::Project => anchor_path(base_dir, &entry.location),
    };
    ProjectNode {
        name: entry.name.clone(),
        full_path,
        kind,
        children: children[index]
            .iter()
            .map(|&child| build_node(child, entries, children, base_dir))
            .collect(),
    }
}
