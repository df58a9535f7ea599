//! # projtree Project Tree Walker
//!
//! File: lib/src/walker.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module flattens a forest of solution entries into the ordered list of
//! "real" projects it contains. Solution folders (container nodes) group
//! projects but have no build output of their own, so they are never listed,
//! although everything underneath them is.
//!
//! ## Architecture
//!
//! - `ProjectNode`: immutable snapshot of one solution entry, built by the
//!   host before each invocation. Children are owned, so a forest of
//!   `ProjectNode` values cannot contain a cycle. Dropping a node frees its
//!   subtree with an explicit stack too. A project reachable from
//!   several parents must be cloned under each of them and is then listed
//!   once per parent.
//! - `PreOrder`: an iterator over `(node, depth)` pairs in depth-first
//!   pre-order, driven by an explicit stack so deep nesting cannot overflow
//!   the call stack.
//! - `enumerate`: the plain listing. `enumerate_with` adds opt-in
//!   deduplication and a cancellation flag checked between node visits.
//! - `summarize`: project/container counts and nesting depth, for logs and
//!   the `tree` footer.
//!
//! ## Examples
//!
//! ```rust
//! use projtree_lib::walker::{enumerate, ProjectEntry, ProjectNode};
//!
//! let forest = vec![
//!     ProjectNode::project("A", "/a").with_children(vec![ProjectNode::project("A1", "/a1")]),
//!     ProjectNode::project("B", "/b"),
//! ];
//! let names: Vec<_> = enumerate(&forest).into_iter().map(|e| e.name).collect();
//! assert_eq!(names, vec!["A", "A1", "B"]);
//! ```
//!
use crate::error::WalkError;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};

/// Distinguishes buildable projects from organizational grouping nodes.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// A regular project with an artifact of its own.
    #[default]
    Project,
    /// A solution folder: listed for its contents, never for itself.
    Container,
}

/// # Project Node (`ProjectNode`)
///
/// One entry in a solution tree. In TOML manifests the fields are spelled
/// `name`, `path`, `kind` (`"project"` or `"container"`) and `children`; all
/// of them are optional so a sparse entry still produces a node.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectNode {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Fully qualified location. Empty for containers and unresolved entries.
    #[serde(default, rename = "path")]
    pub full_path: String,
    #[serde(default)]
    pub kind: ProjectKind,
    /// Nested sub-projects, in discovery order.
    #[serde(default)]
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    /// Creates a childless regular project.
    pub fn project(name: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            kind: ProjectKind::Project,
            children: Vec::new(),
        }
    }

    /// Creates a childless container (solution folder) with no path.
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_path: String::new(),
            kind: ProjectKind::Container,
            children: Vec::new(),
        }
    }

    /// Replaces the node's children, builder style.
    pub fn with_children(mut self, children: Vec<ProjectNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_container(&self) -> bool {
        self.kind == ProjectKind::Container
    }

    fn entry(&self) -> ProjectEntry {
        ProjectEntry {
            name: self.name.clone(),
            full_path: self.full_path.clone(),
        }
    }
}

impl Drop for ProjectNode {
    fn drop(&mut self) {
        // Detach descendants so each one drops with no children left.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A listed project: the `(name, full_path)` pair produced by the walker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectEntry {
    pub name: String,
    pub full_path: String,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
        }
    }
}

/// # Walk Options (`WalkOptions`)
///
/// Opt-in adjustments to the plain listing. The default value reproduces
/// [`enumerate`] exactly.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkOptions<'a> {
    /// Emit only the first occurrence of each identical `(name, full_path)`
    /// pair. Off by default: a project nested under two parents is listed
    /// twice unless the caller asks otherwise.
    pub dedupe: bool,
    /// Checked before each node visit; once set, the walk stops with
    /// [`WalkError::Cancelled`].
    pub cancel: Option<&'a AtomicBool>,
}

/// Counts gathered by [`summarize`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub projects: usize,
    pub containers: usize,
    /// Number of nesting levels; 0 for an empty forest, 1 for roots only.
    pub max_depth: usize,
}

/// # Pre-Order Iterator (`PreOrder`)
///
/// Yields every node of a forest with its zero-based depth: a node first,
/// then its children in order, then its next sibling.
pub struct PreOrder<'a> {
    stack: Vec<(&'a ProjectNode, usize)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (&'a ProjectNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}

/// Iterates a forest in depth-first pre-order.
pub fn pre_order(roots: &[ProjectNode]) -> PreOrder<'_> {
    PreOrder {
        stack: roots.iter().rev().map(|root| (root, 0)).collect(),
    }
}

/// # Enumerate Projects (`enumerate`)
///
/// Lists every non-container node reachable from `roots` in depth-first
/// pre-order, one entry per path by which the node is reached. Containers
/// are skipped but their children are still visited.
///
/// Never fails and never mutates its input. Returns an empty vector for an
/// empty forest or a forest of childless containers.
pub fn enumerate(roots: &[ProjectNode]) -> Vec<ProjectEntry> {
    pre_order(roots)
        .filter(|(node, _)| !node.is_container())
        .map(|(node, _)| node.entry())
        .collect()
}

/// # Enumerate With Options (`enumerate_with`)
///
/// Same traversal as [`enumerate`], honoring [`WalkOptions`].
///
/// ## Returns
///
/// * `Ok(Vec<ProjectEntry>)` - The listing.
/// * `Err(WalkError::Cancelled)` - The cancellation flag was observed set
///   before a node visit; `visited` counts the nodes handled up to then.
pub fn enumerate_with(
    roots: &[ProjectNode],
    options: &WalkOptions<'_>,
) -> Result<Vec<ProjectEntry>, WalkError> {
    let mut entries = Vec::new();
    let mut seen: HashSet<ProjectEntry> = HashSet::new();
    let mut visited = 0;

    for (node, depth) in pre_order(roots) {
        if options
            .cancel
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            debug!("Project walk cancelled after {} node(s)", visited);
            return Err(WalkError::Cancelled { visited });
        }
        visited += 1;
        trace!(name = %node.name, depth, kind = ?node.kind, "Visiting node");

        if node.is_container() {
            continue;
        }
        let entry = node.entry();
        if options.dedupe && !seen.insert(entry.clone()) {
            debug!(
                "Skipping repeated project '{}' ({})",
                entry.name, entry.full_path
            );
            continue;
        }
        entries.push(entry);
    }

    debug!(
        "Enumerated {} project(s) from {} node(s)",
        entries.len(),
        visited
    );
    Ok(entries)
}

/// Counts projects and containers and measures the nesting depth of a forest.
pub fn summarize(roots: &[ProjectNode]) -> WalkSummary {
    pre_order(roots).fold(WalkSummary::default(), |mut summary, (node, depth)| {
        if node.is_container() {
            summary.containers += 1;
        } else {
            summary.projects += 1;
        }
        summary.max_depth = summary.max_depth.max(depth + 1);
        summary
    })
}
