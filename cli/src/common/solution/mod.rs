//! # projtree Solution Adapters (`common::solution`)
//!
//! File: cli/src/common/solution/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The adapter layer between files on disk and the host-independent walker.
//! Each reader turns a solution description into a fresh, immutable forest of
//! `ProjectNode` values; the walker never sees the file or the parser state.
//!
//! ## Architecture
//!
//! - `sln`: Visual Studio `.sln` reader (project blocks plus the
//!   `NestedProjects` section).
//! - `manifest`: TOML project manifest reader.
//! - `discover`: turns a user-supplied path (file or directory) into the
//!   solution file to read.
//!
//! Both readers guarantee an acyclic forest and absolute project paths, so
//! the walker's preconditions hold by construction.
//!
//! ## Usage
//!
//! ```rust
//! let path = solution::discover::resolve_solution_path(Path::new("."))?;
//! let solution = solution::load_solution(&path)?;
//! let entries = projtree_lib::walker::enumerate(&solution.projects);
//! ```
//!
use crate::core::error::{ProjtreeError, Result};
use projtree_lib::ProjectNode;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod discover;
pub mod manifest;
pub mod sln;

/// A loaded solution: its display name, where it came from, and its forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub name: String,
    pub path: PathBuf,
    pub projects: Vec<ProjectNode>,
}

/// The solution file formats the host can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionFormat {
    /// Visual Studio solution (`*.sln`).
    Sln,
    /// TOML project manifest (`*.toml`).
    Manifest,
}

impl SolutionFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "sln" => Some(Self::Sln),
            "toml" => Some(Self::Manifest),
            _ => None,
        }
    }
}

/// # Load Solution (`load_solution`)
///
/// Reads a solution file with the reader matching its extension.
///
/// ## Returns
///
/// * `Ok(Solution)` - The solution and its project forest.
/// * `Err` - The extension is not supported, the file cannot be read, or its
///   contents are invalid (bad manifest, nesting cycle).
pub fn load_solution(path: &Path) -> Result<Solution> {
    let format = SolutionFormat::from_path(path).ok_or_else(|| {
        ProjtreeError::UnsupportedSolution {
            path: path.display().to_string(),
        }
    })?;
    info!("Loading {:?} solution from {}", format, path.display());
    match format {
        SolutionFormat::Sln => sln::read_sln(path),
        SolutionFormat::Manifest => manifest::read_manifest(path),
    }
}

/// Display name for a solution file: its file stem.
pub(crate) fn solution_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Resolves a project location against the directory of the file declaring
/// it. Absolute paths and URLs (web site projects) are kept as they are.
pub(crate) fn anchor_path(base_dir: &Path, location: &str) -> String {
    if location.is_empty() || location.contains("://") {
        return location.to_string();
    }
    let normalized = location.replace('\\', "/");
    base_dir.join(normalized).to_string_lossy().into_owned()
}
