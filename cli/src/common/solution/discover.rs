//! # projtree Solution Discovery
//!
//! File: cli/src/common/solution/discover.rs
//! Author: Christi Mahu
//!
//! Resolves what the user pointed `projtree` at into a single solution file.
//! A file is used as-is when its extension is supported. A directory is
//! searched (two levels deep, in file-name order) for a `*.sln`, preferring
//! the shallowest match; without one, a `projtree.toml` manifest in the
//! directory itself is used.
//!
use super::SolutionFormat;
use crate::core::config::Config;
use crate::core::error::{ProjtreeError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Manifest file name looked up when a directory has no `.sln`.
pub const MANIFEST_FILENAME: &str = "projtree.toml";

const SEARCH_DEPTH: usize = 2;

/// # Choose Target (`choose_target`)
///
/// Picks the path to resolve: the explicit argument, else the configured
/// `listing.default_solution`, else the current directory.
pub fn choose_target(explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(configured) = &config.listing.default_solution {
        debug!("Using configured default solution: {}", configured);
        return Ok(PathBuf::from(configured));
    }
    std::env::current_dir().context("Failed to get current directory")
}

/// # Resolve Solution Path (`resolve_solution_path`)
///
/// ## Returns
///
/// * `Ok(PathBuf)` - The solution or manifest file to load.
/// * `Err(ProjtreeError::UnsupportedSolution)` - `target` is a file with an
///   unsupported extension.
/// * `Err(ProjtreeError::SolutionNotFound)` - `target` does not exist, or is
///   a directory containing neither a `.sln` nor a `projtree.toml`.
pub fn resolve_solution_path(target: &Path) -> Result<PathBuf> {
    if target.is_file() {
        return match SolutionFormat::from_path(target) {
            Some(_) => Ok(target.to_path_buf()),
            None => Err(ProjtreeError::UnsupportedSolution {
                path: target.display().to_string(),
            }
            .into()),
        };
    }

    if target.is_dir() {
        if let Some(sln) = find_sln(target) {
            debug!("Discovered solution file: {}", sln.display());
            return Ok(sln);
        }
        let manifest = target.join(MANIFEST_FILENAME);
        if manifest.is_file() {
            debug!("Discovered project manifest: {}", manifest.display());
            return Ok(manifest);
        }
    }

    Err(ProjtreeError::SolutionNotFound {
        path: target.display().to_string(),
    }
    .into())
}

fn find_sln(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(SEARCH_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && SolutionFormat::from_path(entry.path()) == Some(SolutionFormat::Sln)
        })
        // min_by_key keeps the first of equally shallow matches.
        .min_by_key(|entry| entry.depth())
        .map(|entry| entry.into_path())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ListingConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let sln = temp_dir.path().join("Shop.sln");
        fs::write(&sln, "").unwrap();
        assert_eq!(resolve_solution_path(&sln).unwrap(), sln);
    }

    #[test]
    fn test_resolve_unsupported_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("README.md");
        fs::write(&file, "").unwrap();
        let err = resolve_solution_path(&file).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjtreeError>(),
            Some(ProjtreeError::UnsupportedSolution { .. })
        ));
    }

    #[test]
    fn test_resolve_directory_prefers_shallow_sln() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("a_nested")).unwrap();
        fs::write(root.join("a_nested/Deep.sln"), "").unwrap();
        fs::write(root.join("z_Top.sln"), "").unwrap();
        fs::write(root.join(MANIFEST_FILENAME), "").unwrap();

        assert_eq!(resolve_solution_path(root).unwrap(), root.join("z_Top.sln"));
    }

    #[test]
    fn test_resolve_directory_finds_nested_sln() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("build")).unwrap();
        fs::write(root.join("build/Shop.sln"), "").unwrap();

        assert_eq!(
            resolve_solution_path(root).unwrap(),
            root.join("build/Shop.sln")
        );
    }

    #[test]
    fn test_resolve_directory_falls_back_to_manifest() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(MANIFEST_FILENAME), "").unwrap();

        assert_eq!(
            resolve_solution_path(root).unwrap(),
            root.join(MANIFEST_FILENAME)
        );
    }

    #[test]
    fn test_resolve_empty_directory() {
        let temp_dir = tempdir().unwrap();
        let err = resolve_solution_path(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("No solution file"));
    }

    #[test]
    fn test_resolve_missing_path() {
        let err = resolve_solution_path(Path::new("/path/that/absolutely/does/not/exist"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProjtreeError>(),
            Some(ProjtreeError::SolutionNotFound { .. })
        ));
    }

    #[test]
    fn test_choose_target_precedence() {
        let config = Config {
            listing: ListingConfig {
                default_solution: Some("/configured/Shop.sln".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            choose_target(Some(Path::new("/explicit.sln")), &config).unwrap(),
            PathBuf::from("/explicit.sln")
        );
        assert_eq!(
            choose_target(None, &config).unwrap(),
            PathBuf::from("/configured/Shop.sln")
        );
        assert_eq!(
            choose_target(None, &Config::default()).unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
