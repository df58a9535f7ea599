//! # projtree Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the `projtree` configuration.
//! Every key has a default, so running without any configuration file is
//! the normal case.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.projtree.toml` in the current directory or an
//!    ancestor (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/projtree/config.toml`), or the file named by the
//!    `PROJTREE_CONFIG` environment variable
//! 3. Default values defined in the code
//!
//! Each file's `default_solution` is `~`-expanded and, when relative, anchored
//! to the directory of the file that declares it. Boolean keys left out of
//! the project file fall back to the user file. The merged result is then
//! validated.
//!
//! ## Examples
//!
//! ```toml
//! [listing]
//! dedupe = true
//! default_solution = "~/src/shop/Shop.sln"
//!
//! [output]
//! clear = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let dedupe = args.dedupe || cfg.listing.dedupe.unwrap_or(false);
//! ```
//!
use crate::common::solution::SolutionFormat;
use crate::core::error::{ProjtreeError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for how projects are collected (`projtree list`, `projtree tree`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// List a project reachable through several parents only once.
    #[serde(default)]
    pub dedupe: Option<bool>,
    /// Solution file or directory used when no path is given (can use ~).
    #[serde(default)]
    pub default_solution: Option<String>,
}

/// Settings for the output pane.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Clear the pane before writing the listing.
    #[serde(default)]
    pub clear: Option<bool>,
}

const PROJECT_CONFIG_FILENAME: &str = ".projtree.toml";
const CONFIG_PATH_ENV: &str = "PROJTREE_CONFIG";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
        let config_path = PathBuf::from(explicit);
        info!(
            "Loading user configuration from {}: {}",
            CONFIG_PATH_ENV,
            config_path.display()
        );
        return load_config_from_path(&config_path).map(Some);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "projtree", "projtree") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.projtree.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    resolve_config_paths(&mut config, base_dir);
    Ok(config)
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.listing.dedupe = project_cfg.listing.dedupe.or(user.listing.dedupe);
    merged.listing.default_solution = project_cfg
        .listing
        .default_solution
        .or(user.listing.default_solution);
    merged.output.clear = project_cfg.output.clear.or(user.output.clear);
    merged
}

/// Expands `~` in `default_solution` and anchors a relative result to
/// `base_dir`, the directory of the file that declared it.
fn resolve_config_paths(config: &mut Config, base_dir: &Path) {
    if let Some(solution) = config.listing.default_solution.as_mut() {
        if solution.trim().is_empty() {
            return;
        }
        let expanded = PathBuf::from(shellexpand::tilde(solution).as_ref());
        let resolved = if expanded.is_relative() {
            base_dir.join(expanded)
        } else {
            expanded
        };
        *solution = resolved.to_string_lossy().into_owned();
        debug!("Resolved default solution path: {}", solution);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if let Some(solution) = &config.listing.default_solution {
        if solution.trim().is_empty() {
            return Err(anyhow!(ProjtreeError::Config(
                "listing.default_solution cannot be empty.".to_string()
            )));
        }
        let path = PathBuf::from(solution);
        if !path.exists() {
            warn!(
                "Configured default solution '{}' does not exist.",
                path.display()
            );
        } else if path.is_file() && SolutionFormat::from_path(&path).is_none() {
            return Err(anyhow!(ProjtreeError::Config(format!(
                "Configured default solution '{}' is not a .sln file or a .toml manifest.",
                path.display()
            ))));
        }
    }
    Ok(())
}
