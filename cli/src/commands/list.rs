//! # projtree List Command
//!
//! File: cli/src/commands/list.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `projtree list`, the command that prints the
//! project listing to the output pane:
//!
//! 1. A separator line (80 dashes)
//! 2. The active document path, or "There is no active document"
//! 3. One `<name>: <path>` line per project, nested projects included and
//!    solution folders left out, in solution order
//!
//! ## Architecture
//!
//! `handle_list` is the host adapter: it loads configuration, finds and
//! reads the solution, and opens a stdout pane. `show_projects` is the
//! command body proper and only depends on a forest, an optional active
//! document and an `OutputPane`, so it can run against any surface.
//!
//! ## Examples
//!
//! ```bash
//! projtree list ./Shop.sln --active-document src/App/Program.cs
//! PROJTREE_ACTIVE_DOCUMENT=/repo/README.md projtree list
//! ```
//!
//! Example output:
//!
//! ```
//! --------------------------------------------------------------------------------
//! /repo/README.md
//! App: /repo/App/App.csproj
//! Core: /repo/Core/Core.csproj
//! ```
//!
use crate::common::solution::{self, discover};
use crate::common::ui::pane::{ConsolePane, OutputPane};
use crate::core::config;
use crate::core::error::{ProjtreeError, Result};
use anyhow::Context;
use clap::Parser;
use projtree_lib::{format, walker, ProjectNode, WalkOptions};
use std::path::PathBuf;
use tracing::{debug, info};

/// Name of the pane the listing is written to.
pub const PANE_NAME: &str = "Solution Projects";

/// # List Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Solution file (.sln or .toml manifest) or a directory to search.
    /// Defaults to `listing.default_solution`, then the current directory.
    pub solution: Option<PathBuf>,

    /// Path of the document currently open in the editor, if any.
    #[arg(long, env = "PROJTREE_ACTIVE_DOCUMENT")]
    pub active_document: Option<String>,

    /// List a project nested under several parents only once.
    #[arg(long)]
    pub dedupe: bool,

    /// Clear the output pane before writing the listing.
    #[arg(long)]
    pub clear: bool,
}

/// Options for a single `show_projects` invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub dedupe: bool,
    pub clear: bool,
}

/// # Handle List Command (`handle_list`)
///
/// ## Workflow:
/// 1. Load configuration and merge its defaults with the flags.
/// 2. Resolve the solution file from the argument, config, or current directory.
/// 3. Read the solution into a project forest.
/// 4. Write the listing to a stdout-backed pane with `show_projects`.
///
/// ## Returns
///
/// * `Result<()>`: `Err` when configuration, discovery or loading fails, or
///   when stdout cannot be written.
pub fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling list command...");
    let cfg = config::load_config().context("Failed to load projtree configuration")?;

    let target = discover::choose_target(args.solution.as_deref(), &cfg)?;
    let solution_path = discover::resolve_solution_path(&target)?;
    let loaded = solution::load_solution(&solution_path)?;
    debug!(
        "Solution '{}' ({}) has {} top-level entr(ies)",
        loaded.name,
        loaded.path.display(),
        loaded.projects.len()
    );

    let options = ListOptions {
        dedupe: args.dedupe || cfg.listing.dedupe.unwrap_or(false),
        clear: args.clear || cfg.output.clear.unwrap_or(false),
    };
    let active_document = args.active_document.as_deref().filter(|path| !path.is_empty());

    let mut pane = ConsolePane::stdout(PANE_NAME);
    show_projects(&mut pane, &loaded.projects, active_document, options)
}

/// # Show Projects (`show_projects`)
///
/// Activates `pane`, optionally clears it, then writes the separator, the
/// active document line and every listed project.
///
/// Fails only if the pane rejects a write.
pub fn show_projects(
    pane: &mut dyn OutputPane,
    forest: &[ProjectNode],
    active_document: Option<&str>,
    options: ListOptions,
) -> Result<()> {
    pane.activate()?;
    if options.clear {
        pane.clear()?;
    }

    let walk_options = WalkOptions {
        dedupe: options.dedupe,
        ..Default::default()
    };
    let entries = walker::enumerate_with(forest, &walk_options).map_err(ProjtreeError::from)?;
    let summary = walker::summarize(forest);
    info!(
        "Listing {} project(s) ({} folder(s), {} level(s) deep)",
        entries.len(),
        summary.containers,
        summary.max_depth
    );

    for line in format::report_lines(active_document, &entries) {
        pane.write_line(&line)?;
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::pane::BufferPane;

    fn sample_forest() -> Vec<ProjectNode> {
        vec![
            ProjectNode::container("Sln Items"),
            ProjectNode::project("App", "/repo/App.proj")
                .with_children(vec![ProjectNode::project("Core", "/repo/Core.proj")]),
        ]
    }

    #[test]
    fn test_show_projects_writes_full_listing() {
        let mut pane = BufferPane::default();
        show_projects(
            &mut pane,
            &sample_forest(),
            Some("/repo/App/main.rs"),
            ListOptions::default(),
        )
        .unwrap();

        assert!(pane.activated);
        assert_eq!(pane.clear_count, 0);
        assert_eq!(
            pane.lines,
            vec![
                "-".repeat(80),
                "/repo/App/main.rs".to_string(),
                "App: /repo/App.proj".to_string(),
                "Core: /repo/Core.proj".to_string(),
            ]
        );
    }

    #[test]
    fn test_show_projects_without_active_document() {
        let mut pane = BufferPane::default();
        show_projects(&mut pane, &[], None, ListOptions::default()).unwrap();
        assert_eq!(
            pane.lines,
            vec!["-".repeat(80), "There is no active document".to_string()]
        );
    }

    #[test]
    fn test_show_projects_clear_and_dedupe() {
        let shared = ProjectNode::project("Shared", "/repo/Shared.proj");
        let forest = vec![
            ProjectNode::project("A", "/repo/A.proj").with_children(vec![shared.clone()]),
            ProjectNode::project("B", "/repo/B.proj").with_children(vec![shared]),
        ];
        let mut pane = BufferPane::default();
        pane.write_line("previous run").unwrap();

        show_projects(
            &mut pane,
            &forest,
            None,
            ListOptions {
                dedupe: true,
                clear: true,
            },
        )
        .unwrap();

        assert_eq!(pane.clear_count, 1);
        assert!(!pane.lines.contains(&"previous run".to_string()));
        assert_eq!(
            pane.lines
                .iter()
                .filter(|line| line.starts_with("Shared:"))
                .count(),
            1
        );
    }

    #[test]
    fn test_parses_list_args() {
        let args = ListArgs::try_parse_from([
            "list",
            "Shop.sln",
            "--active-document",
            "/repo/a.rs",
            "--dedupe",
        ])
        .unwrap();
        assert_eq!(args.solution, Some(PathBuf::from("Shop.sln")));
        assert_eq!(args.active_document.as_deref(), Some("/repo/a.rs"));
        assert!(args.dedupe);
        assert!(!args.clear);
    }
}
