//! # projtree Tree Command
//!
//! File: cli/src/commands/tree.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `projtree tree` draws the solution as a tree, solution folders included,
//! so the grouping that `projtree list` flattens away stays visible. A
//! footer reports how many projects and folders were found.
//!
//! ```bash
//! projtree tree ./Shop.sln --show-paths
//! ```
//!
use crate::common::solution::{self, discover, Solution};
use crate::common::ui::pane::{ConsolePane, OutputPane};
use crate::common::ui::tree_printer;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use projtree_lib::{walker, WalkSummary};
use std::path::PathBuf;
use tracing::info;

/// Name of the pane the tree is written to.
pub const PANE_NAME: &str = "Solution Tree";

/// # Tree Arguments (`TreeArgs`)
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Solution file (.sln or .toml manifest) or a directory to search.
    pub solution: Option<PathBuf>,

    /// Show each project's full path next to its name.
    #[arg(long)]
    pub show_paths: bool,
}

/// Loads the solution and prints its tree followed by the summary footer.
pub fn handle_tree(args: TreeArgs) -> Result<()> {
    info!("Handling tree command...");
    let cfg = config::load_config().context("Failed to load projtree configuration")?;

    let target = discover::choose_target(args.solution.as_deref(), &cfg)?;
    let solution_path = discover::resolve_solution_path(&target)?;
    let loaded = solution::load_solution(&solution_path)?;

    let mut pane = ConsolePane::stdout(PANE_NAME);
    let styled = pane.supports_ansi();
    show_tree(&mut pane, &loaded, args.show_paths, styled)
}

/// Writes the rendered tree, a blank line and the summary footer to `pane`.
fn show_tree(
    pane: &mut dyn OutputPane,
    loaded: &Solution,
    show_paths: bool,
    styled: bool,
) -> Result<()> {
    pane.activate()?;
    let tree =
        tree_printer::render_solution_tree(&loaded.name, &loaded.projects, show_paths, styled)
            .with_context(|| format!("Failed to render solution '{}'", loaded.name))?;
    for line in tree.lines() {
        pane.write_line(line)?;
    }
    pane.write_line("")?;
    pane.write_line(&summary_line(&walker::summarize(&loaded.projects)))
}

fn summary_line(summary: &WalkSummary) -> String {
    format!(
        "{} project(s), {} folder(s)",
        summary.projects, summary.containers
    )
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::pane::BufferPane;
    use projtree_lib::ProjectNode;
    use std::io;

    /// Stands in for stdout after the reading end of a pipe has gone away.
    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_show_tree_reports_closed_output() {
        let loaded = Solution {
            name: "Shop".to_string(),
            path: PathBuf::from("/repo/Shop.sln"),
            projects: Vec::new(),
        };
        let mut pane = ConsolePane::new(PANE_NAME, ClosedPipe);
        let err = show_tree(&mut pane, &loaded, false, false).unwrap_err();
        assert!(err
            .to_string()
            .contains("Failed to write to output pane 'Solution Tree'"));
    }

    #[test]
    fn test_show_tree_writes_tree_and_footer() {
        let loaded = Solution {
            name: "Shop".to_string(),
            path: PathBuf::from("/repo/Shop.sln"),
            projects: vec![
                ProjectNode::container("src")
                    .with_children(vec![ProjectNode::project("Web", "/repo/Web.csproj")]),
            ],
        };
        let mut pane = BufferPane::default();
        show_tree(&mut pane, &loaded, false, false).unwrap();

        assert!(pane.activated);
        assert_eq!(
            pane.lines,
            vec!["Shop", "└── src/", "    └── Web", "", "1 project(s), 1 folder(s)"]
        );
    }

    #[test]
    fn test_summary_line() {
        let summary = WalkSummary {
            projects: 3,
            containers: 2,
            max_depth: 2,
        };
        assert_eq!(summary_line(&summary), "3 project(s), 2 folder(s)");
    }

    #[test]
    fn test_parses_tree_args() {
        let args = TreeArgs::try_parse_from(["tree", "--show-paths"]).unwrap();
        assert!(args.solution.is_none());
        assert!(args.show_paths);
    }
}
