//! # projtree UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal-facing output for the commands:
//!
//! - **`pane`**: the `OutputPane` abstraction the `list` command writes
//!   through, with a stdout-backed and an in-memory implementation.
//! - **`tree_printer`**: the `tree`-style rendering used by `projtree tree`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::pane::{ConsolePane, OutputPane};
//! use crate::common::ui::tree_printer;
//!
//! let mut pane = ConsolePane::stdout("Solution Projects");
//! pane.activate()?;
//! pane.write_line(&tree_printer::render_solution_tree("Shop", &forest, false)?)?;
//! ```
//!

/// Output surfaces accepting whole lines (stdout, in-memory).
pub mod pane;
/// Renders a project forest with `├──`/`└──` connectors.
pub mod tree_printer;
