//! # projtree Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared host-side utilities used by the command handlers. Everything the
//! core library deliberately leaves to its host lives here: turning files
//! into project forests, and putting text in front of the user.
//!
//! ## Architecture
//!
//! - **`solution`**: Adapters that read `.sln` files and TOML manifests into
//!   `ProjectNode` forests, plus discovery of the solution file to read.
//! - **`ui`**: The output pane abstraction and the solution tree printer.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{solution, ui};
//! use crate::core::error::Result;
//!
//! # fn run_example() -> Result<()> {
//! let path = solution::discover::resolve_solution_path(std::path::Path::new("."))?;
//! let loaded = solution::load_solution(&path)?;
//! let tree = ui::tree_printer::render_solution_tree(&loaded.name, &loaded.projects, false)?;
//! # Ok(())
//! # }
//! ```
//!

/// Solution file readers and discovery.
pub mod solution;
/// Output pane and tree rendering.
pub mod ui;
