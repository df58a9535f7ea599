//! # projtree Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the commands that make up the projtree CLI and
//! makes them accessible to `main.rs`. Each command defines its own
//! arguments struct and a handler function.
//!
//! ## Commands
//!
//! - `list`: Separator, active document and flat project listing
//! - `tree`: Solution drawn as a tree with folders and nesting
//!

/// `projtree list`: the project listing written to an output pane.
pub mod list;
/// `projtree tree`: the solution hierarchy rendered as a tree.
pub mod tree;
