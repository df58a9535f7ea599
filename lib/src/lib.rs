//! # projtree Core Library
//!
//! File: lib/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Host-independent logic behind the `projtree list` command: flattening a
//! solution's project tree into an ordered listing and formatting that
//! listing for an output pane.
//!
//! The library never reads files and never talks to a host. Hosts (the
//! `projtree` CLI, or an IDE integration) build an immutable forest of
//! [`ProjectNode`] values, hand it to [`walker::enumerate`], and pass the
//! resulting entries through the [`format`] helpers.
//!
//! ## Architecture
//!
//! - `walker`: `ProjectNode` model, depth-first pre-order enumeration, walk
//!   options (dedupe, cancellation) and summaries.
//! - `format`: pure line formatting (project lines, active document line,
//!   separator).
//! - `error`: the walker's error type, only produced by opt-in cancellation.
//!
//! ## Examples
//!
//! ```rust
//! use projtree_lib::{format, walker, ProjectNode};
//!
//! let forest = vec![
//!     ProjectNode::container("Solution Items"),
//!     ProjectNode::project("App", "/repo/App.proj")
//!         .with_children(vec![ProjectNode::project("Core", "/repo/Core.proj")]),
//! ];
//!
//! let lines = format::format(&walker::enumerate(&forest));
//! assert_eq!(lines, vec!["App: /repo/App.proj", "Core: /repo/Core.proj"]);
//! ```
//!
pub mod error;
pub mod format;
pub mod walker;

pub use error::WalkError;
pub use walker::{ProjectEntry, ProjectKind, ProjectNode, WalkOptions, WalkSummary};
