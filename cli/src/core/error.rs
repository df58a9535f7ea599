//! # projtree Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the `projtree` host: the
//! configuration loader, the solution adapters and the output pane. The
//! walker itself never fails outside of cancellation, so almost every error
//! here describes something wrong with the files the host was pointed at.
//!
//! ## Architecture
//!
//! - `ProjtreeError`: a `thiserror` enum of the specific failure kinds.
//! - `Result<T>`: an alias for `anyhow::Result<T>`, so handlers can attach
//!   context with `.context(...)` while still allowing callers to downcast
//!   to `ProjtreeError` when they need to branch on the kind.
//!
//! ## Examples
//!
//! ```rust
//! if !path.exists() {
//!     return Err(ProjtreeError::SolutionNotFound { path: path.display().to_string() })?;
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read solution file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the projtree application.
#[derive(Error, Debug)]
pub enum ProjtreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No solution file (*.sln or projtree.toml) found at '{path}'.")]
    SolutionNotFound { path: String },

    #[error("Unsupported solution file '{path}'. Expected a .sln file or a .toml manifest.")]
    UnsupportedSolution { path: String },

    #[error("Invalid project manifest '{path}': {message}")]
    Manifest { path: String, message: String },

    #[error("Solution nesting forms a cycle through project '{name}'.")]
    NestingCycle { name: String },

    #[error("Project listing failed: {source}")]
    Walk {
        #[from]
        source: projtree_lib::WalkError,
    },

    #[error("Failed to write to output pane '{pane}': {source}")]
    Output {
        pane: String,
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
