//! # projtree Walker Errors
//!
//! File: lib/src/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Plain enumeration never fails: malformed nodes pass through with empty
//! strings and a missing active document is an ordinary `None`. The only
//! abnormal outcome is a caller-requested stop, raised by
//! [`crate::walker::enumerate_with`] when its cancellation flag is set.
//!
use thiserror::Error;

/// Errors produced by the project tree walker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    #[error("Project tree walk cancelled after visiting {visited} node(s).")]
    Cancelled { visited: usize },
}
