//! # projtree Listing Formatter
//!
//! File: lib/src/format.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pure string formatting for the project listing. None of these functions
//! can fail; writing the lines somewhere is the host's job.
//!
//! Example listing, as assembled by [`report_lines`]:
//!
//! ```text
//! --------------------------------------------------------------------------------
//! /repo/App/Program.cs
//! App: /repo/App/App.csproj
//! Core: /repo/Core/Core.csproj
//! ```
//!
use crate::walker::ProjectEntry;

/// Width of the separator line, in characters.
pub const SEPARATOR_WIDTH: usize = 80;

/// Line printed in place of the active document path when none is open.
pub const NO_ACTIVE_DOCUMENT: &str = "There is no active document";

/// Returns the separator line: [`SEPARATOR_WIDTH`] dashes.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Formats one project as `"<name>: <full_path>"`.
pub fn format_entry(entry: &ProjectEntry) -> String {
    format!("{}: {}", entry.name, entry.full_path)
}

/// Formats every project, one line each, preserving order.
pub fn format(entries: &[ProjectEntry]) -> Vec<String> {
    entries.iter().map(format_entry).collect()
}

/// Returns the active document path, or [`NO_ACTIVE_DOCUMENT`] when absent.
pub fn format_active_document(active_document: Option<&str>) -> String {
    match active_document {
        Some(path) => path.to_string(),
        None => NO_ACTIVE_DOCUMENT.to_string(),
    }
}

/// # Report Lines (`report_lines`)
///
/// Assembles the complete listing written by the `list` command: the
/// separator, the active document line, then one line per project.
pub fn report_lines(active_document: Option<&str>, entries: &[ProjectEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(separator());
    lines.push(format_active_document(active_document));
    lines.extend(format(entries));
    lines
}
