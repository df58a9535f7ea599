//! # projtree Output Pane
//!
//! File: cli/src/common/ui/pane.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The output surface the `list` command writes to. An IDE would hand over
//! one of its output windows; the CLI writes to stdout, and tests record
//! lines in memory. Commands only see the `OutputPane` trait, so swapping
//! the surface never touches the listing logic.
//!
//! ## Implementations
//!
//! - `ConsolePane<W>`: writes each line to any `io::Write`. Clearing emits an
//!   ANSI clear-screen sequence only when attached to a terminal.
//! - `BufferPane`: in-memory lines plus activation/clear bookkeeping, built
//!   for unit tests only.
//!
use crate::core::error::{ProjtreeError, Result};
use std::io::{self, IsTerminal, Write};
use tracing::debug;

/// ANSI sequence clearing the screen and homing the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A named output surface that accepts whole lines.
pub trait OutputPane {
    /// Brings the pane to the front before writing.
    fn activate(&mut self) -> Result<()>;
    /// Discards previously written content, where the surface supports it.
    fn clear(&mut self) -> Result<()>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// # Console Pane (`ConsolePane`)
///
/// Writes lines to a stream. `W` is stdout in the binary and a `Vec<u8>` in
/// tests.
pub struct ConsolePane<W: Write> {
    name: String,
    writer: W,
    ansi: bool,
}

impl ConsolePane<io::Stdout> {
    /// A pane over the process's stdout.
    pub fn stdout(name: impl Into<String>) -> Self {
        let stdout = io::stdout();
        let ansi = stdout.is_terminal();
        Self {
            name: name.into(),
            writer: stdout,
            ansi,
        }
    }
}

impl<W: Write> ConsolePane<W> {
    /// A pane over an arbitrary writer; never emits ANSI sequences.
    #[cfg(test)]
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
            ansi: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Whether the underlying stream is a terminal that renders ANSI styling.
    pub fn supports_ansi(&self) -> bool {
        self.ansi
    }

    fn output_error(&self, source: io::Error) -> ProjtreeError {
        ProjtreeError::Output {
            pane: self.name.clone(),
            source,
        }
    }
}

impl<W: Write> OutputPane for ConsolePane<W> {
    fn activate(&mut self) -> Result<()> {
        debug!("Activating output pane '{}'", self.name);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if !self.ansi {
            debug!(
                "Output pane '{}' is not a terminal; nothing to clear.",
                self.name
            );
            return Ok(());
        }
        write!(self.writer, "{}", CLEAR_SCREEN)
            .and_then(|_| self.writer.flush())
            .map_err(|e| self.output_error(e))?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| self.output_error(e))?;
        Ok(())
    }
}

/// In-memory pane recording everything written to it.
#[cfg(test)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferPane {
    pub lines: Vec<String>,
    pub activated: bool,
    pub clear_count: usize,
}

#[cfg(test)]
impl OutputPane for BufferPane {
    fn activate(&mut self) -> Result<()> {
        self.activated = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
