use crate::core::DisplaySink;
use crate::utils::error::{Result, RosterError};
use std::io::Write;
use std::sync::Mutex;

/// Draws labelled panels on a terminal-like writer.
pub struct TerminalDisplaySink<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalDisplaySink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalDisplaySink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out.into_inner().map_err(|e| RosterError::DisplayError {
            message: e.to_string(),
        })
    }
}

impl<W: Write + Send> DisplaySink for TerminalDisplaySink<W> {
    fn append(&self, label: &str, body: &str) -> Result<()> {
        let width = body
            .lines()
            .map(|line| line.chars().count())
            .chain(std::iter::once(label.chars().count()))
            .max()
            .unwrap_or(0);
        let border = "-".repeat(width + 2);

        let mut out = self.out.lock().map_err(|e| RosterError::DisplayError {
            message: e.to_string(),
        })?;

        writeln!(out)?;
        writeln!(out, "+{}+", border)?;
        writeln!(out, "| {:<width$} |", label, width = width)?;
        writeln!(out, "+{}+", border)?;
        for line in body.lines() {
            writeln!(out, "| {:<width$} |", line, width = width)?;
        }
        writeln!(out, "+{}+", border)?;
        out.flush()?;
        Ok(())
    }
}
