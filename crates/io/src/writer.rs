//! Line-oriented append writer shared by every output file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chronal_calendar::DateLabel;
use chronal_numeral::Glyphs;
use tracing::debug;

use crate::error::IoError;
use crate::latex::{HLINE, LatexRow};
use crate::pattern::YearPattern;

/// Appends lines to a text file, creating it if needed.
///
/// Existing content is never truncated, so re-running a command over the same
/// output path duplicates its lines.
#[derive(Debug)]
pub struct AppendWriter {
    path: PathBuf,
    inner: BufWriter<File>,
    lines: usize,
}

impl AppendWriter {
    /// Opens `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] if the file cannot be created or opened.
    pub fn open(path: &Path) -> Result<Self, IoError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| IoError::io(path, e))?;
        debug!(path = %path.display(), "opened output for append");
        Ok(Self {
            path: path.to_path_buf(),
            inner: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Path of the file being appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines written through this writer so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Appends one line; a newline is added.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] on a write failure.
    pub fn write_line(&mut self, line: &str) -> Result<(), IoError> {
        writeln!(self.inner, "{line}").map_err(|e| IoError::io(&self.path, e))?;
        self.lines += 1;
        Ok(())
    }

    /// Appends one pattern line.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] on a write failure.
    pub fn write_pattern(&mut self, pattern: &YearPattern) -> Result<(), IoError> {
        self.write_line(&pattern.to_string())
    }

    /// Appends one `<epoch>,<tag>` record per label.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] on a write failure.
    pub fn write_labels(&mut self, labels: &[DateLabel], glyphs: Glyphs) -> Result<(), IoError> {
        for label in labels {
            self.write_line(&label.to_record(glyphs))?;
        }
        Ok(())
    }

    /// Appends a table row followed by its rule line.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] on a write failure.
    pub fn write_latex_row(&mut self, row: &LatexRow) -> Result<(), IoError> {
        self.write_line(&row.to_string())?;
        self.write_line(HLINE)
    }

    /// Flushes buffered lines to disk.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] if the flush fails.
    pub fn flush(&mut self) -> Result<(), IoError> {
        self.inner.flush().map_err(|e| IoError::io(&self.path, e))
    }

    /// Flushes and closes the file, returning the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] if the final flush fails.
    pub fn finish(mut self) -> Result<usize, IoError> {
        self.flush()?;
        debug!(path = %self.path.display(), lines = self.lines, "closed output");
        Ok(self.lines)
    }
}
