//! The year pattern file.
//!
//! One solar year per line: the chronal year number, the epoch of its opening
//! solstice, then the 24 raw anomaly integers, all separated by whitespace.
//! Blank lines are ignored.

use std::fmt;
use std::path::Path;

use chronal_calendar::{AnomalyCode, CalendarError, TERMS_PER_YEAR};
use tracing::info;

use crate::error::IoError;

/// Number of whitespace separated fields on a pattern line.
pub const PATTERN_FIELDS: usize = TERMS_PER_YEAR + 2;

/// One line of the pattern file.
#[derive(Debug, Clone, PartialEq)]
pub struct YearPattern {
    year: i64,
    start_jd: f64,
    anomalies: [i32; TERMS_PER_YEAR],
}

impl YearPattern {
    /// Creates a pattern from raw values; anomalies are checked by
    /// [`anomaly_code`](Self::anomaly_code).
    pub fn new(year: i64, start_jd: f64, anomalies: [i32; TERMS_PER_YEAR]) -> Self {
        Self {
            year,
            start_jd,
            anomalies,
        }
    }

    /// Chronal year number.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Epoch of the opening December solstice.
    pub fn start_jd(&self) -> f64 {
        self.start_jd
    }

    /// Raw anomaly integers, unchecked.
    pub fn anomalies(&self) -> &[i32; TERMS_PER_YEAR] {
        &self.anomalies
    }

    /// The anomalies as a validated code.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::AnomalyOutOfRange`] for the first value that
    /// is not -1, 0 or 1.
    pub fn anomaly_code(&self) -> Result<AnomalyCode, CalendarError> {
        AnomalyCode::try_from(&self.anomalies[..])
    }

    fn parse_fields(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != PATTERN_FIELDS {
            return Err(format!(
                "expected {PATTERN_FIELDS} fields, got {}",
                fields.len()
            ));
        }
        let year = fields[0]
            .parse::<i64>()
            .map_err(|e| format!("invalid year '{}': {e}", fields[0]))?;
        let start_jd = fields[1]
            .parse::<f64>()
            .map_err(|e| format!("invalid start epoch '{}': {e}", fields[1]))?;
        if !start_jd.is_finite() {
            return Err(format!("start epoch must be finite, got {start_jd}"));
        }
        let mut anomalies = [0; TERMS_PER_YEAR];
        for (i, (slot, field)) in anomalies.iter_mut().zip(&fields[2..]).enumerate() {
            *slot = field
                .parse::<i32>()
                .map_err(|e| format!("invalid anomaly '{field}' at term {i}: {e}"))?;
        }
        Ok(Self::new(year, start_jd, anomalies))
    }
}

impl fmt::Display for YearPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.6}", self.year, self.start_jd)?;
        for a in &self.anomalies {
            write!(f, " {a}")?;
        }
        Ok(())
    }
}

/// Reads and checks every line of a pattern file.
///
/// Nothing is returned unless the whole file parses, so callers can reject a
/// malformed file before producing any output from it.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`] if the file cannot be
/// read, or [`IoError::Parse`] for the first malformed line.
pub fn read_patterns(path: &Path) -> Result<Vec<YearPattern>, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
    let patterns = parse_patterns(&text).map_err(|(line, reason)| IoError::Parse {
        path: path.to_path_buf(),
        line,
        reason,
    })?;
    info!(path = %path.display(), years = patterns.len(), "read pattern file");
    Ok(patterns)
}

/// Parses pattern text, returning the one-based line number on failure.
fn parse_patterns(text: &str) -> Result<Vec<YearPattern>, (usize, String)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| YearPattern::parse_fields(line).map_err(|reason| (i + 1, reason)))
        .collect()
}
