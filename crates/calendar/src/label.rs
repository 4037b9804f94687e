//! Dated half-day labels.

use std::fmt;

use chronal_numeral::{Digit, Glyphs, YearName};

/// One half-day of the calendar: an epoch and the month/day it falls on.
///
/// The textual tag is `<year>.<month><day>`, e.g. `1b400.bB3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateLabel {
    epoch: f64,
    year: YearName,
    month: Digit,
    day: Digit,
}

impl DateLabel {
    /// Creates a label.
    pub fn new(epoch: f64, year: YearName, month: Digit, day: Digit) -> Self {
        Self {
            epoch,
            year,
            month,
            day,
        }
    }

    /// Julian-day epoch of this half-day.
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Year name in force for this half-day.
    pub fn year(&self) -> &YearName {
        &self.year
    }

    /// Month digit, `bC` through `C`.
    pub fn month(&self) -> Digit {
        self.month
    }

    /// Day-position digit, `b8` through `8`.
    pub fn day(&self) -> Digit {
        self.day
    }

    /// Tag rendered in the chosen glyph set.
    pub fn tag(&self, glyphs: Glyphs) -> String {
        let (month, day) = match glyphs {
            Glyphs::Ascii => (self.month.symbol().to_string(), self.day.symbol().to_string()),
            Glyphs::Unicode => (self.month.unicode(), self.day.unicode()),
            Glyphs::Latex => (self.month.latex(), self.day.latex()),
        };
        format!("{}.{month}{day}", self.year.render(glyphs))
    }

    /// Output record: `<epoch>,<tag>` with the epoch to one decimal.
    pub fn to_record(&self, glyphs: Glyphs) -> String {
        format!("{:.1},{}", self.epoch, self.tag(glyphs))
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record(Glyphs::Ascii))
    }
}
