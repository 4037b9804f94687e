//! The chronology counter that names successive years.

use crate::error::NumeralError;
use crate::numeral::TailSign;
use crate::year_name::{YEAR_NAME_WIDTH, YearName, YearNames};

/// Offset between Gregorian and chronal year numbers.
pub const CHRONAL_YEAR_OFFSET: i64 = 9563;

/// Chronal year number for a Gregorian year.
pub fn chronal_year(gregorian: i64) -> i64 {
    gregorian + CHRONAL_YEAR_OFFSET
}

/// Gregorian year number for a chronal year.
pub fn gregorian_year(chronal: i64) -> i64 {
    chronal - CHRONAL_YEAR_OFFSET
}

/// Year counter exposing the primary and shadow names of its value.
///
/// The counter holds a single integer. Both names are derived from it on
/// demand, so they always denote the same year: the primary name uses the
/// negative tail sign, the shadow name the non-negative one.
///
/// # Example
///
/// ```
/// use chronal_numeral::ChronologyCounter;
///
/// let mut counter = ChronologyCounter::new(11532);
/// assert_eq!(counter.primary().unwrap().to_string(), "1b40C");
/// counter.advance().unwrap();
/// assert_eq!(counter.primary().unwrap().to_string(), "1b41bB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChronologyCounter {
    value: i64,
}

impl ChronologyCounter {
    /// Creates a counter at `value`.
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// Creates a counter from either form of a year name.
    pub fn from_name(name: &YearName) -> Self {
        Self::new(name.value())
    }

    /// Current year number.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Advances by exactly one year.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if the year number itself would
    /// overflow, leaving the counter unchanged.
    pub fn advance(&mut self) -> Result<(), NumeralError> {
        self.value = self
            .value
            .checked_add(1)
            .ok_or(NumeralError::Overflow {
                value: self.value,
                width: YEAR_NAME_WIDTH,
            })?;
        Ok(())
    }

    /// Negative-tail name of the current year.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if the year does not fit in four digits.
    pub fn primary(&self) -> Result<YearName, NumeralError> {
        YearName::encode(self.value, TailSign::Negative)
    }

    /// Non-negative-tail name of the current year.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if the year does not fit in four digits.
    pub fn shadow(&self) -> Result<YearName, NumeralError> {
        YearName::encode(self.value, TailSign::NonNegative)
    }

    /// Both names for the current year.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if either form does not fit.
    pub fn names(&self) -> Result<YearNames, NumeralError> {
        Ok(YearNames {
            before_pivot: self.primary()?,
            after_pivot: self.shadow()?,
        })
    }
}
