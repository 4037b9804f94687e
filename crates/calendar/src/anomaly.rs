//! Per-term month lengths for one solar year.

use std::fmt;

use crate::error::CalendarError;

/// Number of solar terms (and months) in one year.
pub const TERMS_PER_YEAR: usize = 24;

/// Nominal span in days from one month's pivot midday to the next.
pub const NOMINAL_SPAN_DAYS: i32 = 15;

/// Length of a month relative to the nominal 15-day span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MonthLength {
    /// One day short (code -1).
    Short,
    /// Nominal span (code 0).
    #[default]
    Nominal,
    /// One day long (code +1).
    Long,
}

impl MonthLength {
    /// Maps an anomaly value to a month length, or `None` outside -1..=1.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Short),
            0 => Some(Self::Nominal),
            1 => Some(Self::Long),
            _ => None,
        }
    }

    /// The anomaly value for this length.
    pub fn code(self) -> i32 {
        match self {
            Self::Short => -1,
            Self::Nominal => 0,
            Self::Long => 1,
        }
    }

    /// Days from this month's pivot midday to the next month's.
    pub fn span_days(self) -> i32 {
        NOMINAL_SPAN_DAYS + self.code()
    }
}

/// A validated 24-term anomaly code.
///
/// Term 0 is the month starting at the December solstice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnomalyCode([MonthLength; TERMS_PER_YEAR]);

impl AnomalyCode {
    /// Wraps a complete set of month lengths.
    pub fn new(lengths: [MonthLength; TERMS_PER_YEAR]) -> Self {
        Self(lengths)
    }

    /// Month lengths in term order.
    pub fn lengths(&self) -> &[MonthLength; TERMS_PER_YEAR] {
        &self.0
    }

    /// Raw anomaly values in term order.
    pub fn values(&self) -> [i32; TERMS_PER_YEAR] {
        self.0.map(MonthLength::code)
    }

    /// Length of the year in days: `360 + sum of codes`.
    pub fn total_days(&self) -> i32 {
        self.0.iter().map(|l| l.span_days()).sum()
    }
}

impl TryFrom<&[i32]> for AnomalyCode {
    type Error = CalendarError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        if values.len() != TERMS_PER_YEAR {
            return Err(CalendarError::InvalidAnomalyLength { len: values.len() });
        }
        let mut lengths = [MonthLength::Nominal; TERMS_PER_YEAR];
        for (index, (slot, &value)) in lengths.iter_mut().zip(values).enumerate() {
            *slot = MonthLength::from_code(value)
                .ok_or(CalendarError::AnomalyOutOfRange { index, value })?;
        }
        Ok(Self(lengths))
    }
}

/// Compact one-line form: `P` for a short month, `0` and `1` otherwise.
impl fmt::Display for AnomalyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for length in &self.0 {
            let c = match length {
                MonthLength::Short => 'P',
                MonthLength::Nominal => '0',
                MonthLength::Long => '1',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Returns `true` when `values` holds 24 terms, each -1, 0 or 1.
pub fn verify_anomalies(values: &[i32]) -> bool {
    values.len() == TERMS_PER_YEAR && values.iter().all(|v| (-1..=1).contains(v))
}
