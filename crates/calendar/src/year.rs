//! One year's input to the month sequence builder.

use chronal_numeral::YearNames;

use crate::anomaly::AnomalyCode;
use crate::error::CalendarError;

/// Start epoch, anomaly code and year names for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRecord {
    start_jd: f64,
    anomalies: AnomalyCode,
    names: YearNames,
}

impl YearRecord {
    /// Creates a record for the year starting at `start_jd`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NonFiniteEpoch`] if `start_jd` is NaN or infinite.
    pub fn new(
        start_jd: f64,
        anomalies: AnomalyCode,
        names: YearNames,
    ) -> Result<Self, CalendarError> {
        if !start_jd.is_finite() {
            return Err(CalendarError::NonFiniteEpoch);
        }
        Ok(Self {
            start_jd,
            anomalies,
            names,
        })
    }

    /// Approximate epoch of the December solstice opening the year.
    pub fn start_jd(&self) -> f64 {
        self.start_jd
    }

    /// Month lengths for the year.
    pub fn anomalies(&self) -> &AnomalyCode {
        &self.anomalies
    }

    /// Year names in force before and after the pivot.
    pub fn names(&self) -> &YearNames {
        &self.names
    }
}
