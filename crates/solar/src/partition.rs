//! Splitting a solar year into 24 terms.

use tracing::{debug, warn};

use crate::error::SolarError;
use crate::locator::SolarEventLocator;

/// Longitude of the December solstice that opens each year.
pub const SOLSTICE_LONGITUDE_DEG: f64 = 270.0;

/// Longitude step between consecutive solar terms.
pub const TERM_STEP_DEG: f64 = 15.0;

/// Number of terms in one year.
pub const TERMS: usize = 24;

/// Nominal days per term.
const TERM_DAYS: i64 = 15;

/// Seed step used when walking back one year.
const YEAR_SEED_DAYS: f64 = 365.0;

/// Day number counted from the midnight preceding `jd`.
pub fn civil_day(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}

/// Term epochs and anomaly codes for one solar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearPartition {
    terms: [f64; TERMS + 1],
    anomalies: [i32; TERMS],
}

impl YearPartition {
    /// Epoch of the opening December solstice.
    pub fn start_jd(&self) -> f64 {
        self.terms[0]
    }

    /// Epoch of the closing solstice, which opens the next year.
    pub fn next_start_jd(&self) -> f64 {
        self.terms[TERMS]
    }

    /// All 25 term epochs, both solstices included.
    pub fn terms(&self) -> &[f64; TERMS + 1] {
        &self.terms
    }

    /// Whole civil days in each term minus 15.
    pub fn anomalies(&self) -> &[i32; TERMS] {
        &self.anomalies
    }
}

/// Partitions the solar year that opens with the December solstice near
/// `approx_start_jd`.
///
/// Each of the 24 following terms is located 15 degrees after the previous
/// one, seeded 15 days later. A term's anomaly is the number of civil days it
/// spans minus 15. Values outside -1..=1 are logged but still returned.
///
/// # Errors
///
/// Propagates the first [`SolarError`] from the locator.
#[tracing::instrument(skip(locator))]
pub fn partition_year<L: SolarEventLocator>(
    locator: &L,
    approx_start_jd: f64,
) -> Result<YearPartition, SolarError> {
    let mut terms = [0.0; TERMS + 1];
    let mut anomalies = [0; TERMS];
    terms[0] = locator.locate(approx_start_jd, SOLSTICE_LONGITUDE_DEG)?;
    debug!(term = 0, epoch = terms[0], "located solstice");

    for i in 1..=TERMS {
        let target = (SOLSTICE_LONGITUDE_DEG + TERM_STEP_DEG * i as f64).rem_euclid(360.0);
        let prev = terms[i - 1];
        let epoch = locator.locate(prev + TERM_DAYS as f64, target)?;
        let span = civil_day(epoch) - civil_day(prev);
        anomalies[i - 1] = (span - TERM_DAYS) as i32;
        terms[i] = epoch;
        debug!(term = i, target, epoch, span, "located term");
    }

    if anomalies.iter().any(|a| !(-1..=1).contains(a)) {
        warn!(?anomalies, start = terms[0], "anomaly code outside -1..=1");
    }

    Ok(YearPartition { terms, anomalies })
}

/// Steps back `years` whole solar years from the solstice near `epoch`.
///
/// # Errors
///
/// Propagates the first [`SolarError`] from the locator.
pub fn rewind_years<L: SolarEventLocator>(
    locator: &L,
    epoch: f64,
    years: u32,
) -> Result<f64, SolarError> {
    let mut current = epoch;
    for _ in 0..years {
        current = locator.locate(current - YEAR_SEED_DAYS, SOLSTICE_LONGITUDE_DEG)?;
    }
    debug!(years, from = epoch, to = current, "rewound start epoch");
    Ok(current)
}
