//! Ephemeris command: locate solar terms year by year and append patterns.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chronal_io::{AppendWriter, YearPattern};
use chronal_solar::{
    LowPrecisionSun, MinimizingLocator, SolarEventLocator, partition_year, rewind_years,
};

use crate::cli::EphemerisArgs;
use crate::config::ChronalConfig;
use crate::convert;

/// Run the ephemeris pass.
pub fn run(args: EphemerisArgs) -> Result<()> {
    let _cmd = info_span!("ephemeris").entered();
    let config = ChronalConfig::load(args.config.as_deref())?;

    let locator_cfg = convert::build_locator_config(&config.locator)?;
    let locator = MinimizingLocator::new(LowPrecisionSun, locator_cfg)?;
    let output = args.output.unwrap_or(config.io.patterns);
    let n_years = args.n_years.unwrap_or(config.ephemeris.n_years);

    let rewind = config.ephemeris.rewind_years;
    let start_jd = rewind_years(&locator, config.ephemeris.start_jd, rewind)
        .with_context(|| format!("failed to rewind {rewind} years"))?;
    let first_year = config.ephemeris.start_year - i64::from(rewind);

    let mut writer = AppendWriter::open(&output)
        .with_context(|| format!("failed to open pattern file: {}", output.display()))?;
    info!(path = %output.display(), first_year, n_years, "partitioning years");

    let written = write_years(&locator, start_jd, first_year, n_years, &mut writer)?;
    writer.finish()?;
    info!(years = written, "ephemeris complete");
    Ok(())
}

/// Partitions `n_years` consecutive years and appends one pattern per year.
///
/// Each year is flushed before the next is located, so a failure leaves the
/// completed years on disk.
fn write_years<L: SolarEventLocator>(
    locator: &L,
    start_jd: f64,
    first_year: i64,
    n_years: u32,
    writer: &mut AppendWriter,
) -> Result<u32> {
    let mut approx = start_jd;
    let mut year = first_year;
    for _ in 0..n_years {
        let partition = partition_year(locator, approx)
            .with_context(|| format!("failed to partition chronal year {year}"))?;
        writer.write_pattern(&YearPattern::new(
            year,
            partition.start_jd(),
            *partition.anomalies(),
        ))?;
        writer.flush()?;
        info!(
            year,
            start_jd = partition.start_jd(),
            days = partition.anomalies().iter().sum::<i32>() + 360,
            "partitioned year"
        );
        approx = partition.next_start_jd();
        year += 1;
    }
    Ok(n_years)
}
