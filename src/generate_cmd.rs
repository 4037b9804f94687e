//! Generate command: turn a pattern file into half-day label records.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use chronal_calendar::{YearRecord, build_year};
use chronal_io::{AppendWriter, YearPattern, read_patterns};
use chronal_numeral::{ChronologyCounter, Glyphs};

use crate::cli::GenerateArgs;
use crate::config::ChronalConfig;
use crate::convert;

/// Run the label generation pass.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = ChronalConfig::load(args.config.as_deref())?;

    let glyphs = convert::parse_glyphs(&config.output.glyphs)?;
    let input = args.patterns.unwrap_or(config.io.patterns);
    let output = args.output.unwrap_or(config.io.labels);

    // the whole pattern file is checked before the label file is touched
    info!(path = %input.display(), "reading patterns");
    let patterns = read_patterns(&input)
        .with_context(|| format!("failed to read pattern file: {}", input.display()))?;
    if patterns.is_empty() {
        warn!(path = %input.display(), "pattern file holds no years");
        return Ok(());
    }

    let mut writer = AppendWriter::open(&output)
        .with_context(|| format!("failed to open label file: {}", output.display()))?;
    let labels = write_labels(&patterns, glyphs, &mut writer)?;
    writer.finish()?;
    info!(path = %output.display(), years = patterns.len(), labels, "generation complete");
    Ok(())
}

/// Builds and appends the labels of every pattern in order.
///
/// The chronology counter starts at the first pattern's year and advances
/// once per pattern. Generation stops at the first year whose anomaly code is
/// invalid or whose year number breaks the sequence; years before it are
/// already flushed.
fn write_labels(
    patterns: &[YearPattern],
    glyphs: Glyphs,
    writer: &mut AppendWriter,
) -> Result<usize> {
    let Some(first) = patterns.first() else {
        return Ok(0);
    };
    let mut counter = ChronologyCounter::new(first.year());
    let mut total = 0;

    for (i, pattern) in patterns.iter().enumerate() {
        if i > 0 {
            counter
                .advance()
                .with_context(|| format!("counter overflow after pattern {i}"))?;
        }
        let year = pattern.year();
        if year != counter.value() {
            bail!(
                "pattern {} is chronal year {year}, expected {}",
                i + 1,
                counter.value()
            );
        }
        let code = match pattern.anomaly_code() {
            Ok(code) => code,
            Err(e) => {
                warn!(year, error = %e, "rejected year");
                return Err(e)
                    .with_context(|| format!("invalid anomaly code for chronal year {year}"));
            }
        };
        let names = counter
            .names()
            .with_context(|| format!("chronal year {year} has no 4-digit name"))?;
        let record = YearRecord::new(pattern.start_jd(), code, names)
            .with_context(|| format!("invalid record for chronal year {year}"))?;

        let labels = build_year(&record);
        writer.write_labels(&labels, glyphs)?;
        writer.flush()?;
        info!(year, labels = labels.len(), "generated year");
        total += labels.len();
    }
    Ok(total)
}
