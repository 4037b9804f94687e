//! LaTeX command: append one table row per pattern year.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use chronal_io::{AppendWriter, LatexRow, YearPattern, read_patterns};
use chronal_numeral::{YearLabel, gregorian_year};

use crate::cli::LatexArgs;
use crate::config::ChronalConfig;

/// Run the LaTeX table pass.
pub fn run(args: LatexArgs) -> Result<()> {
    let _cmd = info_span!("latex").entered();
    let config = ChronalConfig::load(args.config.as_deref())?;

    let input = args.patterns.unwrap_or(config.io.patterns);
    let output = args.output.unwrap_or(config.io.latex);

    let patterns = read_patterns(&input)
        .with_context(|| format!("failed to read pattern file: {}", input.display()))?;
    let Some(first) = patterns.first() else {
        warn!(path = %input.display(), "pattern file holds no years");
        return Ok(());
    };
    let gregorian_start = args
        .gregorian_start
        .unwrap_or_else(|| gregorian_year(first.year()));

    let mut writer = AppendWriter::open(&output)
        .with_context(|| format!("failed to open table file: {}", output.display()))?;
    write_rows(&patterns, gregorian_start, &mut writer)?;
    let lines = writer.finish()?;
    info!(path = %output.display(), rows = patterns.len(), lines, "table complete");
    Ok(())
}

/// Appends a row per pattern.
///
/// The Gregorian column counts up from `gregorian_start`. Each chronal label
/// comes from the pattern's own year: consecutive years advance the running
/// label, and any other year restarts it.
fn write_rows(
    patterns: &[YearPattern],
    gregorian_start: i64,
    writer: &mut AppendWriter,
) -> Result<()> {
    let mut label: Option<YearLabel> = None;
    let mut gregorian = gregorian_start;
    for (i, pattern) in patterns.iter().enumerate() {
        if i > 0 {
            gregorian = gregorian
                .checked_add(1)
                .with_context(|| format!("Gregorian year overflow after {gregorian}"))?;
        }
        let year = pattern.year();
        let had_previous = label.is_some();
        let current = match label.as_mut() {
            Some(running) if running.value().checked_add(1) == Some(year) => {
                running
                    .advance()
                    .with_context(|| format!("label overflow at chronal year {year}"))?;
                *running
            }
            _ => {
                if had_previous {
                    debug!(year, row = i + 1, "pattern years not consecutive, relabelling");
                }
                YearLabel::new(year)
                    .with_context(|| format!("chronal year {year} has no 4-digit label"))?
            }
        };
        writer.write_latex_row(&LatexRow::new(gregorian, &current, pattern.anomalies()))?;
        label = Some(current);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_count_up_from_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tex");
        let patterns: Vec<YearPattern> = (0..13)
            .map(|i| YearPattern::new(11520 + i, 2435825.0, [0; 24]))
            .collect();

        let mut writer = AppendWriter::open(&path).unwrap();
        write_rows(&patterns, 1957, &mut writer).unwrap();
        assert_eq!(writer.finish().unwrap(), 26);

        let text = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = text.lines().step_by(2).collect();
        assert!(rows[0].starts_with("1957 & $1\\bar400$ &"));
        assert!(rows[12].starts_with("1969 & $1\\bar41\\bar{C}$ &"));
    }

    #[test]
    fn labels_follow_pattern_years_across_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tex");
        let patterns: Vec<YearPattern> = [11520, 11530, 11531]
            .iter()
            .map(|&year| YearPattern::new(year, 2435825.0, [0; 24]))
            .collect();

        let mut writer = AppendWriter::open(&path).unwrap();
        write_rows(&patterns, 1957, &mut writer).unwrap();
        writer.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = text.lines().step_by(2).collect();
        assert!(rows[0].starts_with("1957 & $1\\bar400$ &"), "{}", rows[0]);
        assert!(rows[1].starts_with("1958 & $1\\bar40A$ &"), "{}", rows[1]);
        assert!(rows[2].starts_with("1959 & $1\\bar40B$ &"), "{}", rows[2]);
    }

    #[test]
    fn gregorian_start_does_not_change_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tex");
        let patterns = vec![YearPattern::new(11520, 2435825.0, [0; 24])];

        let mut writer = AppendWriter::open(&path).unwrap();
        write_rows(&patterns, 2000, &mut writer).unwrap();
        writer.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("2000 & $1\\bar400$ &"));
    }

    #[test]
    fn unnameable_year_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tex");
        let mut writer = AppendWriter::open(&path).unwrap();
        let patterns = vec![YearPattern::new(1_000_000, 2435825.0, [0; 24])];
        let err = write_rows(&patterns, 1957, &mut writer).unwrap_err();
        assert!(format!("{err:#}").contains("chronal year 1000000"));
    }
}
