//! Rows of the LaTeX year table.

use std::fmt;

use chronal_calendar::TERMS_PER_YEAR;
use chronal_numeral::YearLabel;

/// Rule line written after every row.
pub const HLINE: &str = "\\hline";

/// One table row: Gregorian year, chronal label in math mode, then the 24
/// anomaly integers.
#[derive(Debug, Clone, PartialEq)]
pub struct LatexRow {
    gregorian: i64,
    label: String,
    anomalies: [i32; TERMS_PER_YEAR],
}

impl LatexRow {
    /// Builds a row, rendering `label` in LaTeX digits.
    pub fn new(gregorian: i64, label: &YearLabel, anomalies: &[i32; TERMS_PER_YEAR]) -> Self {
        Self {
            gregorian,
            label: label.to_latex(),
            anomalies: *anomalies,
        }
    }

    /// Gregorian year shown in the first column.
    pub fn gregorian(&self) -> i64 {
        self.gregorian
    }
}

impl fmt::Display for LatexRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & ${}$", self.gregorian, self.label)?;
        for a in &self.anomalies {
            write!(f, " & {a}")?;
        }
        f.write_str(" \\\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronal_numeral::chronal_year;

    #[test]
    fn row_for_1957() {
        let label = YearLabel::new(chronal_year(1957)).unwrap();
        let mut anomalies = [0; TERMS_PER_YEAR];
        anomalies[0] = -1;
        anomalies[23] = 1;
        let row = LatexRow::new(1957, &label, &anomalies);

        let middle = " & 0".repeat(22);
        let expected = format!("1957 & $1\\bar400$ & -1{middle} & 1 \\\\");
        assert_eq!(row.to_string(), expected);
        assert_eq!(row.gregorian(), 1957);
    }
}
