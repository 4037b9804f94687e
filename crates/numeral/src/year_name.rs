//! Four-digit year names.

use std::fmt;

use crate::digit::Digit;
use crate::error::NumeralError;
use crate::numeral::{self, Glyphs, TailSign};

/// Number of digit positions in a year name.
pub const YEAR_NAME_WIDTH: usize = 4;

/// A 4-digit chronal year name, position 0 most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearName([Digit; YEAR_NAME_WIDTH]);

impl YearName {
    /// Wraps an already-settled digit array.
    pub fn new(digits: [Digit; YEAR_NAME_WIDTH]) -> Self {
        Self(digits)
    }

    /// Encodes `value` in the given tail-sign form.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if `value` does not fit in four digits.
    pub fn encode(value: i64, tail: TailSign) -> Result<Self, NumeralError> {
        numeral::encode_fixed::<YEAR_NAME_WIDTH>(value, tail).map(Self)
    }

    /// Parses a 4-digit ASCII name such as `"1b400"`.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::WidthMismatch`] unless exactly four symbols are
    /// given, or the parse error for an unknown symbol.
    pub fn parse(text: &str) -> Result<Self, NumeralError> {
        let digits = numeral::parse_ascii(text)?;
        let got = digits.len();
        let digits = <[Digit; YEAR_NAME_WIDTH]>::try_from(digits).map_err(|_| {
            NumeralError::WidthMismatch {
                expected: YEAR_NAME_WIDTH,
                got,
            }
        })?;
        Ok(Self(digits))
    }

    /// Digits, most significant first.
    pub fn digits(&self) -> &[Digit; YEAR_NAME_WIDTH] {
        &self.0
    }

    /// Integer value of the name.
    pub fn value(&self) -> i64 {
        numeral::decode(&self.0)
    }

    /// Renders the name in the chosen glyph set.
    pub fn render(&self, glyphs: Glyphs) -> String {
        numeral::render(&self.0, glyphs)
    }
}

impl fmt::Display for YearName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Glyphs::Ascii))
    }
}

/// The two names in force during one calendar year.
///
/// `before_pivot` labels the months with negative digits (`bC` through `b0`),
/// `after_pivot` labels the months from `0` through `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearNames {
    /// Primary (negative-tail) name.
    pub before_pivot: YearName,
    /// Shadow (non-negative-tail) name.
    pub after_pivot: YearName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let name = YearName::parse("1b400").unwrap();
        assert_eq!(name.value(), 11520);
        assert_eq!(name.to_string(), "1b400");
    }

    #[test]
    fn parse_wrong_width() {
        assert_eq!(
            YearName::parse("1b40").unwrap_err(),
            NumeralError::WidthMismatch {
                expected: 4,
                got: 3
            }
        );
        assert!(matches!(
            YearName::parse("1b4000"),
            Err(NumeralError::WidthMismatch { got: 5, .. })
        ));
    }

    #[test]
    fn encode_same_value_both_tails() {
        let primary = YearName::encode(11532, TailSign::Negative).unwrap();
        let shadow = YearName::encode(11532, TailSign::NonNegative).unwrap();
        assert_eq!(primary.to_string(), "1b40C");
        assert_eq!(shadow.to_string(), "1b41bC");
        assert_eq!(primary.value(), shadow.value());
    }

    #[test]
    fn latex_render() {
        let name = YearName::parse("b1C0b4").unwrap();
        assert_eq!(name.render(Glyphs::Latex), "\\bar1C0\\bar4");
    }
}
