//! Balanced signed digits with a signed zero.

use std::fmt;

use crate::error::NumeralError;

/// Radix of the chronal numeral system.
pub const RADIX: i64 = 24;

/// Largest digit magnitude (`C`).
pub const MAX_MAGNITUDE: i8 = 12;

/// Combining overline used by the Unicode glyph set to mark negative digits.
const OVERLINE: char = '\u{0305}';

/// One balanced chronal digit in `-12..=12`.
///
/// Zero carries a sign: `b0` (negative zero) and `0` (positive zero) have the
/// same value but settle differently against the digits around them. Every
/// other digit's sign follows its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit {
    value: i8,
    negative: bool,
}

/// ASCII symbols in index order (`bC` = index 0 .. `C` = index 25).
#[rustfmt::skip]
const ASCII_SYMBOLS: [&str; 26] = [
    "bC", "bB", "bA", "b9", "b8", "b7", "b6", "b5", "b4", "b3", "b2", "b1", "b0",
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C",
];

impl Digit {
    /// Positive zero (`0`).
    pub const ZERO: Self = Self::raw(0, false);

    /// Negative zero (`b0`).
    pub const NEG_ZERO: Self = Self::raw(0, true);

    /// Every digit symbol from `bC` up to `C`, with `b0` ahead of `0`.
    pub const ALL: [Self; 26] = {
        let mut all = [Self::ZERO; 26];
        let mut i = 0;
        while i < 26 {
            let value = if i < 13 { i as i8 - 12 } else { i as i8 - 13 };
            all[i] = Self::raw(value, i < 13);
            i += 1;
        }
        all
    };

    const fn raw(value: i8, negative: bool) -> Self {
        Self {
            value,
            negative: value < 0 || (value == 0 && negative),
        }
    }

    /// Creates a digit from its value. Zero is created as positive zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidDigit`] if `value` is outside -12..=12.
    pub fn new(value: i8) -> Result<Self, NumeralError> {
        if !(-MAX_MAGNITUDE..=MAX_MAGNITUDE).contains(&value) {
            return Err(NumeralError::InvalidDigit { value });
        }
        Ok(Self::raw(value, false))
    }

    /// Infallible constructor for values already known to lie in -12..=12.
    pub(crate) const fn from_settled(value: i8, negative: bool) -> Self {
        Self::raw(value, negative)
    }

    /// Returns the signed value of the digit.
    pub fn value(self) -> i8 {
        self.value
    }

    /// Returns `true` for negative digits, including negative zero.
    pub fn is_negative(self) -> bool {
        self.negative
    }

    /// Position of this digit in [`Digit::ALL`].
    pub fn index(self) -> usize {
        if self.negative {
            (self.value + 12) as usize
        } else {
            (self.value + 13) as usize
        }
    }

    /// ASCII symbol: `b` prefix for negative digits, `A`/`B`/`C` for 10..=12.
    pub fn symbol(self) -> &'static str {
        ASCII_SYMBOLS[self.index()]
    }

    /// Parses one ASCII digit symbol such as `"b4"`, `"0"` or `"C"`.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidSymbol`] if `symbol` is not one of the
    /// 26 chronal symbols.
    pub fn from_symbol(symbol: &str) -> Result<Self, NumeralError> {
        ASCII_SYMBOLS
            .iter()
            .position(|s| *s == symbol)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| NumeralError::InvalidSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Unicode rendering: dozenal glyphs for 10..=12, overline for negatives.
    pub fn unicode(self) -> String {
        let glyph = match self.value.unsigned_abs() {
            10 => '\u{218A}',
            11 => '\u{218B}',
            12 => '\u{1F718}',
            // magnitudes below ten are decimal digits
            m => char::from(b'0' + m),
        };
        let mut out = String::with_capacity(8);
        out.push(glyph);
        if self.negative {
            out.push(OVERLINE);
        }
        out
    }

    /// LaTeX rendering: `\bar{B}` for negative letters, `\bar9` for negative numerals.
    pub fn latex(self) -> String {
        let magnitude = self.value.unsigned_abs();
        let base = match magnitude {
            10 => "A".to_string(),
            11 => "B".to_string(),
            12 => "C".to_string(),
            m => m.to_string(),
        };
        match (self.negative, magnitude >= 10) {
            (false, _) => base,
            (true, true) => format!("\\bar{{{base}}}"),
            (true, false) => format!("\\bar{base}"),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
