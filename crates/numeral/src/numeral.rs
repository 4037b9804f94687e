//! Encoding integers as balanced base-24 numerals and back.
//!
//! Digits are placed from the least significant position upward. Residues 0
//! and 12 are ambiguous (`b0`/`0`, `C`/`bC`) and are settled by the sign of
//! the digit immediately below; the least significant digit is settled by the
//! [`TailSign`] of the representation.

use std::fmt;

use crate::digit::{Digit, RADIX};
use crate::error::NumeralError;

/// Sign assumed below the least significant digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TailSign {
    /// Last digit cycles `bB..b1`, `b0`, `1..C`.
    Negative,
    /// Last digit cycles `bC..b1`, `0`, `1..B`.
    NonNegative,
}

impl TailSign {
    /// Tail sign taken from the sign of `value`.
    pub fn of(value: i64) -> Self {
        if value < 0 {
            Self::Negative
        } else {
            Self::NonNegative
        }
    }

    /// Returns `true` for [`TailSign::Negative`].
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// Output glyph set for rendering numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Glyphs {
    /// `b`-prefixed ASCII symbols (`1b400`).
    #[default]
    Ascii,
    /// Dozenal glyphs with a combining overline on negative digits.
    Unicode,
    /// LaTeX math markup (`1\bar400`).
    Latex,
}

impl fmt::Display for Glyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Unicode => write!(f, "unicode"),
            Self::Latex => write!(f, "latex"),
        }
    }
}

/// Places one digit for the remaining value and returns it with the carry.
pub(crate) fn settle(remaining: i64, below_negative: bool) -> (Digit, i64) {
    let residue = remaining.rem_euclid(RADIX);
    let digit = match residue {
        0 => Digit::from_settled(0, below_negative),
        12 if below_negative => Digit::from_settled(12, false),
        12 => Digit::from_settled(-12, true),
        r if r > 12 => Digit::from_settled((r - RADIX) as i8, true),
        r => Digit::from_settled(r as i8, false),
    };
    (digit, (remaining - i64::from(digit.value())) / RADIX)
}

/// Encodes `value` with as many digits as it needs, most significant first.
///
/// Zero encodes as a single `0` (or `b0` under a negative tail).
pub fn encode(value: i64, tail: TailSign) -> Vec<Digit> {
    let mut digits = Vec::new();
    let mut remaining = value;
    let mut below_negative = tail.is_negative();
    loop {
        let (digit, carry) = settle(remaining, below_negative);
        digits.push(digit);
        below_negative = digit.is_negative();
        remaining = carry;
        if remaining == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Encodes `value` into exactly `N` digits, most significant first.
///
/// # Errors
///
/// Returns [`NumeralError::Overflow`] if `value` needs more than `N` digits.
pub fn encode_fixed<const N: usize>(
    value: i64,
    tail: TailSign,
) -> Result<[Digit; N], NumeralError> {
    let mut digits = [Digit::ZERO; N];
    let mut remaining = value;
    let mut below_negative = tail.is_negative();
    for slot in digits.iter_mut().rev() {
        let (digit, carry) = settle(remaining, below_negative);
        *slot = digit;
        below_negative = digit.is_negative();
        remaining = carry;
    }
    if remaining != 0 {
        return Err(NumeralError::Overflow { value, width: N });
    }
    Ok(digits)
}

/// Integer value of a digit sequence, most significant first.
pub fn decode(digits: &[Digit]) -> i64 {
    digits
        .iter()
        .fold(0, |acc, d| acc * RADIX + i64::from(d.value()))
}

/// Parses an ASCII numeral such as `"1b400"` into digits.
///
/// # Errors
///
/// Returns [`NumeralError::Empty`] for an empty string and
/// [`NumeralError::InvalidSymbol`] for any unrecognised symbol.
pub fn parse_ascii(text: &str) -> Result<Vec<Digit>, NumeralError> {
    if text.is_empty() {
        return Err(NumeralError::Empty);
    }
    let mut digits = Vec::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let len = match rest.as_bytes()[0] {
            b'b' => rest.char_indices().nth(2).map_or(rest.len(), |(i, _)| i),
            _ => rest.char_indices().nth(1).map_or(rest.len(), |(i, _)| i),
        };
        let (symbol, tail) = rest.split_at(len);
        digits.push(Digit::from_symbol(symbol)?);
        rest = tail;
    }
    Ok(digits)
}

/// Renders digits in the chosen glyph set.
pub fn render(digits: &[Digit], glyphs: Glyphs) -> String {
    digits
        .iter()
        .map(|d| match glyphs {
            Glyphs::Ascii => d.symbol().to_string(),
            Glyphs::Unicode => d.unicode(),
            Glyphs::Latex => d.latex(),
        })
        .collect()
}
