//! Error types for the chronal-numeral crate.

/// Error type for all fallible operations in the chronal-numeral crate.
///
/// Covers digit validation, symbol parsing, and numerals that do not fit the
/// fixed four-digit width used for year names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// Returned when a value needs more digits than the requested width.
    #[error("value {value} does not fit in {width} chronal digits")]
    Overflow {
        /// The value that could not be represented.
        value: i64,
        /// The number of digit positions available.
        width: usize,
    },

    /// Returned when a digit value is outside -12..=12.
    #[error("invalid digit value: {value} (must be -12..=12)")]
    InvalidDigit {
        /// The invalid digit value that was provided.
        value: i8,
    },

    /// Returned when a string token is not a chronal digit symbol.
    #[error("invalid chronal digit symbol: {symbol:?}")]
    InvalidSymbol {
        /// The unrecognised symbol.
        symbol: String,
    },

    /// Returned when a parsed numeral has the wrong number of digits.
    #[error("expected {expected} digits, got {got}")]
    WidthMismatch {
        /// The required number of digits.
        expected: usize,
        /// The number of digits found.
        got: usize,
    },

    /// Returned when parsing an empty string.
    #[error("empty numeral")]
    Empty,
}
