//! Stand-alone year label used by the LaTeX table.

use std::fmt;

use crate::digit::Digit;
use crate::error::NumeralError;
use crate::numeral::{self, Glyphs, TailSign, settle};
use crate::year_name::{YEAR_NAME_WIDTH, YearName};

/// A 4-digit year label kept in non-negative-tail form.
///
/// Unlike [`ChronologyCounter`](crate::ChronologyCounter) the label stores its
/// digits and advances them in place, re-settling positions from the least
/// significant upward until nothing further changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearLabel {
    digits: [Digit; YEAR_NAME_WIDTH],
}

impl YearLabel {
    /// Creates a label for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if `value` does not fit in four digits.
    pub fn new(value: i64) -> Result<Self, NumeralError> {
        let name = YearName::encode(value, TailSign::NonNegative)?;
        Ok(Self {
            digits: *name.digits(),
        })
    }

    /// Digits, most significant first.
    pub fn digits(&self) -> &[Digit; YEAR_NAME_WIDTH] {
        &self.digits
    }

    /// Integer value of the label.
    pub fn value(&self) -> i64 {
        numeral::decode(&self.digits)
    }

    /// Advances the label by one.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::Overflow`] if a carry leaves position 0. The
    /// label is left unchanged in that case.
    pub fn advance(&mut self) -> Result<(), NumeralError> {
        let mut next = self.digits;
        let mut carry = 1;
        let mut below_negative = false;
        for slot in next.iter_mut().rev() {
            let (digit, out) = settle(i64::from(slot.value()) + carry, below_negative);
            let sign_changed = digit.is_negative() != slot.is_negative();
            *slot = digit;
            carry = out;
            below_negative = digit.is_negative();
            if carry == 0 && !sign_changed {
                self.digits = next;
                return Ok(());
            }
        }
        if carry != 0 {
            return Err(NumeralError::Overflow {
                value: self.value() + 1,
                width: YEAR_NAME_WIDTH,
            });
        }
        self.digits = next;
        Ok(())
    }

    /// LaTeX markup for the label, without math delimiters.
    pub fn to_latex(&self) -> String {
        numeral::render(&self.digits, Glyphs::Latex)
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&numeral::render(&self.digits, Glyphs::Ascii))
    }
}
