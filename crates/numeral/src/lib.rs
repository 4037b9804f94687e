//! # chronal-numeral
//!
//! Balanced base-24 numerals with a signed zero, the 4-digit year names built
//! from them, and the counters that advance those names year by year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["i64"] -->|"encode(value, tail)"| B["Vec of Digit"]
//!     B -->|"decode()"| A
//!     A -->|"YearName::encode()"| C["YearName"]
//!     D["ChronologyCounter"] -->|".primary() / .shadow()"| C
//!     D -->|".advance()"| D
//!     E["YearLabel"] -->|".advance()"| E
//!     E -->|".to_latex()"| F["LaTeX markup"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chronal_numeral::{ChronologyCounter, Glyphs, TailSign, chronal_year, encode, render};
//!
//! let year = chronal_year(1957);
//! assert_eq!(render(&encode(year, TailSign::of(year)), Glyphs::Ascii), "1b400");
//!
//! let mut counter = ChronologyCounter::new(year);
//! counter.advance().unwrap();
//! assert_eq!(counter.value(), year + 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `digit` | Signed digits and their glyphs |
//! | `numeral` | Encode, decode, parse and render |
//! | `year_name` | Fixed-width year names |
//! | `counter` | Integer-backed chronology counter |
//! | `label` | In-place advancing year label |
//! | `error` | Error types |

mod counter;
mod digit;
mod error;
mod label;
mod numeral;
mod year_name;

pub use counter::{CHRONAL_YEAR_OFFSET, ChronologyCounter, chronal_year, gregorian_year};
pub use digit::{Digit, MAX_MAGNITUDE, RADIX};
pub use error::NumeralError;
pub use label::YearLabel;
pub use numeral::{Glyphs, TailSign, decode, encode, encode_fixed, parse_ascii, render};
pub use year_name::{YEAR_NAME_WIDTH, YearName, YearNames};
