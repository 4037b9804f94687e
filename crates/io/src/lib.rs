//! # chronal-io
//!
//! Plain text files read and written by the `chronal` binary: the year
//! pattern file produced by the ephemeris pass, the half-day label file, and
//! LaTeX table rows. Every output is opened for append.
//!
//! ```
//! use chronal_io::YearPattern;
//!
//! let pattern = YearPattern::new(11520, 2435824.5, [0; 24]);
//! assert!(pattern.to_string().starts_with("11520 2435824.500000 0 0"));
//! ```

mod error;
mod latex;
mod pattern;
mod writer;

pub use error::IoError;
pub use latex::{HLINE, LatexRow};
pub use pattern::{PATTERN_FIELDS, YearPattern, read_patterns};
pub use writer::AppendWriter;
