//! # chronal-calendar
//!
//! Month construction for the solar-term calendar. A year is 24 months, one
//! per 15 degree solar term, each 14, 15 or 16 days long as given by the
//! year's anomaly code. Every half-day of the year receives a [`DateLabel`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["[i32; 24]"] -->|"AnomalyCode::try_from()"| B["AnomalyCode"]
//!     B --> C["YearRecord"]
//!     N["YearNames"] --> C
//!     C -->|"build_year()"| D["Vec of DateLabel"]
//!     D -->|".to_record()"| E["epoch,tag"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chronal_calendar::{AnomalyCode, YearRecord, build_year, verify_anomalies};
//! use chronal_numeral::ChronologyCounter;
//!
//! let mut raw = [0; 24];
//! raw[3] = 1;
//! assert!(verify_anomalies(&raw));
//!
//! let code = AnomalyCode::try_from(&raw[..]).unwrap();
//! let names = ChronologyCounter::new(11520).names().unwrap();
//! let record = YearRecord::new(2435825.0, code, names).unwrap();
//! assert_eq!(build_year(&record).len(), 2 * 361);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `anomaly` | Month lengths and the 24-term anomaly code |
//! | `label` | Dated half-day labels |
//! | `year` | Per-year input record |
//! | `months` | Month sequence builder |
//! | `error` | Error types |

mod anomaly;
mod error;
mod label;
mod months;
mod year;

pub use anomaly::{AnomalyCode, MonthLength, NOMINAL_SPAN_DAYS, TERMS_PER_YEAR, verify_anomalies};
pub use error::CalendarError;
pub use label::DateLabel;
pub use months::{build_year, build_year_with_end, label_count};
pub use year::YearRecord;
