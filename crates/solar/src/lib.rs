//! # chronal-solar
//!
//! Locates the epochs at which the sun's apparent ecliptic longitude reaches
//! multiples of 15 degrees and turns one solar year of them into the 24-term
//! anomaly code consumed by `chronal-calendar`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["LowPrecisionSun"] -->|"SolarLongitude"| B["MinimizingLocator"]
//!     C["LocatorConfig"] --> B
//!     B -->|"SolarEventLocator::locate()"| D["epoch"]
//!     B -->|"partition_year()"| E["YearPartition"]
//!     E -->|".next_start_jd()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chronal_solar::{LocatorConfig, LowPrecisionSun, MinimizingLocator, partition_year};
//!
//! let locator = MinimizingLocator::new(LowPrecisionSun, LocatorConfig::default()).unwrap();
//! let year = partition_year(&locator, 2451900.0).unwrap();
//! assert_eq!(year.anomalies().len(), 24);
//! assert!((year.next_start_jd() - year.start_jd() - 365.24).abs() < 0.1);
//! ```

mod config;
mod error;
mod locator;
mod longitude;
mod partition;

pub use config::LocatorConfig;
pub use error::SolarError;
pub use locator::{MinimizingLocator, SolarEventLocator};
pub use longitude::{J2000, LowPrecisionSun, SolarLongitude, angle_difference};
pub use partition::{
    SOLSTICE_LONGITUDE_DEG, TERM_STEP_DEG, TERMS, YearPartition, civil_day, partition_year,
    rewind_years,
};
