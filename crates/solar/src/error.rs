//! Error types for the chronal-solar crate.

/// Error type for all fallible operations in the chronal-solar crate.
///
/// This enum covers locator configuration problems and searches for a solar
/// event that fail to reach the requested longitude.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when the minimizer stops without reaching the residual tolerance.
    #[error(
        "no convergence for longitude {target_deg} near JD {approx_jd} (residual {residual_deg} deg)"
    )]
    NoConvergence {
        /// Target apparent longitude in degrees.
        target_deg: f64,
        /// Seed epoch of the search.
        approx_jd: f64,
        /// Angular distance left at the best epoch found, in degrees.
        residual_deg: f64,
    },

    /// Returned when the optimizer itself reports an error.
    #[error("optimizer failed: {reason}")]
    Optimizer {
        /// Error message from the optimizer.
        reason: String,
    },

    /// Returned when the locator configuration is invalid.
    #[error("invalid locator configuration: {reason}")]
    InvalidConfig {
        /// Description of the invalid setting.
        reason: String,
    },

    /// Returned when a seed epoch is NaN or infinite.
    #[error("epoch must be finite, got {epoch}")]
    NonFiniteEpoch {
        /// The offending epoch.
        epoch: f64,
    },
}
