//! Configuration for the minimizing solar event locator.

use crate::error::SolarError;

/// Search settings for [`MinimizingLocator`](crate::MinimizingLocator).
///
/// # Example
///
/// ```
/// use chronal_solar::LocatorConfig;
///
/// let config = LocatorConfig::new()
///     .with_bracket_days(6.0)
///     .with_max_iters(200);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorConfig {
    /// Half-width of the search window around the seed epoch, in days.
    bracket_days: f64,
    /// Absolute tolerance on the epoch, in days.
    tolerance_days: f64,
    /// Iteration cap for the minimizer.
    max_iters: u64,
    /// Largest accepted angular residual at the result, in degrees.
    residual_tolerance_deg: f64,
}

impl LocatorConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: `bracket_days = 8`, `tolerance_days = 1e-5`,
    /// `max_iters = 100`, `residual_tolerance_deg = 1e-3`.
    pub fn new() -> Self {
        Self {
            bracket_days: 8.0,
            tolerance_days: 1e-5,
            max_iters: 100,
            residual_tolerance_deg: 1e-3,
        }
    }

    /// Sets the search half-width in days.
    pub fn with_bracket_days(mut self, bracket_days: f64) -> Self {
        self.bracket_days = bracket_days;
        self
    }

    /// Sets the epoch tolerance in days.
    pub fn with_tolerance_days(mut self, tolerance_days: f64) -> Self {
        self.tolerance_days = tolerance_days;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the accepted angular residual in degrees.
    pub fn with_residual_tolerance_deg(mut self, residual_tolerance_deg: f64) -> Self {
        self.residual_tolerance_deg = residual_tolerance_deg;
        self
    }

    /// Search half-width in days.
    pub fn bracket_days(&self) -> f64 {
        self.bracket_days
    }

    /// Epoch tolerance in days.
    pub fn tolerance_days(&self) -> f64 {
        self.tolerance_days
    }

    /// Iteration cap.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Accepted angular residual in degrees.
    pub fn residual_tolerance_deg(&self) -> f64 {
        self.residual_tolerance_deg
    }

    /// Validates all settings.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidConfig`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.bracket_days.is_finite() || self.bracket_days <= 0.0 {
            return Err(SolarError::InvalidConfig {
                reason: format!("bracket_days must be positive, got {}", self.bracket_days),
            });
        }
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err(SolarError::InvalidConfig {
                reason: format!(
                    "tolerance_days must be positive, got {}",
                    self.tolerance_days
                ),
            });
        }
        if self.max_iters < 1 {
            return Err(SolarError::InvalidConfig {
                reason: "max_iters must be at least 1".to_string(),
            });
        }
        if !self.residual_tolerance_deg.is_finite() || self.residual_tolerance_deg <= 0.0 {
            return Err(SolarError::InvalidConfig {
                reason: format!(
                    "residual_tolerance_deg must be positive, got {}",
                    self.residual_tolerance_deg
                ),
            });
        }
        Ok(())
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
