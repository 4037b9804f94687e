//! Locating the epoch at which the sun reaches a given longitude.
//!
//! Wraps `argmin`'s Brent minimizer around the angular distance between the
//! sun's apparent longitude and the target.

use argmin::core::{CostFunction, Executor, State};
use argmin::solver::brent::BrentOpt;
use tracing::trace;

use crate::config::LocatorConfig;
use crate::error::SolarError;
use crate::longitude::{SolarLongitude, angle_difference};

/// Finds precise epochs of solar longitude events.
pub trait SolarEventLocator {
    /// Returns the epoch near `approx_jd` at which the apparent solar
    /// longitude equals `target_deg`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::NoConvergence`] if the search does not reach the
    /// target, or [`SolarError::NonFiniteEpoch`] for a NaN or infinite seed.
    fn locate(&self, approx_jd: f64, target_deg: f64) -> Result<f64, SolarError>;
}

impl<L: SolarEventLocator + ?Sized> SolarEventLocator for &L {
    fn locate(&self, approx_jd: f64, target_deg: f64) -> Result<f64, SolarError> {
        (**self).locate(approx_jd, target_deg)
    }
}

/// Locator minimizing `sin^2(dl / 2)` over a bracket around the seed epoch.
///
/// The search variable is the offset in days from the seed, so the epoch
/// tolerance stays absolute regardless of the size of the Julian day.
#[derive(Debug, Clone)]
pub struct MinimizingLocator<S> {
    sun: S,
    config: LocatorConfig,
}

impl<S: SolarLongitude> MinimizingLocator<S> {
    /// Creates a locator over the given longitude model.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidConfig`] if `config` fails validation.
    pub fn new(sun: S, config: LocatorConfig) -> Result<Self, SolarError> {
        config.validate()?;
        Ok(Self { sun, config })
    }

    /// Search settings in use.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }
}

impl<S: SolarLongitude> SolarEventLocator for MinimizingLocator<S> {
    fn locate(&self, approx_jd: f64, target_deg: f64) -> Result<f64, SolarError> {
        if !approx_jd.is_finite() {
            return Err(SolarError::NonFiniteEpoch { epoch: approx_jd });
        }
        let bracket = self.config.bracket_days();
        let cost = LongitudeCost {
            sun: &self.sun,
            approx_jd,
            target_deg,
        };
        let solver = BrentOpt::new(-bracket, bracket)
            .set_tolerance(f64::EPSILON.sqrt(), self.config.tolerance_days());
        let result = Executor::new(cost, solver)
            .configure(|state| state.max_iters(self.config.max_iters()))
            .run()
            .map_err(|e| SolarError::Optimizer {
                reason: e.to_string(),
            })?;

        let offset = result
            .state()
            .best_param
            .ok_or_else(|| SolarError::Optimizer {
                reason: "minimizer returned no parameter".to_string(),
            })?;
        let epoch = approx_jd + offset;
        let residual_deg =
            angle_difference(self.sun.apparent_longitude(epoch), target_deg).abs();
        trace!(
            target_deg,
            approx_jd,
            epoch,
            residual_deg,
            iters = result.state().get_iter(),
            "located solar event"
        );
        if residual_deg > self.config.residual_tolerance_deg() {
            return Err(SolarError::NoConvergence {
                target_deg,
                approx_jd,
                residual_deg,
            });
        }
        Ok(epoch)
    }
}

/// Angular distance objective over the day offset from the seed.
struct LongitudeCost<'a, S> {
    sun: &'a S,
    approx_jd: f64,
    target_deg: f64,
}

impl<S: SolarLongitude> CostFunction for LongitudeCost<'_, S> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, offset: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let lon = self.sun.apparent_longitude(self.approx_jd + offset);
        let half = (angle_difference(lon, self.target_deg) / 2.0).to_radians();
        Ok(half.sin().powi(2))
    }
}
