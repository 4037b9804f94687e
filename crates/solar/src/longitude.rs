//! Apparent solar longitude models.

/// Julian day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Source of the sun's apparent geocentric ecliptic longitude.
pub trait SolarLongitude {
    /// Apparent longitude in degrees, normalised to `[0, 360)`, at Julian day `jd`.
    fn apparent_longitude(&self, jd: f64) -> f64;
}

impl<S: SolarLongitude + ?Sized> SolarLongitude for &S {
    fn apparent_longitude(&self, jd: f64) -> f64 {
        (**self).apparent_longitude(jd)
    }
}

/// Low-precision analytic solar theory (Meeus, *Astronomical Algorithms*, ch. 25).
///
/// Mean longitude and anomaly, the equation of centre, and corrections for
/// nutation in longitude and aberration. Good to roughly 0.01 degrees over
/// several centuries around J2000, which places solstices and equinoxes to
/// within about a quarter of an hour. Epochs are treated as TT.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LowPrecisionSun;

impl SolarLongitude for LowPrecisionSun {
    fn apparent_longitude(&self, jd: f64) -> f64 {
        let t = (jd - J2000) / DAYS_PER_CENTURY;
        let mean_longitude = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
        let mean_anomaly = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
        let centre = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
            + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
            + 0.000289 * (3.0 * mean_anomaly).sin();
        let omega = (125.04 - 1934.136 * t).to_radians();
        let apparent = mean_longitude + centre - 0.00569 - 0.00478 * omega.sin();
        apparent.rem_euclid(360.0)
    }
}

/// Signed angular difference `a - b`, wrapped to `(-180, 180]` degrees.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}
