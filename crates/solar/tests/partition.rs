use chronal_solar::{
    LocatorConfig, LowPrecisionSun, MinimizingLocator, SolarError, SolarEventLocator,
    SolarLongitude, civil_day, partition_year, rewind_years,
};

/// Sun advancing uniformly through a tropical year, at 270 degrees on `solstice_jd`.
struct MeanSun {
    solstice_jd: f64,
}

const TROPICAL_YEAR: f64 = 365.2422;

impl SolarLongitude for MeanSun {
    fn apparent_longitude(&self, jd: f64) -> f64 {
        (270.0 + (jd - self.solstice_jd) * 360.0 / TROPICAL_YEAR).rem_euclid(360.0)
    }
}

fn locator<S: SolarLongitude>(sun: S) -> MinimizingLocator<S> {
    MinimizingLocator::new(sun, LocatorConfig::default()).unwrap()
}

#[test]
fn mean_sun_partition() {
    let solstice = 2451900.3;
    let loc = locator(MeanSun {
        solstice_jd: solstice,
    });
    let year = partition_year(&loc, solstice + 2.0).unwrap();

    assert!((year.start_jd() - solstice).abs() < 1e-4);
    assert!((year.next_start_jd() - solstice - TROPICAL_YEAR).abs() < 1e-4);
    assert!(year.anomalies().iter().all(|a| (0..=1).contains(a)));

    let sum: i32 = year.anomalies().iter().sum();
    let days = civil_day(year.next_start_jd()) - civil_day(year.start_jd());
    assert_eq!(i64::from(sum), days - 360);

    for (i, pair) in year.terms().windows(2).enumerate() {
        let spacing = pair[1] - pair[0];
        assert!((spacing - TROPICAL_YEAR / 24.0).abs() < 1e-3, "term {i}");
    }
}

#[test]
fn year_2001_from_low_precision_sun() {
    let loc = locator(LowPrecisionSun);
    let year = partition_year(&loc, 2451900.0).unwrap();
    assert_eq!(
        year.anomalies(),
        &[0, 0, -1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, -1]
    );
    assert!((year.next_start_jd() - 2452265.3065).abs() < 0.01);
}

#[test]
fn consecutive_years_chain() {
    let loc = locator(LowPrecisionSun);
    let mut start = 2435825.0;
    for _ in 0..5 {
        let year = partition_year(&loc, start).unwrap();
        assert!(year.anomalies().iter().all(|a| (-1..=1).contains(a)));
        let sum: i32 = year.anomalies().iter().sum();
        assert!(sum == 5 || sum == 6, "sum = {sum}");
        start = year.next_start_jd();
    }
}

#[test]
fn rewind_steps_back_whole_years() {
    let loc = locator(LowPrecisionSun);
    let solstice = loc.locate(2451900.0, 270.0).unwrap();
    let back = rewind_years(&loc, solstice, 3).unwrap();
    assert!((solstice - back - 3.0 * TROPICAL_YEAR).abs() < 0.05);
    assert_eq!(rewind_years(&loc, solstice, 0).unwrap(), solstice);
}

#[test]
fn locator_through_reference() {
    let loc = locator(LowPrecisionSun);
    let by_ref: &dyn SolarEventLocator = &loc;
    let epoch = by_ref.locate(2451900.0, 270.0).unwrap();
    assert!((epoch - 2451900.067).abs() < 0.03);
    assert!(matches!(
        by_ref.locate(f64::INFINITY, 270.0),
        Err(SolarError::NonFiniteEpoch { .. })
    ));
}
