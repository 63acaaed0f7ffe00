use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Santiago;
use chrono_tz::Europe::Paris;

use suncalc::moon::*;
use suncalc::{MoonTimes, MoonTimesConfig, Observer, SunCalcError};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn utc(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn new_year() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
}

// ── Position ──

#[test]
fn test_moon_position_at_moonset() {
    let pos = moon_position(&utc("2022-01-01T14:35:39Z"), 48.85, 2.35).unwrap();
    assert_approx!(pos.azimuth(), 0.8503632561412419, 1e-9);
    assert_approx!(pos.altitude(), 0.002434454309848922, 1e-9);
    assert_approx!(pos.distance, 364237.0253201312, 1e-6);
}

#[test]
fn test_moon_position_at_midnight() {
    let pos = moon_position(&new_year(), 48.85, 2.35).unwrap();
    assert_approx!(pos.position.azimuth, -2.2667265989491434, 1e-9);
    assert_approx!(pos.position.altitude, -1.0092001033222662, 1e-9);
    assert_approx!(pos.distance, 364101.2634286354, 1e-6);
}

#[test]
fn test_moon_distance_bounds() {
    for day in 0..60 {
        let c = moon_coords(8000.0 + f64::from(day) * 0.5);
        assert!(c.distance >= 385001.0 - 20905.0 && c.distance <= 385001.0 + 20905.0);
    }
}

// ── Illumination ──

#[test]
fn test_moon_illumination_reference() {
    let ill = moon_illumination(&new_year());
    assert_approx!(ill.fraction, 0.04031441897153637, 1e-12);
    assert_approx!(ill.phase, 0.9356508960440411, 1e-12);
    assert_approx!(ill.angle, 1.6045345559741575, 1e-12);
}

#[test]
fn test_moon_illumination_near_full_and_new() {
    let full = moon_illumination(&utc("2022-01-17T23:48:00Z"));
    assert!(full.fraction > 0.99, "fraction={}", full.fraction);
    assert_approx!(full.phase, 0.5, 0.02);

    let new = moon_illumination(&utc("2022-01-02T18:33:00Z"));
    assert!(new.fraction < 0.01, "fraction={}", new.fraction);
    assert!(new.phase < 0.02, "phase={}", new.phase);
}

#[test]
fn test_moon_illumination_is_location_free() {
    let a = moon_illumination(&new_year());
    let b = moon_illumination(&new_year().with_timezone(&Paris));
    assert_eq!(a, b);
}

// ── Rise and set ──

#[test]
fn test_moon_times_reference_day() {
    init_logger();
    let times = moon_times(&new_year(), 48.85, 2.35, false).unwrap();
    assert_eq!(
        times,
        MoonTimes::Crossings {
            rise: Some(utc("2022-01-01T06:39:54Z")),
            set: Some(utc("2022-01-01T14:35:39Z")),
        }
    );
    assert_eq!(times.rise(), Some(&utc("2022-01-01T06:39:54Z")));
    assert!(!times.is_always_up());
    assert!(!times.is_always_down());
}

#[test]
fn test_moon_times_local_day() {
    let dt = Paris.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap();
    let times = moon_times(&dt, 48.85, 2.35, false).unwrap();
    // Search starts at local midnight, 2021-12-31T23:00Z.
    assert_eq!(times.rise().unwrap().to_rfc3339(), "2022-01-01T07:40:10+01:00");
    assert_eq!(times.set().unwrap().to_rfc3339(), "2022-01-01T15:35:59+01:00");
}

#[test]
fn test_moon_times_utc_day() {
    let dt = Paris.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap();
    let times = moon_times(&dt, 48.85, 2.35, true).unwrap();
    let rise = times.rise().unwrap();
    assert_eq!(rise.timezone(), Paris);
    assert_eq!(rise.with_timezone(&Utc), utc("2022-01-01T06:39:54Z"));
    assert_eq!(times.set().unwrap().with_timezone(&Utc), utc("2022-01-01T14:35:39Z"));
}

#[test]
fn test_moon_times_config_matches_flag() {
    let observer = Observer::new(48.85, 2.35).unwrap();
    let dt = Paris.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap();
    let with_config = observer
        .moon_times_with(&dt, &MoonTimesConfig { utc_day: true })
        .unwrap();
    assert_eq!(with_config, moon_times(&dt, 48.85, 2.35, true).unwrap());
    assert_eq!(
        observer.moon_times(&dt).unwrap(),
        moon_times(&dt, 48.85, 2.35, false).unwrap()
    );
}

#[test]
fn test_moon_always_down_in_arctic() {
    init_logger();
    let dt = Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap();
    let times = moon_times(&dt, 78.22, 15.65, false).unwrap();
    assert!(times.is_always_down());
    assert_eq!(times.rise(), None);
}

#[test]
fn test_moon_always_up_in_arctic() {
    let dt = Utc.with_ymd_and_hms(2022, 1, 15, 0, 0, 0).unwrap();
    let times = moon_times(&dt, 78.22, 15.65, false).unwrap();
    assert_eq!(times, MoonTimes::AlwaysUp);
}

#[test]
fn test_moon_times_across_dst_gap_at_midnight() {
    // Chile springs forward at local midnight.
    let dt = Santiago.with_ymd_and_hms(2022, 9, 11, 12, 0, 0).unwrap();
    let times = moon_times(&dt, -33.45, -70.67, false).unwrap();
    let set = times.set().unwrap();
    assert_eq!(set.date_naive(), dt.date_naive());
}

#[test]
fn test_moon_times_rejects_bad_latitude() {
    assert_eq!(
        moon_times(&new_year(), -90.5, 0.0, false).unwrap_err(),
        SunCalcError::LatitudeOutOfRange(-90.5)
    );
}

// ── Window fit ──

#[test]
fn test_fit_window_two_roots() {
    // y = x^2 - 0.25 crosses at ±0.5
    let fit = fit_window(0.75, -0.25, 0.75);
    assert_eq!(fit.roots, 2);
    assert_approx!(fit.x1, -0.5, 1e-12);
    assert_approx!(fit.x2, 0.5, 1e-12);
    assert_approx!(fit.ye, -0.25, 1e-12);
}

#[test]
fn test_fit_window_single_root_substitutes_upper() {
    // y = x^2 + x - 0.5, roots near -1.366 and 0.366
    let fit = fit_window(-0.5, -0.5, 1.5);
    assert_eq!(fit.roots, 1);
    assert_approx!(fit.x1, fit.x2, 1e-15);
    assert_approx!(fit.x1, 0.366_025_403_784_438_6, 1e-12);
}

#[test]
fn test_fit_window_no_real_roots() {
    let fit = fit_window(1.0, 0.5, 1.0);
    assert_eq!(fit.roots, 0);
    assert!(fit.ye > 0.0);
}

#[test]
fn test_fit_window_linear_crossing() {
    let fit = fit_window(-1.0, 0.0, 1.0);
    assert_eq!(fit.roots, 1);
    assert_eq!(fit.x1, 0.0);
    assert_eq!(fit.ye, 0.0);

    let fit = fit_window(-0.2, 0.1, 0.4);
    assert_eq!(fit.roots, 1);
    assert_approx!(fit.x1, -1.0 / 3.0, 1e-12);
}

#[test]
fn test_fit_window_linear_without_crossing() {
    let rising = fit_window(0.2, 0.4, 0.6);
    assert_eq!(rising.roots, 0);
    assert!(rising.ye > 0.0);

    let flat = fit_window(-0.5, -0.5, -0.5);
    assert_eq!(flat.roots, 0);
    assert_eq!(flat.ye, -0.5);
    assert!(!flat.ye.is_nan());
}
