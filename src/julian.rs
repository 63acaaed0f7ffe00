use chrono::{DateTime, Duration, TimeZone};

pub const RAD: f64 = std::f64::consts::PI / 180.0;
/// Obliquity of the Earth, radians.
pub const OBLIQUITY: f64 = RAD * 23.4397;

pub const DAY_SECONDS: f64 = 86_400.0;
pub const J1970: f64 = 2_440_588.0;
pub const J2000: f64 = 2_451_545.0;

pub fn to_julian<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    unix_to_julian(dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9)
}

pub fn unix_to_julian(seconds: f64) -> f64 {
    seconds / DAY_SECONDS - 0.5 + J1970
}

/// Days since the J2000.0 epoch.
pub fn to_days<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    to_julian(dt) - J2000
}

pub fn unix_to_days(seconds: f64) -> f64 {
    unix_to_julian(seconds) - J2000
}

/// Converts a Julian date back to an instant in `tz`, rounded to the second.
///
/// Returns `None` when `j` is not finite or falls outside the representable
/// range; this is how "event does not happen" propagates to results.
pub fn from_julian<Tz: TimeZone>(j: f64, tz: &Tz) -> Option<DateTime<Tz>> {
    if !j.is_finite() {
        return None;
    }
    let seconds = ((j + 0.5 - J1970) * DAY_SECONDS).round();
    if seconds.abs() >= i64::MAX as f64 {
        return None;
    }
    tz.timestamp_opt(seconds as i64, 0).single()
}

/// Shifts `dt` by `hours`, rounded to the whole second.
pub fn hours_later<Tz: TimeZone>(dt: &DateTime<Tz>, hours: f64) -> Option<DateTime<Tz>> {
    let seconds = (hours * 3600.0).round();
    if !seconds.is_finite() || seconds.abs() > i32::MAX as f64 {
        return None;
    }
    dt.clone().checked_add_signed(Duration::seconds(seconds as i64))
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * RAD
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}
