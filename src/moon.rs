use std::f64::consts::PI;

use chrono::{DateTime, Duration, TimeZone};
use log::{debug, trace};

use crate::config::{
    MoonTimesConfig, MOON_HORIZON_CORRECTION, MOON_SEARCH_STEP_HOURS, MOON_SEARCH_WINDOWS,
};
use crate::coords;
use crate::error::{Result, SunCalcError};
use crate::julian::{self, RAD};
use crate::sun;
use crate::types::{
    EquatorialCoordinate, EquatorialCoordinateWithDistance, HorizontalCoordinate,
    HorizontalCoordinateWithDistance, MoonIllumination, MoonTimes, Observer,
};

/// Mean Earth-Sun distance, km.
pub const SUN_DISTANCE: f64 = 149_598_000.0;

/// Geocentric moon position for `d` days since J2000.
pub fn moon_coords(d: f64) -> EquatorialCoordinateWithDistance {
    let l = RAD * (218.316 + 13.176396 * d); // ecliptic longitude
    let m = RAD * (134.963 + 13.064993 * d); // mean anomaly
    let f = RAD * (93.272 + 13.229350 * d); // mean distance

    let lon = l + RAD * 6.289 * m.sin();
    let lat = RAD * 5.128 * f.sin();
    let dist = 385001.0 - 20905.0 * m.cos();

    EquatorialCoordinateWithDistance {
        coordinate: EquatorialCoordinate {
            declination: coords::declination(lon, lat),
            right_ascension: coords::right_ascension(lon, lat),
        },
        distance: dist,
    }
}

/// Quadratic fitted through three altitude samples at x = -1, 0, +1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFit {
    /// Curve value at the extremum, or the middle sample when the fit is linear.
    pub ye: f64,
    /// Number of zero crossings with |x| <= 1.
    pub roots: u8,
    pub x1: f64,
    pub x2: f64,
}

pub fn fit_window(h0: f64, h1: f64, h2: f64) -> WindowFit {
    let a = (h0 + h2) / 2.0 - h1;
    let b = (h2 - h0) / 2.0;

    if a == 0.0 {
        // Collinear samples: the curve is the line b·x + h1.
        let mut fit = WindowFit {
            ye: h1,
            roots: 0,
            x1: f64::NAN,
            x2: f64::NAN,
        };
        if b != 0.0 {
            let x = -h1 / b;
            if x.abs() <= 1.0 {
                fit.roots = 1;
                fit.x1 = x;
                fit.x2 = x;
            }
        }
        return fit;
    }

    let xe = -b / (2.0 * a);
    let ye = (a * xe + b) * xe + h1;
    let d = b * b - 4.0 * a * h1;

    let mut fit = WindowFit {
        ye,
        roots: 0,
        x1: f64::NAN,
        x2: f64::NAN,
    };
    if d >= 0.0 {
        let dx = d.sqrt() / (a.abs() * 2.0);
        fit.x1 = xe - dx;
        fit.x2 = xe + dx;
        if fit.x1.abs() <= 1.0 {
            fit.roots += 1;
        }
        if fit.x2.abs() <= 1.0 {
            fit.roots += 1;
        }
        if fit.x1 < -1.0 {
            fit.x1 = fit.x2;
        }
    }
    fit
}

pub fn moon_illumination<Tz: TimeZone>(dt: &DateTime<Tz>) -> MoonIllumination {
    let d = julian::to_days(dt);
    let s = sun::sun_coords(d);
    let m = moon_coords(d);
    let (s_dec, s_ra) = (s.declination, s.right_ascension);
    let (m_dec, m_ra) = (m.coordinate.declination, m.coordinate.right_ascension);

    let phi = (s_dec.sin() * m_dec.sin() + s_dec.cos() * m_dec.cos() * (s_ra - m_ra).cos()).acos();
    let inc = (SUN_DISTANCE * phi.sin()).atan2(m.distance - SUN_DISTANCE * phi.cos());
    let angle = (s_dec.cos() * (s_ra - m_ra).sin()).atan2(
        s_dec.sin() * m_dec.cos() - s_dec.cos() * m_dec.sin() * (s_ra - m_ra).cos(),
    );
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle,
    }
}

/// Start of the rise/set search: midnight of the local or UTC calendar day.
fn search_start<Tz: TimeZone>(dt: &DateTime<Tz>, utc_day: bool) -> Result<DateTime<Tz>> {
    let tz = dt.timezone();
    if utc_day {
        let midnight = dt
            .naive_utc()
            .date()
            .and_hms_opt(0, 0, 0)
            .ok_or(SunCalcError::UnresolvableMidnight)?;
        return Ok(tz.from_utc_datetime(&midnight));
    }

    let midnight = dt
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or(SunCalcError::UnresolvableMidnight)?;
    // Midnight can fall inside a DST gap; take the first valid quarter hour after it.
    (0..=4 * 24)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .ok_or(SunCalcError::UnresolvableMidnight)
}

impl Observer {
    fn moon_at_days(&self, d: f64) -> HorizontalCoordinateWithDistance {
        let (lw, phi) = self.radians();

        let c = moon_coords(d);
        let dec = c.coordinate.declination;
        let h = coords::sidereal_time(d, lw) - c.coordinate.right_ascension;
        let alt = coords::altitude(h, phi, dec);

        // altitude correction for refraction
        let alt = alt + RAD * 0.017 / (alt + RAD * 10.26 / (alt + RAD * 5.10)).tan();

        HorizontalCoordinateWithDistance {
            position: HorizontalCoordinate {
                azimuth: coords::azimuth(h, phi, dec),
                altitude: alt,
            },
            distance: c.distance,
        }
    }

    pub fn moon_position<Tz: TimeZone>(
        &self,
        dt: &DateTime<Tz>,
    ) -> HorizontalCoordinateWithDistance {
        self.moon_at_days(julian::to_days(dt))
    }

    pub fn moon_times<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> Result<MoonTimes<Tz>> {
        self.moon_times_with(dt, &MoonTimesConfig::default())
    }

    /// Moonrise and moonset during one calendar day.
    ///
    /// The day is scanned in two-hour windows. Each window fits a parabola
    /// through three altitude samples and looks for its zero crossings. At
    /// most one rise and one set are reported per day.
    pub fn moon_times_with<Tz: TimeZone>(
        &self,
        dt: &DateTime<Tz>,
        config: &MoonTimesConfig,
    ) -> Result<MoonTimes<Tz>> {
        let t0 = search_start(dt, config.utc_day)?;
        let start = t0.timestamp() as f64;
        let hc = MOON_HORIZON_CORRECTION * RAD;
        let altitude_at = |hours: f64| {
            let d = julian::unix_to_days(start + hours * 3600.0);
            self.moon_at_days(d).altitude() - hc
        };

        let mut h0 = altitude_at(0.0);
        let mut rise = None;
        let mut set = None;
        let mut ye = 0.0;

        for window in 0..MOON_SEARCH_WINDOWS {
            let i = f64::from(1 + window * MOON_SEARCH_STEP_HOURS);
            let h1 = altitude_at(i);
            let h2 = altitude_at(i + 1.0);

            let fit = fit_window(h0, h1, h2);
            ye = fit.ye;
            trace!(
                "moon window at +{}h: h0={:.6} h1={:.6} h2={:.6} roots={}",
                i,
                h0,
                h1,
                h2,
                fit.roots
            );

            match fit.roots {
                1 if h0 < 0.0 => rise = Some(i + fit.x1),
                1 => set = Some(i + fit.x1),
                2 => {
                    let (up, down) = if ye < 0.0 { (fit.x2, fit.x1) } else { (fit.x1, fit.x2) };
                    rise = Some(i + up);
                    set = Some(i + down);
                }
                _ => {}
            }

            if rise.is_some() && set.is_some() {
                break;
            }

            h0 = h2;
        }

        if rise.is_none() && set.is_none() {
            debug!(
                "no moon horizon crossing at latitude {} (ye={:.6})",
                self.latitude(),
                ye
            );
            return Ok(if ye > 0.0 {
                MoonTimes::AlwaysUp
            } else {
                MoonTimes::AlwaysDown
            });
        }

        Ok(MoonTimes::Crossings {
            rise: rise.and_then(|hours| julian::hours_later(&t0, hours)),
            set: set.and_then(|hours| julian::hours_later(&t0, hours)),
        })
    }
}

pub fn moon_position<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<HorizontalCoordinateWithDistance> {
    Ok(Observer::new(latitude, longitude)?.moon_position(dt))
}

pub fn moon_times<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    utc_day: bool,
) -> Result<MoonTimes<Tz>> {
    Observer::new(latitude, longitude)?.moon_times_with(dt, &MoonTimesConfig { utc_day })
}
