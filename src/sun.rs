use std::f64::consts::PI;

use chrono::{DateTime, TimeZone};
use log::debug;

use crate::config::SunTimesConfig;
use crate::coords;
use crate::error::Result;
use crate::julian::{self, J2000, RAD};
use crate::types::{
    EquatorialCoordinate, HorizontalCoordinate, Observer, PhaseTimes, SunTimes,
};

/// Offset of mean solar transit from the Julian day boundary.
pub const J0: f64 = 0.0009;

pub fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.98560028 * d)
}

pub fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    // perihelion of the Earth
    let p = RAD * 102.9372;
    m + c + p + PI
}

pub fn sun_coords(d: f64) -> EquatorialCoordinate {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    EquatorialCoordinate {
        declination: coords::declination(l, 0.0),
        right_ascension: coords::right_ascension(l, 0.0),
    }
}

/// Nearest Julian cycle; ties round away from zero.
pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / (2.0 * PI)).round()
}

pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

pub fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the sun reaches altitude `h`. NaN when it never does.
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Julian date at which the sun descends through altitude `h`.
pub fn set_j(h: f64, lw: f64, phi: f64, dec: f64, n: f64, m: f64, l: f64) -> f64 {
    let w = hour_angle(h, phi, dec);
    let a = approx_transit(w, lw, n);
    solar_transit_j(a, m, l)
}

impl Observer {
    /// West longitude and latitude in radians.
    pub(crate) fn radians(&self) -> (f64, f64) {
        (RAD * -self.longitude(), RAD * self.latitude())
    }

    pub fn sun_position<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> HorizontalCoordinate {
        let (lw, phi) = self.radians();
        let d = julian::to_days(dt);

        let c = sun_coords(d);
        let h = coords::sidereal_time(d, lw) - c.right_ascension;

        HorizontalCoordinate {
            azimuth: coords::azimuth(h, phi, c.declination),
            altitude: coords::altitude(h, phi, c.declination),
        }
    }

    pub fn sun_times<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> SunTimes<Tz> {
        self.sun_times_with(dt, &SunTimesConfig::default())
    }

    pub fn sun_times_with<Tz: TimeZone>(
        &self,
        dt: &DateTime<Tz>,
        config: &SunTimesConfig,
    ) -> SunTimes<Tz> {
        let (lw, phi) = self.radians();
        let tz = dt.timezone();

        let d = julian::to_days(dt);
        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);

        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        let dec = coords::declination(l, 0.0);

        let j_noon = solar_transit_j(ds, m, l);

        let phases = config
            .phases
            .iter()
            .map(|phase| {
                let j_set = set_j(phase.angle * RAD, lw, phi, dec, n, m, l);
                let j_rise = j_noon - (j_set - j_noon);
                if j_set.is_nan() {
                    debug!(
                        "sun does not cross {}° on this day at latitude {} ({} / {})",
                        phase.angle,
                        self.latitude(),
                        phase.rise_name,
                        phase.set_name
                    );
                }
                PhaseTimes {
                    phase: *phase,
                    rise: julian::from_julian(j_rise, &tz),
                    set: julian::from_julian(j_set, &tz),
                }
            })
            .collect();

        SunTimes {
            solar_noon: julian::from_julian(j_noon, &tz),
            nadir: julian::from_julian(j_noon - 0.5, &tz),
            phases,
        }
    }
}

pub fn sun_position<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<HorizontalCoordinate> {
    Ok(Observer::new(latitude, longitude)?.sun_position(dt))
}

pub fn sun_times<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunTimes<Tz>> {
    Ok(Observer::new(latitude, longitude)?.sun_times(dt))
}

pub fn sun_times_with<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    config: &SunTimesConfig,
) -> Result<SunTimes<Tz>> {
    Ok(Observer::new(latitude, longitude)?.sun_times_with(dt, config))
}
