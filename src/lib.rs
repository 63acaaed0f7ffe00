//! Sun and moon positions, light phases, moon illumination and rise/set times
//! for an observer on Earth.
//!
//! Low-accuracy series (arc-minute level) after the formulas at
//! <http://aa.quae.nl/en/reken/zonpositie.html> and
//! <http://aa.quae.nl/en/reken/hemelpositie.html>; moon illumination follows
//! Meeus, *Astronomical Algorithms*, chapter 48.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let dt = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
//! let times = suncalc::sun_times(&dt, 48.85, 2.35).unwrap();
//! assert_eq!(times.sunrise().unwrap().to_rfc3339(), "2022-01-01T07:45:17+00:00");
//! ```

pub mod config;
pub mod coords;
pub mod error;
pub mod julian;
pub mod moon;
pub mod sun;
pub mod types;

pub use config::{
    MoonTimesConfig, SunTimesConfig, MOON_HORIZON_CORRECTION, MOON_SEARCH_STEP_HOURS,
    MOON_SEARCH_WINDOWS, SUN_PHASES,
};

pub use error::{Result, SunCalcError};

pub use julian::{
    deg_to_rad, from_julian, hours_later, rad_to_deg, to_days, to_julian, J1970, J2000,
    OBLIQUITY, RAD,
};

pub use moon::{
    fit_window, moon_coords, moon_illumination, moon_position, moon_times, WindowFit,
};

pub use sun::{sun_coords, sun_position, sun_times, sun_times_with};

pub use types::{
    EquatorialCoordinate, EquatorialCoordinateWithDistance, HorizontalCoordinate,
    HorizontalCoordinateWithDistance, MoonIllumination, MoonTimes, Observer, PhaseTimes,
    SunPhase, SunTimes,
};
