use chrono::{DateTime, TimeZone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SunCalcError};

/// Apparent position seen by an observer, in radians.
///
/// Azimuth is measured from south, increasing towards the west. Altitude is
/// measured from the horizon, positive upwards. Neither value is normalised.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinateWithDistance {
    pub position: HorizontalCoordinate,
    /// Kilometres.
    pub distance: f64,
}

impl HorizontalCoordinateWithDistance {
    pub fn azimuth(&self) -> f64 {
        self.position.azimuth
    }

    pub fn altitude(&self) -> f64 {
        self.position.altitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    pub declination: f64,
    pub right_ascension: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinateWithDistance {
    pub coordinate: EquatorialCoordinate,
    /// Kilometres.
    pub distance: f64,
}

/// Geographic location in degrees, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || latitude.abs() > 90.0 {
            return Err(SunCalcError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || longitude.abs() > 180.0 {
            return Err(SunCalcError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A sun altitude threshold with the names of its morning and evening crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPhase {
    /// Degrees above the horizon.
    pub angle: f64,
    pub rise_name: &'static str,
    pub set_name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTimes<Tz: TimeZone> {
    pub phase: SunPhase,
    pub rise: Option<DateTime<Tz>>,
    pub set: Option<DateTime<Tz>>,
}

/// Solar event times for one day. `None` marks an event that does not occur.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes<Tz: TimeZone> {
    pub solar_noon: Option<DateTime<Tz>>,
    pub nadir: Option<DateTime<Tz>>,
    pub phases: Vec<PhaseTimes<Tz>>,
}

impl<Tz: TimeZone> SunTimes<Tz> {
    /// Looks an event up by label, e.g. `"solarNoon"` or `"nauticalDusk"`.
    pub fn get(&self, label: &str) -> Option<&DateTime<Tz>> {
        self.iter()
            .find(|(name, _)| *name == label)
            .and_then(|(_, time)| time)
    }

    /// All events in label order: solarNoon, nadir, then each phase's rise and set.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&DateTime<Tz>>)> + '_ {
        let fixed = [
            ("solarNoon", self.solar_noon.as_ref()),
            ("nadir", self.nadir.as_ref()),
        ];
        let phases = self.phases.iter().flat_map(|p| {
            [
                (p.phase.rise_name, p.rise.as_ref()),
                (p.phase.set_name, p.set.as_ref()),
            ]
        });
        fixed.into_iter().chain(phases)
    }

    pub fn sunrise(&self) -> Option<&DateTime<Tz>> {
        self.get("sunrise")
    }

    pub fn sunset(&self) -> Option<&DateTime<Tz>> {
        self.get("sunset")
    }

    pub fn sunrise_end(&self) -> Option<&DateTime<Tz>> {
        self.get("sunriseEnd")
    }

    pub fn sunset_start(&self) -> Option<&DateTime<Tz>> {
        self.get("sunsetStart")
    }

    pub fn dawn(&self) -> Option<&DateTime<Tz>> {
        self.get("dawn")
    }

    pub fn dusk(&self) -> Option<&DateTime<Tz>> {
        self.get("dusk")
    }

    pub fn nautical_dawn(&self) -> Option<&DateTime<Tz>> {
        self.get("nauticalDawn")
    }

    pub fn nautical_dusk(&self) -> Option<&DateTime<Tz>> {
        self.get("nauticalDusk")
    }

    pub fn night_end(&self) -> Option<&DateTime<Tz>> {
        self.get("nightEnd")
    }

    pub fn night(&self) -> Option<&DateTime<Tz>> {
        self.get("night")
    }

    pub fn golden_hour_end(&self) -> Option<&DateTime<Tz>> {
        self.get("goldenHourEnd")
    }

    pub fn golden_hour(&self) -> Option<&DateTime<Tz>> {
        self.get("goldenHour")
    }
}

/// Illuminated state of the moon.
///
/// `phase` runs from 0 (new) through 0.5 (full) back towards 1. `angle` is the
/// midpoint angle of the bright limb in radians, measured eastward from north.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonIllumination {
    pub fraction: f64,
    pub phase: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoonTimes<Tz: TimeZone> {
    /// At least one horizon crossing was found during the day.
    Crossings {
        rise: Option<DateTime<Tz>>,
        set: Option<DateTime<Tz>>,
    },
    AlwaysUp,
    AlwaysDown,
}

impl<Tz: TimeZone> MoonTimes<Tz> {
    pub fn rise(&self) -> Option<&DateTime<Tz>> {
        match self {
            MoonTimes::Crossings { rise, .. } => rise.as_ref(),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<&DateTime<Tz>> {
        match self {
            MoonTimes::Crossings { set, .. } => set.as_ref(),
            _ => None,
        }
    }

    pub fn is_always_up(&self) -> bool {
        matches!(self, MoonTimes::AlwaysUp)
    }

    pub fn is_always_down(&self) -> bool {
        matches!(self, MoonTimes::AlwaysDown)
    }
}
