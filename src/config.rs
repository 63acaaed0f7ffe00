use crate::error::{Result, SunCalcError};
use crate::types::SunPhase;

/// Default sun altitude thresholds, in output order.
pub const SUN_PHASES: [SunPhase; 6] = [
    SunPhase { angle: -0.833, rise_name: "sunrise", set_name: "sunset" },
    SunPhase { angle: -0.3, rise_name: "sunriseEnd", set_name: "sunsetStart" },
    SunPhase { angle: -6.0, rise_name: "dawn", set_name: "dusk" },
    SunPhase { angle: -12.0, rise_name: "nauticalDawn", set_name: "nauticalDusk" },
    SunPhase { angle: -18.0, rise_name: "nightEnd", set_name: "night" },
    SunPhase { angle: 6.0, rise_name: "goldenHourEnd", set_name: "goldenHour" },
];

/// Moon altitude correction applied to every search sample, degrees.
pub const MOON_HORIZON_CORRECTION: f64 = 0.133;
pub const MOON_SEARCH_STEP_HOURS: i32 = 2;
pub const MOON_SEARCH_WINDOWS: i32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct SunTimesConfig {
    pub phases: Vec<SunPhase>,
}

impl Default for SunTimesConfig {
    fn default() -> Self {
        Self {
            phases: SUN_PHASES.to_vec(),
        }
    }
}

impl SunTimesConfig {
    /// A table with no thresholds; only solar noon and nadir are computed.
    pub fn empty() -> Self {
        Self { phases: Vec::new() }
    }

    /// Appends a custom threshold, `angle` in degrees above the horizon.
    pub fn with_phase(
        mut self,
        angle: f64,
        rise_name: &'static str,
        set_name: &'static str,
    ) -> Result<Self> {
        if !angle.is_finite() || angle.abs() > 90.0 {
            return Err(SunCalcError::InvalidPhaseAngle(angle));
        }
        self.phases.push(SunPhase {
            angle,
            rise_name,
            set_name,
        });
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoonTimesConfig {
    /// Search the UTC calendar day instead of the local one.
    pub utc_day: bool,
}
