use thiserror::Error;

pub type Result<T> = std::result::Result<T, SunCalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SunCalcError {
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),

    #[error("sun phase angle {0} is outside [-90, 90] degrees")]
    InvalidPhaseAngle(f64),

    /// Local midnight of the requested day could not be mapped to an instant.
    #[error("local midnight cannot be resolved in the observer's time zone")]
    UnresolvableMidnight,
}
