use thiserror::Error;

/// Errors that can occur while evaluating a Carnot engine.
///
/// Every variant is a user-input validation failure detected before any
/// computation runs. None of them are worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CarnotError {
    /// An absolute temperature is zero, negative, infinite, or `NaN`.
    ///
    /// Also reported for a cold reservoir so close to absolute zero, relative
    /// to the hot reservoir, that the efficiency would round to exactly one.
    #[error("absolute temperature must be finite and above absolute zero, got {kelvin} K")]
    InvalidTemperature { kelvin: f64 },

    /// The cold reservoir is not strictly colder than the hot reservoir.
    #[error(
        "cold reservoir must be colder than hot reservoir: hot={hot_kelvin} K, cold={cold_kelvin} K"
    )]
    InvalidReservoirOrdering { hot_kelvin: f64, cold_kelvin: f64 },

    /// A heat input is negative or `NaN`.
    #[error("heat input must not be negative, got {joules} J")]
    InvalidEnergyInput { joules: f64 },

    /// P-V plot bounds do not satisfy `0 < min < max`.
    #[error("volume bounds must satisfy 0 < min < max: min={min_cubic_meters} m³, max={max_cubic_meters} m³")]
    InvalidVolumeBounds {
        min_cubic_meters: f64,
        max_cubic_meters: f64,
    },
}
