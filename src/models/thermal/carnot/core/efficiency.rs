use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, UnitIntervalUpperOpen};

use super::{BandThresholds, CarnotError, EfficiencyBand, ReservoirPair};

/// Carnot efficiency and the quantities derived from it.
///
/// Fractions are per unit of heat drawn from the hot reservoir, so
/// `work_fraction + waste_fraction == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotResult {
    /// Carnot efficiency `η = 1 − T_cold / T_hot`, in `[0, 1)`.
    pub efficiency: Constrained<Ratio, UnitIntervalUpperOpen>,

    /// Fraction of heat input converted to work (equal to `η`).
    pub work_fraction: Ratio,

    /// Fraction of heat input rejected to the cold reservoir (`1 − η`).
    pub waste_fraction: Ratio,

    /// `T_cold / T_hot`.
    pub temperature_ratio: Ratio,

    /// Qualitative rating of the efficiency.
    pub band: EfficiencyBand,
}

/// Computes the Carnot efficiency between two reservoirs.
///
/// Uses the default [`BandThresholds`].
///
/// # Errors
///
/// - [`CarnotError::InvalidTemperature`] if either temperature is not a
///   finite value above absolute zero.
/// - [`CarnotError::InvalidReservoirOrdering`] if `cold >= hot`.
pub fn compute_efficiency(
    hot: ThermodynamicTemperature,
    cold: ThermodynamicTemperature,
) -> Result<CarnotResult, CarnotError> {
    let reservoirs = ReservoirPair::new(hot, cold)?;
    compute_efficiency_with(&reservoirs, &BandThresholds::default())
}

/// Computes the Carnot efficiency for a validated pair using custom bands.
///
/// # Errors
///
/// Returns [`CarnotError::InvalidTemperature`] for the cold reservoir if the
/// efficiency leaves `[0, 1)`, which a [`ReservoirPair`] already rules out.
pub fn compute_efficiency_with(
    reservoirs: &ReservoirPair,
    thresholds: &BandThresholds,
) -> Result<CarnotResult, CarnotError> {
    let temperature_ratio = reservoirs.temperature_ratio();
    let eta = Ratio::new::<ratio>(1.0 - temperature_ratio.get::<ratio>());

    let efficiency =
        UnitIntervalUpperOpen::new(eta).map_err(|_| CarnotError::InvalidTemperature {
            kelvin: reservoirs.cold().get::<kelvin>(),
        })?;

    Ok(CarnotResult {
        efficiency,
        work_fraction: eta,
        waste_fraction: Ratio::new::<ratio>(1.0) - eta,
        temperature_ratio,
        band: thresholds.classify(eta),
    })
}
