//! Carnot heat engine model.
//!
//! [`Carnot`] is the [`twine_core::Model`] adapter a calculator front end
//! calls on every input change: raw reservoir temperatures in, a
//! [`CarnotResult`] out. The computational core lives in the internal
//! [`core`] module and its operations are re-exported here for callers that
//! need the energy split, the P-V loop, or the comparison table.
//!
//! # Example
//!
//! ```
//! use carnot_models::models::thermal::carnot::{
//!     Carnot, EfficiencyBand, ReservoirInput, Temperature, derive_energy_flow,
//! };
//! use twine_core::Model;
//! use uom::si::{energy::joule, f64::Energy};
//!
//! let model = Carnot::default();
//! let result = model
//!     .call(&ReservoirInput {
//!         hot: Temperature::celsius(600.0),
//!         cold: Temperature::celsius(25.0),
//!     })
//!     .unwrap();
//! assert_eq!(result.band, EfficiencyBand::Excellent);
//!
//! let flow = derive_energy_flow(Energy::new::<joule>(1000.0), &result).unwrap();
//! assert!(flow.work_output > flow.waste_heat);
//! ```

mod core;

pub use self::core::{
    BandThresholds, COMPARISON_CSV_HEADER, CarnotError, CarnotResult, CycleProcess,
    DEFAULT_EXCELLENT_THRESHOLD, DEFAULT_GAS_CONSTANT, DEFAULT_GAS_MASS, DEFAULT_GOOD_THRESHOLD,
    DEFAULT_HEAT_CAPACITY_RATIO, DEFAULT_MODERATE_THRESHOLD, DEFAULT_POINTS_PER_LEG,
    EfficiencyBand, EnergyFlow, EngineComparisonRow, PvCycle, PvCycleConfig, PvLeg, PvPoint,
    ReservoirInput, ReservoirPair, Temperature, TemperatureUnit, VolumeBounds,
    build_pv_cycle_points, build_pv_cycle_with, comparison_csv, comparison_table,
    compute_efficiency, compute_efficiency_with, denormalize_temperature, derive_energy_flow,
    normalize_temperature,
};

use tracing::debug;
use twine_core::Model;
use uom::si::{ratio::ratio, thermodynamic_temperature::kelvin};

/// A Carnot engine as a Twine model.
///
/// Holds the band policy used to rate results; everything else is computed
/// fresh from each input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Carnot {
    thresholds: BandThresholds,
}

impl Carnot {
    /// Creates a model that rates efficiencies with custom thresholds.
    #[must_use]
    pub fn new(thresholds: BandThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &BandThresholds {
        &self.thresholds
    }
}

impl Model for Carnot {
    type Input = ReservoirInput;
    type Output = CarnotResult;
    type Error = CarnotError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let reservoirs = input.resolve()?;
        let result = compute_efficiency_with(&reservoirs, &self.thresholds)?;

        debug!(
            t_hot = reservoirs.hot().get::<kelvin>(),
            t_cold = reservoirs.cold().get::<kelvin>(),
            efficiency = result.efficiency.as_ref().get::<ratio>(),
            band = result.band.label(),
            "evaluated Carnot engine"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::Ratio;

    fn input(hot: Temperature, cold: Temperature) -> ReservoirInput {
        ReservoirInput { hot, cold }
    }

    #[test]
    fn call_matches_free_function() {
        let model = Carnot::default();
        let result = model
            .call(&input(Temperature::kelvin(500.0), Temperature::kelvin(300.0)))
            .unwrap();

        assert_relative_eq!(result.efficiency.as_ref().get::<ratio>(), 0.4);
        assert_eq!(result.band, EfficiencyBand::Good);
        assert_eq!(model.thresholds(), &BandThresholds::default());
    }

    #[test]
    fn celsius_input_is_normalized() {
        let model = Carnot::default();
        let result = model
            .call(&input(Temperature::celsius(227.0), Temperature::celsius(27.0)))
            .unwrap();

        assert_relative_eq!(
            result.efficiency.as_ref().get::<ratio>(),
            1.0 - 300.15 / 500.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn custom_thresholds_are_applied() {
        let model = Carnot::new(BandThresholds {
            excellent: Ratio::new::<ratio>(0.95),
            ..BandThresholds::default()
        });
        let result = model
            .call(&input(Temperature::kelvin(873.0), Temperature::kelvin(298.0)))
            .unwrap();

        assert_eq!(result.band, EfficiencyBand::Good);
    }

    #[test]
    fn invalid_inputs_surface_as_errors() {
        let model = Carnot::default();

        assert!(matches!(
            model.call(&input(Temperature::kelvin(300.0), Temperature::kelvin(300.0))),
            Err(CarnotError::InvalidReservoirOrdering { .. })
        ));
        assert!(matches!(
            model.call(&input(Temperature::kelvin(300.0), Temperature::celsius(-280.0))),
            Err(CarnotError::InvalidTemperature { .. })
        ));
    }
}
