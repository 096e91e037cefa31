use uom::si::{energy::joule, f64::Energy, ratio::ratio};

use crate::support::constraint::NonNegative;

use super::{CarnotError, CarnotResult};

/// How a quantity of heat splits between work and waste in a Carnot engine.
///
/// This is the data behind an energy-flow (Sankey) diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyFlow {
    /// Heat drawn from the hot reservoir.
    pub heat_input: Energy,

    /// Work delivered by the engine.
    pub work_output: Energy,

    /// Heat rejected to the cold reservoir.
    pub waste_heat: Energy,
}

/// Splits a heat input into work output and waste heat.
///
/// # Errors
///
/// Returns [`CarnotError::InvalidEnergyInput`] if `heat_input` is negative or `NaN`.
pub fn derive_energy_flow(
    heat_input: Energy,
    result: &CarnotResult,
) -> Result<EnergyFlow, CarnotError> {
    let heat_input = NonNegative::new(heat_input)
        .map_err(|_| CarnotError::InvalidEnergyInput {
            joules: heat_input.get::<joule>(),
        })?
        .into_inner();

    Ok(EnergyFlow {
        heat_input,
        work_output: heat_input * result.work_fraction.get::<ratio>(),
        waste_heat: heat_input * result.waste_fraction.get::<ratio>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::kilojoule, f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin,
    };

    use crate::models::thermal::carnot::core::compute_efficiency;

    fn forty_percent() -> CarnotResult {
        compute_efficiency(
            ThermodynamicTemperature::new::<kelvin>(500.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        )
        .unwrap()
    }

    #[test]
    fn splits_heat_into_work_and_waste() {
        let flow = derive_energy_flow(Energy::new::<joule>(1000.0), &forty_percent()).unwrap();

        assert_relative_eq!(flow.heat_input.get::<joule>(), 1000.0);
        assert_relative_eq!(flow.work_output.get::<joule>(), 400.0);
        assert_relative_eq!(flow.waste_heat.get::<joule>(), 600.0);
    }

    #[test]
    fn work_plus_waste_equals_input() {
        let flow = derive_energy_flow(Energy::new::<kilojoule>(3.7), &forty_percent()).unwrap();
        assert_relative_eq!(
            (flow.work_output + flow.waste_heat).get::<kilojoule>(),
            3.7,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_heat_gives_zero_flows() {
        let flow = derive_energy_flow(Energy::new::<joule>(0.0), &forty_percent()).unwrap();
        assert_relative_eq!(flow.work_output.get::<joule>(), 0.0);
        assert_relative_eq!(flow.waste_heat.get::<joule>(), 0.0);
    }

    #[test]
    fn negative_heat_is_rejected() {
        assert_eq!(
            derive_energy_flow(Energy::new::<joule>(-1.0), &forty_percent()),
            Err(CarnotError::InvalidEnergyInput { joules: -1.0 })
        );
        assert!(matches!(
            derive_energy_flow(Energy::new::<joule>(f64::NAN), &forty_percent()),
            Err(CarnotError::InvalidEnergyInput { .. })
        ));
    }
}
