//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state:
//! `p = ρ·R·T`.
//!
//! The Carnot P-V cycle uses them to turn sampled volumes and temperatures
//! into pressures.

use uom::si::f64::{Mass, MassDensity, Pressure, ThermodynamicTemperature, Volume};

use crate::support::units::SpecificGasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub fn pressure(
    temperature: ThermodynamicTemperature,
    density: MassDensity,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    density * gas_constant * temperature
}

/// Computes density using the ideal gas equation of state.
#[must_use]
pub fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Computes the pressure of a fixed mass of gas held in `volume`.
#[must_use]
pub fn pressure_in_volume(
    temperature: ThermodynamicTemperature,
    mass: Mass,
    volume: Volume,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    let density: MassDensity = mass / volume;
    pressure(temperature, density, gas_constant)
}
