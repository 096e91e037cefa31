//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, energy).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval,
//! such as the span between a hot and a cold reservoir:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use carnot_models::support::units::TemperatureDifference;
//!
//! let t_hot = ThermodynamicTemperature::new::<kelvin>(500.0);
//! let t_cold = ThermodynamicTemperature::new::<kelvin>(300.0);
//! assert_eq!(t_hot.minus(t_cold).get::<delta_kelvin>(), 200.0);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SpecificGasConstant;
pub use temperature_difference::TemperatureDifference;
