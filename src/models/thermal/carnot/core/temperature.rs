//! Reservoir temperatures as entered by a user.

use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::CarnotError;

/// Temperature scales accepted from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

/// A raw temperature value tagged with its scale.
///
/// Nothing is checked until [`Temperature::normalize`] is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    #[must_use]
    pub fn kelvin(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Kelvin,
        }
    }

    #[must_use]
    pub fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Celsius,
        }
    }

    /// Converts this value to an absolute temperature.
    ///
    /// # Errors
    ///
    /// See [`normalize_temperature`].
    pub fn normalize(self) -> Result<ThermodynamicTemperature, CarnotError> {
        normalize_temperature(self.value, self.unit)
    }
}

/// Converts a value on the given scale to an absolute temperature.
///
/// Celsius values are shifted by 273.15 K.
///
/// # Errors
///
/// Returns [`CarnotError::InvalidTemperature`] if the result is at or below
/// absolute zero, infinite, or `NaN`.
pub fn normalize_temperature(
    value: f64,
    unit: TemperatureUnit,
) -> Result<ThermodynamicTemperature, CarnotError> {
    let temperature = match unit {
        TemperatureUnit::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
        TemperatureUnit::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
    };
    check_absolute(temperature)?;
    Ok(temperature)
}

/// Expresses an absolute temperature on the given scale.
///
/// This is the inverse of [`normalize_temperature`] and is what a display
/// layer uses to echo a reservoir back in the user's chosen unit.
#[must_use]
pub fn denormalize_temperature(temperature: ThermodynamicTemperature, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => temperature.get::<kelvin>(),
        TemperatureUnit::Celsius => temperature.get::<degree_celsius>(),
    }
}

/// Ensures an absolute temperature is finite and above absolute zero.
pub(super) fn check_absolute(temperature: ThermodynamicTemperature) -> Result<(), CarnotError> {
    let value = temperature.get::<kelvin>();
    if value.is_finite() && StrictlyPositive::check(&value).is_ok() {
        Ok(())
    } else {
        Err(CarnotError::InvalidTemperature { kelvin: value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn kelvin_passes_through() {
        let t = normalize_temperature(873.0, TemperatureUnit::Kelvin).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 873.0);
    }

    #[test]
    fn celsius_is_shifted() {
        let t = normalize_temperature(227.0, TemperatureUnit::Celsius).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 500.15, epsilon = 1e-9);

        let t = Temperature::celsius(-50.0).normalize().unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 223.15, epsilon = 1e-9);
    }

    #[test]
    fn absolute_zero_and_below_are_rejected() {
        assert!(matches!(
            normalize_temperature(0.0, TemperatureUnit::Kelvin),
            Err(CarnotError::InvalidTemperature { .. })
        ));
        assert!(matches!(
            normalize_temperature(-10.0, TemperatureUnit::Kelvin),
            Err(CarnotError::InvalidTemperature { kelvin: value }) if value == -10.0
        ));
        assert!(matches!(
            Temperature::celsius(-300.0).normalize(),
            Err(CarnotError::InvalidTemperature { .. })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(Temperature::kelvin(f64::NAN).normalize().is_err());
        assert!(Temperature::kelvin(f64::INFINITY).normalize().is_err());
        assert!(Temperature::celsius(f64::NEG_INFINITY).normalize().is_err());
    }

    #[test]
    fn denormalize_inverts_normalize() {
        let t = ThermodynamicTemperature::new::<kelvin>(298.15);
        let celsius = denormalize_temperature(t, TemperatureUnit::Celsius);
        assert_relative_eq!(celsius, 25.0, epsilon = 1e-9);

        let back = normalize_temperature(celsius, TemperatureUnit::Celsius).unwrap();
        assert_relative_eq!(back.get::<kelvin>(), 298.15, epsilon = 1e-9);

        assert_relative_eq!(denormalize_temperature(t, TemperatureUnit::Kelvin), 298.15);
    }
}
