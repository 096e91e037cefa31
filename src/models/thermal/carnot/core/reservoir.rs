use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::TemperatureDifference;

use super::{CarnotError, Temperature, temperature::check_absolute};

/// Hot and cold reservoir temperatures, as entered by a user.
///
/// This is the input to the [`Carnot`](crate::models::thermal::carnot::Carnot) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservoirInput {
    pub hot: Temperature,
    pub cold: Temperature,
}

impl ReservoirInput {
    /// Normalizes both temperatures and validates their ordering.
    ///
    /// # Errors
    ///
    /// Returns a [`CarnotError`] if either temperature is invalid or the
    /// cold reservoir is not strictly colder than the hot one.
    pub fn resolve(&self) -> Result<ReservoirPair, CarnotError> {
        ReservoirPair::new(self.hot.normalize()?, self.cold.normalize()?)
    }
}

/// A validated pair of reservoir temperatures.
///
/// Guarantees `hot > cold > 0 K`, with the cold reservoir far enough from
/// absolute zero that `cold / hot` does not vanish in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservoirPair {
    hot: ThermodynamicTemperature,
    cold: ThermodynamicTemperature,
}

impl ReservoirPair {
    /// Validates a hot/cold reservoir pair.
    ///
    /// Both temperatures are checked for positivity (hot first) before their
    /// ordering is checked.
    ///
    /// # Errors
    ///
    /// - [`CarnotError::InvalidTemperature`] if either temperature is not a
    ///   finite value above absolute zero.
    /// - [`CarnotError::InvalidReservoirOrdering`] if `cold >= hot`.
    pub fn new(
        hot: ThermodynamicTemperature,
        cold: ThermodynamicTemperature,
    ) -> Result<Self, CarnotError> {
        check_absolute(hot)?;
        check_absolute(cold)?;

        let hot_kelvin = hot.get::<kelvin>();
        let cold_kelvin = cold.get::<kelvin>();

        if cold_kelvin >= hot_kelvin {
            return Err(CarnotError::InvalidReservoirOrdering {
                hot_kelvin,
                cold_kelvin,
            });
        }

        // At this scale the cold reservoir is indistinguishable from 0 K.
        if 1.0 - cold_kelvin / hot_kelvin >= 1.0 {
            return Err(CarnotError::InvalidTemperature {
                kelvin: cold_kelvin,
            });
        }

        Ok(Self { hot, cold })
    }

    #[must_use]
    pub fn hot(&self) -> ThermodynamicTemperature {
        self.hot
    }

    #[must_use]
    pub fn cold(&self) -> ThermodynamicTemperature {
        self.cold
    }

    /// Returns `T_hot - T_cold`.
    #[must_use]
    pub fn span(&self) -> TemperatureInterval {
        self.hot.minus(self.cold)
    }

    /// Returns `T_cold / T_hot`, always in `(0, 1)`.
    #[must_use]
    pub fn temperature_ratio(&self) -> Ratio {
        Ratio::new::<ratio>(self.cold.get::<kelvin>() / self.hot.get::<kelvin>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::kelvin as delta_kelvin;

    fn kelvins(hot: f64, cold: f64) -> Result<ReservoirPair, CarnotError> {
        ReservoirPair::new(
            ThermodynamicTemperature::new::<kelvin>(hot),
            ThermodynamicTemperature::new::<kelvin>(cold),
        )
    }

    #[test]
    fn valid_pair() {
        let pair = kelvins(500.0, 300.0).unwrap();
        assert_relative_eq!(pair.span().get::<delta_kelvin>(), 200.0);
        assert_relative_eq!(pair.temperature_ratio().get::<ratio>(), 0.6);
        assert_relative_eq!(pair.hot().get::<kelvin>(), 500.0);
        assert_relative_eq!(pair.cold().get::<kelvin>(), 300.0);
    }

    #[test]
    fn equal_temperatures_are_misordered() {
        assert_eq!(
            kelvins(300.0, 300.0),
            Err(CarnotError::InvalidReservoirOrdering {
                hot_kelvin: 300.0,
                cold_kelvin: 300.0,
            })
        );
    }

    #[test]
    fn swapped_temperatures_are_misordered() {
        assert!(matches!(
            kelvins(300.0, 500.0),
            Err(CarnotError::InvalidReservoirOrdering { .. })
        ));
    }

    #[test]
    fn positivity_is_checked_before_ordering() {
        assert_eq!(
            kelvins(300.0, -10.0),
            Err(CarnotError::InvalidTemperature { kelvin: -10.0 })
        );
        assert_eq!(
            kelvins(-5.0, -10.0),
            Err(CarnotError::InvalidTemperature { kelvin: -5.0 })
        );
        assert!(matches!(
            kelvins(300.0, 0.0),
            Err(CarnotError::InvalidTemperature { .. })
        ));
    }

    #[test]
    fn vanishing_cold_reservoir_is_rejected() {
        assert_eq!(
            kelvins(1e300, 1e-300),
            Err(CarnotError::InvalidTemperature { kelvin: 1e-300 })
        );
    }

    #[test]
    fn input_resolves_mixed_units() {
        let input = ReservoirInput {
            hot: Temperature::celsius(600.0),
            cold: Temperature::kelvin(298.0),
        };
        let pair = input.resolve().unwrap();
        assert_relative_eq!(pair.hot().get::<kelvin>(), 873.15, epsilon = 1e-9);

        let input = ReservoirInput {
            hot: Temperature::celsius(20.0),
            cold: Temperature::celsius(20.0),
        };
        assert!(matches!(
            input.resolve(),
            Err(CarnotError::InvalidReservoirOrdering { .. })
        ));
    }
}
