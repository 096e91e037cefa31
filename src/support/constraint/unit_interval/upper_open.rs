use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the right-open unit interval: `0 ≤ x < 1`.
///
/// A heat engine efficiency lives here: zero when the reservoirs coincide,
/// approaching but never reaching one as the cold reservoir approaches
/// absolute zero.
///
/// Requires `T: UnitBounds`.
/// We provide [`UnitBounds`] implementations for `f64` and `uom::si::f64::Ratio`.
///
/// # Examples
///
/// ```
/// use carnot_models::support::constraint::{Constrained, UnitIntervalUpperOpen};
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let eta = Constrained::<Ratio, UnitIntervalUpperOpen>::new(Ratio::new::<ratio>(0.4)).unwrap();
/// assert!((eta.as_ref().get::<percent>() - 40.0).abs() < 1e-12);
///
/// assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
/// assert!(UnitIntervalUpperOpen::new(1.0).is_err());
/// assert!(UnitIntervalUpperOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl UnitIntervalUpperOpen {
    /// Constructs `Constrained<T, UnitIntervalUpperOpen>` if 0 ≤ value < 1.
    ///
    /// # Errors
    ///
    /// Fails if the value is outside the upper-open unit interval:
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalUpperOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalUpperOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
