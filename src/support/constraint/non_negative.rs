use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Heat inputs to an engine are checked against this marker.
///
/// # Examples
///
/// ```
/// use carnot_models::support::constraint::{Constrained, NonNegative};
/// use uom::si::{energy::kilojoule, f64::Energy};
///
/// let heat = NonNegative::new(Energy::new::<kilojoule>(1.0)).unwrap();
/// assert_eq!(heat.as_ref().get::<kilojoule>(), 1.0);
///
/// // Zero is allowed:
/// assert!(Constrained::<_, NonNegative>::new(0.0).is_ok());
///
/// // Error cases:
/// assert!(NonNegative::new(-7.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
