//! Type-level numeric constraints with zero runtime cost.
//!
//! This module provides types that express numeric constraints like
//! "non-negative" or "strictly positive" at the type level, with zero runtime
//! overhead after construction.
//!
//! The Carnot model leans on these to validate user input at the boundary:
//! absolute temperatures are [`StrictlyPositive`], heat inputs are
//! [`NonNegative`], and an efficiency always lies in [`UnitIntervalUpperOpen`].
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! For convenience, each marker also provides an associated `new()`
//! constructor (e.g., `StrictlyPositive::new(5.0)`).
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalUpperOpen};

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as [`NonNegative`])
/// or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use carnot_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let kelvin = Constrained::<_, StrictlyPositive>::new(300.0).unwrap();
/// assert_eq!(kelvin.into_inner(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
