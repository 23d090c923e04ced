use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
///
/// Implementations should ensure that `zero() ≤ one()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Relative humidity and the wall-to-envelope fraction are both fractions
/// in this interval.
///
/// # Examples
///
/// ```
/// use zone_loads::support::constraint::{Constrained, UnitInterval};
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// let rh = Constrained::<Ratio, UnitInterval>::new(Ratio::new::<ratio>(0.5)).unwrap();
/// assert_eq!(rh.into_inner().get::<ratio>(), 0.5);
///
/// let dry = UnitInterval::zero::<Ratio>();
/// assert_eq!(dry.into_inner().get::<ratio>(), 0.0);
///
/// assert!(UnitInterval::new(Ratio::new::<ratio>(1.2)).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }

    /// Returns the lower bound (zero) as a constrained value.
    #[must_use]
    pub fn zero<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitInterval> {
        Constrained::<T, UnitInterval> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn relative_humidity_bounds() {
        assert!(UnitInterval::new(Ratio::new::<ratio>(0.0)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<ratio>(0.5)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<percent>(100.0)).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            UnitInterval::new(Ratio::new::<ratio>(-0.01)),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitInterval::new(Ratio::new::<percent>(101.0)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn endpoints() {
        assert_eq!(UnitInterval::zero::<f64>().into_inner(), 0.0);
        assert_eq!(UnitInterval::one::<Ratio>().into_inner().get::<ratio>(), 1.0);
    }
}
