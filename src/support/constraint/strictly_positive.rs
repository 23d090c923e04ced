use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than zero.
///
/// Zone dimensions and the supply temperature offset are strictly positive:
/// a zero value would collapse the zone or divide the supply flow by zero.
///
/// # Examples
///
/// ```
/// use zone_loads::support::constraint::StrictlyPositive;
/// use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};
///
/// let offset = StrictlyPositive::new(TemperatureInterval::new::<kelvin>(15.0)).unwrap();
/// assert_eq!(offset.into_inner().get::<kelvin>(), 15.0);
///
/// assert!(StrictlyPositive::new(TemperatureInterval::new::<kelvin>(0.0)).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
