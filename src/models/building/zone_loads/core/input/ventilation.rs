use uom::si::{
    f64::{Time, Volume, VolumeRate},
    time::hour,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Outdoor air exchange expressed in air changes per hour (ACH).
///
/// Guaranteed to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirChangeRate(Constrained<f64, NonNegative>);

impl AirChangeRate {
    /// Creates an air-change rate from a number of air changes per hour.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is negative or `NaN`.
    pub fn per_hour(changes: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(changes)?))
    }

    /// Creates an air-change rate without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the rate is non-negative.
    #[must_use]
    pub fn per_hour_unchecked(changes: f64) -> Self {
        Self(Constrained::new_unchecked(changes))
    }

    /// No outdoor air exchange.
    #[must_use]
    pub fn none() -> Self {
        Self(NonNegative::zero())
    }

    /// Returns the number of air changes per hour.
    #[must_use]
    pub fn changes_per_hour(&self) -> f64 {
        *self.0.as_ref()
    }

    /// Returns the volumetric flow that renews `volume` at this rate.
    #[must_use]
    pub fn volume_rate(&self, volume: Volume) -> VolumeRate {
        volume * self.changes_per_hour() / Time::new::<hour>(1.0)
    }
}
