use uom::si::f64::{Ratio, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// The state of a moist-air stream or space.
///
/// Relative humidity is guaranteed to lie in `[0, 1]`.
///
/// # Example
///
/// ```
/// use zone_loads::support::psychro::MoistAir;
/// use uom::si::{
///     f64::{Ratio, ThermodynamicTemperature},
///     ratio::ratio,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let outdoor = MoistAir::new(
///     ThermodynamicTemperature::new::<degree_celsius>(32.0),
///     Ratio::new::<ratio>(0.5),
/// );
/// assert!(outdoor.is_ok());
///
/// let supersaturated = MoistAir::new(
///     ThermodynamicTemperature::new::<degree_celsius>(32.0),
///     Ratio::new::<ratio>(1.5),
/// );
/// assert!(supersaturated.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: Ratio,
}

impl MoistAir {
    /// Constructs a validated moist-air state.
    ///
    /// # Errors
    ///
    /// Returns an error if the relative humidity is outside `[0, 1]` or `NaN`.
    pub fn new(dry_bulb: ThermodynamicTemperature, relative_humidity: Ratio) -> ConstraintResult<Self> {
        let relative_humidity = Constrained::<Ratio, UnitInterval>::new(relative_humidity)?;
        Ok(Self::from_constrained(dry_bulb, relative_humidity))
    }

    /// Constructs a moist-air state from a pre-validated relative humidity.
    #[must_use]
    pub fn from_constrained(
        dry_bulb: ThermodynamicTemperature,
        relative_humidity: Constrained<Ratio, UnitInterval>,
    ) -> Self {
        Self {
            dry_bulb,
            relative_humidity: relative_humidity.into_inner(),
        }
    }

    /// Constructs a moist-air state without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the relative humidity lies in `[0, 1]`.
    #[must_use]
    pub fn new_unchecked(dry_bulb: ThermodynamicTemperature, relative_humidity: Ratio) -> Self {
        Self {
            dry_bulb,
            relative_humidity,
        }
    }

    /// Returns the dry-bulb temperature.
    #[must_use]
    pub fn dry_bulb(&self) -> ThermodynamicTemperature {
        self.dry_bulb
    }

    /// Returns the relative humidity as a fraction in `[0, 1]`.
    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.relative_humidity
    }
}
