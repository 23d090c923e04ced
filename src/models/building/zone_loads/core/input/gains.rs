use uom::si::f64::{HeatFluxDensity, Power};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

use super::Surfaces;

/// Internal heat gains from occupants, equipment, and solar radiation.
///
/// Every field is guaranteed to be non-negative.
/// The occupant count is a real number so partial occupancy can be modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalGains {
    occupants: f64,
    sensible_per_occupant: Power,
    latent_per_occupant: Power,
    equipment_density: HeatFluxDensity,
    solar_density: HeatFluxDensity,
}

/// Internal gains resolved against a zone's surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedGains {
    pub solar: Power,
    pub equipment: Power,
    pub sensible: Power,
    pub latent: Power,
}

impl InternalGains {
    /// Constructs validated internal gains.
    ///
    /// `equipment_density` is per unit floor area and `solar_density` is per
    /// unit window area.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative or `NaN`.
    pub fn new(
        occupants: f64,
        sensible_per_occupant: Power,
        latent_per_occupant: Power,
        equipment_density: HeatFluxDensity,
        solar_density: HeatFluxDensity,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            NonNegative::new(occupants)?,
            NonNegative::new(sensible_per_occupant)?,
            NonNegative::new(latent_per_occupant)?,
            NonNegative::new(equipment_density)?,
            NonNegative::new(solar_density)?,
        ))
    }

    /// Constructs internal gains from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        occupants: Constrained<f64, NonNegative>,
        sensible_per_occupant: Constrained<Power, NonNegative>,
        latent_per_occupant: Constrained<Power, NonNegative>,
        equipment_density: Constrained<HeatFluxDensity, NonNegative>,
        solar_density: Constrained<HeatFluxDensity, NonNegative>,
    ) -> Self {
        Self::new_unchecked(
            occupants.into_inner(),
            sensible_per_occupant.into_inner(),
            latent_per_occupant.into_inner(),
            equipment_density.into_inner(),
            solar_density.into_inner(),
        )
    }

    /// Constructs internal gains without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure every value is non-negative.
    #[must_use]
    pub fn new_unchecked(
        occupants: f64,
        sensible_per_occupant: Power,
        latent_per_occupant: Power,
        equipment_density: HeatFluxDensity,
        solar_density: HeatFluxDensity,
    ) -> Self {
        Self {
            occupants,
            sensible_per_occupant,
            latent_per_occupant,
            equipment_density,
            solar_density,
        }
    }

    /// Returns the gains with no occupants, equipment, or sun.
    #[must_use]
    pub fn none() -> Self {
        Self::from_constrained(
            NonNegative::zero(),
            NonNegative::zero(),
            NonNegative::zero(),
            NonNegative::zero(),
            NonNegative::zero(),
        )
    }

    #[must_use]
    pub fn occupants(&self) -> f64 {
        self.occupants
    }

    #[must_use]
    pub fn sensible_per_occupant(&self) -> Power {
        self.sensible_per_occupant
    }

    #[must_use]
    pub fn latent_per_occupant(&self) -> Power {
        self.latent_per_occupant
    }

    #[must_use]
    pub fn equipment_density(&self) -> HeatFluxDensity {
        self.equipment_density
    }

    #[must_use]
    pub fn solar_density(&self) -> HeatFluxDensity {
        self.solar_density
    }

    pub(crate) fn resolve(&self, surfaces: &Surfaces) -> ResolvedGains {
        let solar: Power = self.solar_density * surfaces.window;
        let equipment: Power = self.equipment_density * surfaces.floor;
        let occupants_sensible = self.sensible_per_occupant * self.occupants;

        ResolvedGains {
            solar,
            equipment,
            sensible: occupants_sensible + solar + equipment,
            latent: self.latent_per_occupant * self.occupants,
        }
    }
}
