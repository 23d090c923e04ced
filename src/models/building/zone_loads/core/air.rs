use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, SpecificHeatCapacity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    constraint::{ConstraintResult, StrictlyPositive},
    units::SpecificEnthalpy,
};

/// Constant properties of the air flowing through the zone.
///
/// The defaults are the usual design values: `c = 1000 J/kg·K`,
/// `l = 2496 kJ/kg`, and `ρ = 1.2 kg/m³`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    specific_heat: SpecificHeatCapacity,
    latent_heat: SpecificEnthalpy,
    density: MassDensity,
}

impl AirProperties {
    /// Constructs validated air properties.
    ///
    /// # Errors
    ///
    /// Returns an error if any property is not strictly positive.
    pub fn new(
        specific_heat: SpecificHeatCapacity,
        latent_heat: SpecificEnthalpy,
        density: MassDensity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            specific_heat: StrictlyPositive::new(specific_heat)?.into_inner(),
            latent_heat: StrictlyPositive::new(latent_heat)?.into_inner(),
            density: StrictlyPositive::new(density)?.into_inner(),
        })
    }

    /// Specific heat of air at constant pressure.
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat
    }

    /// Latent heat of vaporization of water.
    #[must_use]
    pub fn latent_heat(&self) -> SpecificEnthalpy {
        self.latent_heat
    }

    /// Density of air.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }
}

impl Default for AirProperties {
    fn default() -> Self {
        Self {
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1e3),
            latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(2496e3),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.2),
        }
    }
}
