//! Magnus–Tetens moist-air model.
//!
//! A compact exponential fit of saturation pressure over liquid water,
//! adequate for comfort-range design conditions.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
};

use crate::support::{
    constraint::{ConstraintResult, StrictlyPositive},
    psychro::{
        MoistAir, PropertyError,
        capability::{HasHumidityRatio, HasSaturationPressure},
    },
};

use super::{STANDARD_ATMOSPHERE_PA, check_domain, mix};

const A_PA: f64 = 610.78;
const B: f64 = 17.27;
const C_CELSIUS: f64 = 237.3;
const MOLAR_MASS_RATIO: f64 = 0.622;

/// Moist-air model using the Magnus–Tetens saturation pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnus {
    pressure: Pressure,
}

impl Magnus {
    /// Lowest dry-bulb temperature accepted, in °C.
    pub const MIN_CELSIUS: f64 = -45.0;

    /// Highest dry-bulb temperature accepted, in °C.
    pub const MAX_CELSIUS: f64 = 60.0;

    /// Creates a model evaluated at the given total (barometric) pressure.
    ///
    /// # Errors
    ///
    /// Returns an error if the pressure is not strictly positive.
    pub fn at_pressure(pressure: Pressure) -> ConstraintResult<Self> {
        let pressure = StrictlyPositive::new(pressure)?.into_inner();
        Ok(Self { pressure })
    }

    /// Returns the total pressure used by this model.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

impl Default for Magnus {
    fn default() -> Self {
        Self {
            pressure: Pressure::new::<pascal>(STANDARD_ATMOSPHERE_PA),
        }
    }
}

impl HasSaturationPressure for Magnus {
    fn saturation_pressure(
        &self,
        dry_bulb: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let celsius = check_domain(dry_bulb, Self::MIN_CELSIUS, Self::MAX_CELSIUS)?;
        Ok(Pressure::new::<pascal>(
            A_PA * (B * celsius / (celsius + C_CELSIUS)).exp(),
        ))
    }
}

impl HasHumidityRatio for Magnus {
    fn humidity_ratio(&self, state: &MoistAir) -> Result<Ratio, PropertyError> {
        let p_sat = self.saturation_pressure(state.dry_bulb())?;
        mix(state, p_sat, self.pressure, MOLAR_MASS_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{ratio::ratio, thermodynamic_temperature::degree_celsius};

    use crate::support::psychro::HylandWexler;

    fn moist_air(t: f64, rh: f64) -> MoistAir {
        MoistAir::new(
            ThermodynamicTemperature::new::<degree_celsius>(t),
            Ratio::new::<ratio>(rh),
        )
        .unwrap()
    }

    #[test]
    fn saturation_pressure_at_freezing() {
        let p = Magnus::default()
            .saturation_pressure(ThermodynamicTemperature::new::<degree_celsius>(0.0))
            .unwrap();
        assert_relative_eq!(p.get::<pascal>(), 610.78, epsilon = 1e-9);
    }

    #[test]
    fn close_to_hyland_wexler_in_comfort_range() {
        let magnus = Magnus::default();
        let ashrae = HylandWexler::default();

        for t in [10.0, 20.0, 26.0, 32.0] {
            let state = moist_air(t, 0.5);
            assert_relative_eq!(
                magnus.humidity_ratio(&state).unwrap().get::<ratio>(),
                ashrae.humidity_ratio(&state).unwrap().get::<ratio>(),
                max_relative = 5e-3
            );
        }
    }

    #[test]
    fn rejects_temperatures_outside_fit() {
        assert!(matches!(
            Magnus::default().humidity_ratio(&moist_air(80.0, 0.5)),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            Magnus::default().humidity_ratio(&moist_air(-50.0, 0.5)),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }
}
