//! ASHRAE Hyland–Wexler moist-air model.
//!
//! Saturation pressure follows the Hyland–Wexler correlations tabulated in the
//! ASHRAE Handbook of Fundamentals: over ice from -100 °C to 0 °C and over
//! liquid water from 0 °C to 200 °C.

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

const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843_0e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024_0e-13,
    4.163_501_9,
];

const WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// Ratio of the molar masses of water vapor and dry air.
const MOLAR_MASS_RATIO: f64 = 0.621_945;

/// Moist-air model using the ASHRAE Hyland–Wexler saturation pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HylandWexler {
    pressure: Pressure,
}

impl HylandWexler {
    /// Lowest dry-bulb temperature covered by the correlation, in °C.
    pub const MIN_CELSIUS: f64 = -100.0;

    /// Highest dry-bulb temperature covered by the correlation, in °C.
    pub const MAX_CELSIUS: f64 = 200.0;

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

/// Evaluates the model at one standard atmosphere.
impl Default for HylandWexler {
    fn default() -> Self {
        Self {
            pressure: Pressure::new::<pascal>(STANDARD_ATMOSPHERE_PA),
        }
    }
}

impl HasSaturationPressure for HylandWexler {
    fn saturation_pressure(
        &self,
        dry_bulb: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let celsius = check_domain(dry_bulb, Self::MIN_CELSIUS, Self::MAX_CELSIUS)?;
        let t = celsius + 273.15;

        let ln_p = if celsius < 0.0 {
            let [c1, c2, c3, c4, c5, c6, c7] = ICE;
            c1 / t + c2 + c3 * t + c4 * t.powi(2) + c5 * t.powi(3) + c6 * t.powi(4) + c7 * t.ln()
        } else {
            let [c8, c9, c10, c11, c12, c13] = WATER;
            c8 / t + c9 + c10 * t + c11 * t.powi(2) + c12 * t.powi(3) + c13 * t.ln()
        };

        Ok(Pressure::new::<pascal>(ln_p.exp()))
    }
}

impl HasHumidityRatio for HylandWexler {
    fn humidity_ratio(&self, state: &MoistAir) -> Result<Ratio, PropertyError> {
        let p_sat = self.saturation_pressure(state.dry_bulb())?;
        mix(state, p_sat, self.pressure, MOLAR_MASS_RATIO)
    }
}
