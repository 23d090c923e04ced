//! Moist-air property models.
//!
//! Both models share the ideal-gas mixing relation
//!
//! ```text
//! pw = φ · pws(θ)
//! W  = ε · pw / (p - pw)
//! ```
//!
//! where `ε` is the molar mass ratio of water vapor to dry air and `p` is the
//! total pressure. They differ only in the saturation-pressure correlation
//! `pws(θ)` and its valid temperature range.

pub mod hyland_wexler;
pub mod magnus;

pub use hyland_wexler::HylandWexler;
pub use magnus::Magnus;

use uom::{
    ConstZero,
    si::{
        f64::{Pressure, Ratio, ThermodynamicTemperature},
        pressure::pascal,
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    },
};

use super::{MoistAir, PropertyError};

/// Standard atmospheric pressure at sea level.
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

/// Checks that a dry-bulb temperature lies within a correlation's range.
pub(crate) fn check_domain(
    dry_bulb: ThermodynamicTemperature,
    min_celsius: f64,
    max_celsius: f64,
) -> Result<f64, PropertyError> {
    let celsius = dry_bulb.get::<degree_celsius>();
    if (min_celsius..=max_celsius).contains(&celsius) {
        Ok(celsius)
    } else {
        Err(PropertyError::OutOfDomain {
            context: format!(
                "dry-bulb temperature {celsius} °C is outside [{min_celsius}, {max_celsius}] °C"
            ),
        })
    }
}

/// Mixes a saturation pressure into a humidity ratio at the given total pressure.
pub(crate) fn mix(
    state: &MoistAir,
    saturation_pressure: Pressure,
    total_pressure: Pressure,
    molar_mass_ratio: f64,
) -> Result<Ratio, PropertyError> {
    let vapor_pressure: Pressure = state.relative_humidity() * saturation_pressure;

    if vapor_pressure >= total_pressure {
        return Err(PropertyError::InvalidState {
            context: format!(
                "vapor pressure {} Pa is not below total pressure {} Pa",
                vapor_pressure.get::<pascal>(),
                total_pressure.get::<pascal>(),
            ),
        });
    }

    let w: Ratio = Ratio::new::<ratio>(molar_mass_ratio)
        * (vapor_pressure / (total_pressure - vapor_pressure));

    if !w.get::<ratio>().is_finite() || w < Ratio::ZERO {
        return Err(PropertyError::Calculation {
            context: format!("humidity ratio evaluated to {}", w.get::<ratio>()),
        });
    }

    Ok(w)
}
