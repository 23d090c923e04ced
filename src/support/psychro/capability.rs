//! Capability traits used to query moist-air properties.

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use super::{MoistAir, PropertyError};

/// Saturation pressure of water vapor over water or ice.
pub trait HasSaturationPressure {
    /// Returns the saturation pressure of water vapor at the given dry-bulb temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is outside the model's domain.
    fn saturation_pressure(&self, dry_bulb: ThermodynamicTemperature) -> Result<Pressure, PropertyError>;
}

/// Humidity ratio of a moist-air state.
pub trait HasHumidityRatio {
    /// Returns the humidity ratio (kg water vapor per kg dry air) for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the humidity ratio cannot be calculated.
    fn humidity_ratio(&self, state: &MoistAir) -> Result<Ratio, PropertyError>;
}
