use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin,
};

use crate::support::units::TemperatureDifference;

/// Specifies the supply air temperature.
///
/// The supply must be colder than the zone: whichever way it is given, the
/// resulting offset `θI - θS` has to be strictly positive, which the
/// calculation checks before evaluating anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Supply {
    /// Supply air this far below the indoor temperature.
    Offset(TemperatureInterval),

    /// Supply air at this absolute temperature.
    Temperature(ThermodynamicTemperature),
}

impl Supply {
    /// Default offset between indoor and supply air.
    pub const DEFAULT_OFFSET_KELVIN: f64 = 15.0;

    /// Returns the indoor-to-supply offset `θI - θS`.
    #[must_use]
    pub fn offset(&self, indoor: ThermodynamicTemperature) -> TemperatureInterval {
        match *self {
            Supply::Offset(offset) => offset,
            Supply::Temperature(supply) => indoor.minus(supply),
        }
    }
}

impl Default for Supply {
    fn default() -> Self {
        Supply::Offset(TemperatureInterval::new::<kelvin>(Self::DEFAULT_OFFSET_KELVIN))
    }
}
