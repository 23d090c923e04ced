use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for arithmetic between absolute temperatures and intervals.
///
/// Background on why [`uom`] needs this:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns the absolute temperature `self - interval`.
    #[must_use]
    fn lowered_by(self, interval: TemperatureInterval) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn lowered_by(self, interval: TemperatureInterval) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.get::<abs_kelvin>() - interval.get::<delta_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn outdoor_minus_indoor() {
        let outdoor = ThermodynamicTemperature::new::<degree_celsius>(32.0);
        let indoor = ThermodynamicTemperature::new::<degree_celsius>(26.0);

        assert_relative_eq!(outdoor.minus(indoor).get::<delta_kelvin>(), 6.0, epsilon = 1e-9);
        assert_relative_eq!(indoor.minus(outdoor).get::<delta_celsius>(), -6.0, epsilon = 1e-9);
        assert_relative_eq!(indoor.minus(indoor).get::<delta_kelvin>(), 0.0);
    }

    #[test]
    fn supply_below_indoor() {
        let indoor = ThermodynamicTemperature::new::<degree_celsius>(26.0);
        let supply = indoor.lowered_by(TemperatureInterval::new::<delta_kelvin>(15.0));

        assert_relative_eq!(supply.get::<degree_celsius>(), 11.0, epsilon = 1e-9);
        assert_relative_eq!(indoor.minus(supply).get::<delta_kelvin>(), 15.0, epsilon = 1e-9);
    }
}
