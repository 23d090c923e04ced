use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::psychro::{HasHumidityRatio, MoistAir, PropertyError};

/// Psychrometric stand-in returning fixed outdoor and indoor humidity ratios.
///
/// States warmer than `split_celsius` get the outdoor value.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedHumidity {
    pub(super) outdoor: f64,
    pub(super) indoor: f64,
    pub(super) split_celsius: f64,
}

impl FixedHumidity {
    pub(super) fn design() -> Self {
        Self {
            outdoor: 0.015,
            indoor: 0.0105,
            split_celsius: 29.0,
        }
    }
}

impl HasHumidityRatio for FixedHumidity {
    fn humidity_ratio(&self, state: &MoistAir) -> Result<Ratio, PropertyError> {
        use uom::si::thermodynamic_temperature::degree_celsius;

        let w = if state.dry_bulb().get::<degree_celsius>() > self.split_celsius {
            self.outdoor
        } else {
            self.indoor
        };
        Ok(Ratio::new::<ratio>(w))
    }
}

/// Psychrometric stand-in that always fails.
#[derive(Debug, Clone, Copy)]
pub(super) struct FailingHumidity;

impl HasHumidityRatio for FailingHumidity {
    fn humidity_ratio(&self, _state: &MoistAir) -> Result<Ratio, PropertyError> {
        Err(PropertyError::OutOfDomain {
            context: "test model has no domain".into(),
        })
    }
}

/// Psychrometric stand-in that returns `NaN` instead of failing.
#[derive(Debug, Clone, Copy)]
pub(super) struct NanHumidity;

impl HasHumidityRatio for NanHumidity {
    fn humidity_ratio(&self, _state: &MoistAir) -> Result<Ratio, PropertyError> {
        Ok(Ratio::new::<ratio>(f64::NAN))
    }
}
