use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use crate::support::{
    constraint::ConstraintError,
    psychro::{MoistAir, PropertyError},
};

/// Errors that can occur while calculating zone loads.
#[derive(Debug, Error)]
pub enum ZoneLoadsError {
    /// The supply air is not colder than the zone, or is below absolute zero.
    ///
    /// The supply mass flow divides by `θI - θS`, so the offset must be
    /// strictly positive and leave `θS` above 0 K.
    #[error(
        "supply temperature offset must be positive and keep the supply above absolute zero: offset={offset:?}"
    )]
    SupplyOffset {
        /// Offset `θI - θS` that was rejected.
        offset: TemperatureInterval,

        #[source]
        source: ConstraintError,
    },

    /// The psychrometric model could not evaluate a humidity ratio.
    #[error("{location} humidity ratio could not be evaluated")]
    HumidityRatio {
        /// Which condition failed (`"outdoor"` or `"indoor"`).
        location: &'static str,

        /// State passed to the psychrometric model.
        state: MoistAir,

        #[source]
        source: PropertyError,
    },
}
