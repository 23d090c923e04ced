//! Single-zone design load model.
//!
//! This module provides a [`twine_core::Model`] implementation,
//! [`ZoneLoadsModel`], that wraps the calculation in the internal `core`
//! module. The core is also exposed directly through [`calculate`] for callers
//! that don't need the [`Model`] interface.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use zone_loads::models::building::zone_loads::{ZoneLoadsInput, ZoneLoadsModel};
//! use zone_loads::support::psychro::Magnus;
//! use uom::si::mass_rate::kilogram_per_second;
//!
//! let model = ZoneLoadsModel::with_psychro(Magnus::default());
//! let loads = model.call(&ZoneLoadsInput::design_example()).unwrap();
//!
//! // 37.5 kW of sensible load removed by air supplied 15 K below the zone.
//! assert!((loads.supply_mass_rate.get::<kilogram_per_second>() - 2.4998).abs() < 1e-6);
//! ```

mod core;

pub use self::core::{
    AirChangeRate, AirProperties, Envelope, InternalGains, Report, Supply, Surfaces,
    ZoneGeometry, ZoneLoads, ZoneLoadsError, ZoneLoadsInput, calculate,
};

use twine_core::Model;

use crate::support::psychro::{HasHumidityRatio, HylandWexler};

/// Zone load model parameterized by a psychrometric property model.
///
/// The air properties and property model are fixed at construction; each
/// call evaluates one independent design case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLoadsModel<Psychro = HylandWexler> {
    air: AirProperties,
    psychro: Psychro,
}

impl<Psychro: HasHumidityRatio> ZoneLoadsModel<Psychro> {
    /// Creates a model with explicit air properties and property model.
    #[must_use]
    pub fn new(air: AirProperties, psychro: Psychro) -> Self {
        Self { air, psychro }
    }

    /// Creates a model with default air properties.
    #[must_use]
    pub fn with_psychro(psychro: Psychro) -> Self {
        Self::new(AirProperties::default(), psychro)
    }

    /// Air properties used by the calculation.
    #[must_use]
    pub fn air(&self) -> &AirProperties {
        &self.air
    }

    /// Psychrometric property model.
    #[must_use]
    pub fn psychro(&self) -> &Psychro {
        &self.psychro
    }
}

/// Default air properties with the ASHRAE Hyland–Wexler property model.
impl Default for ZoneLoadsModel {
    fn default() -> Self {
        Self::new(AirProperties::default(), HylandWexler::default())
    }
}

impl<Psychro: HasHumidityRatio> Model for ZoneLoadsModel<Psychro> {
    type Input = ZoneLoadsInput;
    type Output = ZoneLoads;
    type Error = ZoneLoadsError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        calculate(input, &self.air, &self.psychro)
    }
}
