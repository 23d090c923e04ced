//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities. This module
//! fills the few gaps that matter for load calculations.
//!
//! ## Temperature differences
//!
//! [`uom`] keeps absolute temperatures and temperature intervals apart, so
//! `θo - θI` does not type-check directly. The [`TemperatureDifference`] trait
//! provides [`minus`](TemperatureDifference::minus) to get an interval between
//! two absolute temperatures and [`lowered_by`](TemperatureDifference::lowered_by)
//! to shift an absolute temperature down by an interval:
//!
//! ```
//! use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use zone_loads::support::units::TemperatureDifference;
//!
//! let outdoor = ThermodynamicTemperature::new::<degree_celsius>(32.0);
//! let indoor = ThermodynamicTemperature::new::<degree_celsius>(26.0);
//! let delta_t = outdoor.minus(indoor);
//! assert!((delta_t.get::<temperature_interval::kelvin>() - 6.0).abs() < 1e-9);
//!
//! let supply = indoor.lowered_by(TemperatureInterval::new::<temperature_interval::kelvin>(15.0));
//! assert!((supply.get::<degree_celsius>() - 11.0).abs() < 1e-9);
//! ```
//!
//! ## Specific enthalpy
//!
//! [`SpecificEnthalpy`] (J/kg) is used for the latent heat of vaporization.

mod quantities;
mod temperature_difference;

pub use quantities::SpecificEnthalpy;
pub use temperature_difference::TemperatureDifference;
