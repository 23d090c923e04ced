//! Psychrometric property modeling for moist air.
//!
//! The load calculation needs a single moist-air property: the humidity ratio
//! (mass of water vapor per mass of dry air) at a given dry-bulb temperature
//! and relative humidity. That property is expressed as the
//! [`HasHumidityRatio`] capability so the load formulas never depend on a
//! particular saturation-pressure correlation.
//!
//! Two models are provided:
//!
//! - [`HylandWexler`]: the ASHRAE Hyland–Wexler correlation (the default).
//! - [`Magnus`]: the simpler Magnus–Tetens correlation.
//!
//! # Example
//!
//! ```
//! use zone_loads::support::psychro::{HasHumidityRatio, HylandWexler, MoistAir};
//! use uom::si::{
//!     f64::{Ratio, ThermodynamicTemperature},
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let indoor = MoistAir::new(
//!     ThermodynamicTemperature::new::<degree_celsius>(26.0),
//!     Ratio::new::<ratio>(0.5),
//! )
//! .unwrap();
//!
//! let w = HylandWexler::default().humidity_ratio(&indoor).unwrap();
//! assert!((w.get::<ratio>() - 0.0105).abs() < 1e-4);
//! ```

mod error;
mod state;

pub mod capability;
pub mod model;

pub use capability::{HasHumidityRatio, HasSaturationPressure};
pub use error::PropertyError;
pub use model::{HylandWexler, Magnus};
pub use state::MoistAir;
