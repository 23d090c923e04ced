//! # Zone Loads
//!
//! Steady-state design loads for a single thermal zone of a building.
//!
//! Given the zone geometry, occupancy, envelope properties, and the outdoor and
//! indoor design conditions, the calculation returns the sensible and latent
//! zone loads together with the envelope conductance, the infiltration mass
//! flow, and the supply air mass flow needed to remove the sensible load.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Units, numeric constraints, and psychrometric property models.
//!
//! ## Example
//!
//! ```
//! use twine_core::Model;
//! use zone_loads::models::building::zone_loads::{ZoneLoadsInput, ZoneLoadsModel};
//! use uom::si::power::watt;
//!
//! let model = ZoneLoadsModel::default();
//! let loads = model.call(&ZoneLoadsInput::design_example()).unwrap();
//!
//! assert!(loads.sensible_load.get::<watt>() > loads.sensible_gains.get::<watt>());
//! println!("{}", loads.report());
//! ```

pub mod models;
pub mod support;
