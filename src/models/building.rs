//! Building thermal models.

pub mod zone_loads;
