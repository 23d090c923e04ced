//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own (e.g., to
//! evaluate a humidity ratio without running a load calculation), but their
//! APIs are not stable.

pub mod constraint;
pub mod psychro;
pub mod units;
