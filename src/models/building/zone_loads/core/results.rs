//! Results of a zone load calculation.

use std::fmt;

use uom::si::{
    f64::{MassRate, Power, Ratio, ThermalConductance, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    thermal_conductance::watt_per_kelvin,
};

use super::Surfaces;

/// Zone loads and the intermediate quantities that produced them.
///
/// Sign convention: positive loads are heat gains the supply air must remove.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLoads {
    /// Floor, envelope, wall, and window surfaces.
    pub surfaces: Surfaces,

    /// Outdoor humidity ratio `wo`.
    pub outdoor_humidity_ratio: Ratio,

    /// Indoor humidity ratio `wI`.
    pub indoor_humidity_ratio: Ratio,

    /// Envelope conductance `UA`.
    pub envelope_conductance: ThermalConductance,

    /// Infiltration/ventilation mass flow `mi`.
    pub infiltration: MassRate,

    /// Solar gain through the windows.
    pub solar_gains: Power,

    /// Electrical and equipment gain.
    pub equipment_gains: Power,

    /// Total sensible internal gain `Qsa`.
    pub sensible_gains: Power,

    /// Total latent internal gain `Qla`.
    pub latent_gains: Power,

    /// Zone sensible load `QsTZ`.
    pub sensible_load: Power,

    /// Zone latent load `QlTZ`.
    pub latent_load: Power,

    /// Supply air dry-bulb temperature `θS`.
    pub supply_temperature: ThermodynamicTemperature,

    /// Supply air mass flow `m` that removes the sensible load.
    pub supply_mass_rate: MassRate,
}

impl ZoneLoads {
    /// Returns a three-line text report of the main results.
    ///
    /// ```text
    /// QsTZ = 37497 W, QlTZ = 11792 W
    /// UA = 674 W/K, mi = 0.70 kg/s,      Qsa = 29250 W, Qla = 4000 W
    /// m = 2.500 kg/s
    /// ```
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

/// Text report of a [`ZoneLoads`], created by [`ZoneLoads::report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(&'a ZoneLoads);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loads = self.0;
        writeln!(
            f,
            "QsTZ = {:.0} W, QlTZ = {:.0} W",
            loads.sensible_load.get::<watt>(),
            loads.latent_load.get::<watt>(),
        )?;
        writeln!(
            f,
            "UA = {:.0} W/K, mi = {:.2} kg/s,      Qsa = {:.0} W, Qla = {:.0} W",
            loads.envelope_conductance.get::<watt_per_kelvin>(),
            loads.infiltration.get::<kilogram_per_second>(),
            loads.sensible_gains.get::<watt>(),
            loads.latent_gains.get::<watt>(),
        )?;
        write!(
            f,
            "m = {:.3} kg/s",
            loads.supply_mass_rate.get::<kilogram_per_second>()
        )
    }
}
