mod envelope;
mod gains;
mod geometry;
mod supply;
mod ventilation;

pub use envelope::Envelope;
pub use gains::InternalGains;
pub use geometry::{Surfaces, ZoneGeometry};
pub use supply::Supply;
pub use ventilation::AirChangeRate;

pub(crate) use gains::ResolvedGains;

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, Length, Power, Ratio, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychro::MoistAir;

/// Everything that defines a zone load calculation apart from the air
/// properties and the psychrometric model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLoadsInput {
    /// Zone dimensions and wall/window split.
    pub geometry: ZoneGeometry,

    /// Occupant, equipment, and solar gains.
    pub gains: InternalGains,

    /// Wall and window U-values.
    pub envelope: Envelope,

    /// Outdoor air exchange by infiltration or ventilation.
    pub ventilation: AirChangeRate,

    /// Outdoor design conditions.
    pub outdoor: MoistAir,

    /// Indoor design conditions.
    pub indoor: MoistAir,

    /// Supply air temperature specification.
    pub supply: Supply,
}

impl ZoneLoadsInput {
    /// Returns the reference design case.
    ///
    /// A 20 m × 30 m × 3.5 m zone with 100 occupants (60 W sensible, 40 W latent
    /// each), 15 W/m² of equipment, 150 W/m² of solar gain on the glazing,
    /// U-values of 0.4 W/m²·K for walls and 3.5 W/m²·K for windows, one air
    /// change per hour, outdoor air at 32 °C / 50 % and indoor air at
    /// 26 °C / 50 %, with supply air 15 K below the indoor temperature.
    #[must_use]
    pub fn design_example() -> Self {
        let half = Ratio::new::<ratio>(0.5);

        Self {
            geometry: ZoneGeometry::new_unchecked(
                Length::new::<meter>(20.0),
                Length::new::<meter>(30.0),
                Length::new::<meter>(3.5),
            ),
            gains: InternalGains::new_unchecked(
                100.0,
                Power::new::<watt>(60.0),
                Power::new::<watt>(40.0),
                HeatFluxDensity::new::<watt_per_square_meter>(15.0),
                HeatFluxDensity::new::<watt_per_square_meter>(150.0),
            ),
            envelope: Envelope::new_unchecked(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(0.4),
                HeatTransfer::new::<watt_per_square_meter_kelvin>(3.5),
            ),
            ventilation: AirChangeRate::per_hour_unchecked(1.0),
            outdoor: MoistAir::new_unchecked(
                ThermodynamicTemperature::new::<degree_celsius>(32.0),
                half,
            ),
            indoor: MoistAir::new_unchecked(
                ThermodynamicTemperature::new::<degree_celsius>(26.0),
                half,
            ),
            supply: Supply::default(),
        }
    }
}
