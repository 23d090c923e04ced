use anyhow::Context;
use clap::{Parser, ValueEnum};
use twine_core::Model;
use uom::si::{
    f64::{
        HeatFluxDensity, HeatTransfer, Length, Power, Pressure, Ratio, TemperatureInterval,
        ThermodynamicTemperature,
    },
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    power::watt,
    pressure::pascal,
    ratio::ratio,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};
use zone_loads::{
    models::building::zone_loads::{
        AirChangeRate, Envelope, InternalGains, Supply, ZoneGeometry, ZoneLoads, ZoneLoadsInput,
        ZoneLoadsModel,
    },
    support::{
        constraint::UnitInterval,
        psychro::{HasHumidityRatio, HylandWexler, Magnus, MoistAir, model::STANDARD_ATMOSPHERE_PA},
    },
};

/// Steady-state sensible and latent design loads of a single zone.
///
/// Without flags, the reference design case is evaluated.
#[derive(Parser)]
#[command(name = "zone-loads")]
#[command(about = "Single-zone sensible and latent design loads", long_about = None)]
struct Cli {
    /// Zone length (m)
    #[arg(long, default_value_t = 20.0)]
    length: f64,

    /// Zone width (m)
    #[arg(long, default_value_t = 30.0)]
    width: f64,

    /// Zone height (m)
    #[arg(long, default_value_t = 3.5)]
    height: f64,

    /// Fraction of the envelope that is opaque wall
    #[arg(long, default_value_t = ZoneGeometry::DEFAULT_WALL_FRACTION)]
    wall_fraction: f64,

    /// Number of occupants
    #[arg(long, default_value_t = 100.0)]
    persons: f64,

    /// Sensible heat per occupant (W)
    #[arg(long, default_value_t = 60.0)]
    sensible_per_person: f64,

    /// Latent heat per occupant (W)
    #[arg(long, default_value_t = 40.0)]
    latent_per_person: f64,

    /// Electrical and equipment load per floor area (W/m²)
    #[arg(long, default_value_t = 15.0)]
    equipment: f64,

    /// Solar gain per window area (W/m²)
    #[arg(long, default_value_t = 150.0)]
    solar: f64,

    /// Wall U-value (W/m²·K)
    #[arg(long, default_value_t = 0.4)]
    u_wall: f64,

    /// Window U-value (W/m²·K)
    #[arg(long, default_value_t = 3.5)]
    u_window: f64,

    /// Air changes per hour
    #[arg(long, default_value_t = 1.0)]
    ach: f64,

    /// Outdoor dry-bulb temperature (°C)
    #[arg(long, default_value_t = 32.0, allow_hyphen_values = true)]
    outdoor_temperature: f64,

    /// Outdoor relative humidity (0 to 1)
    #[arg(long, default_value_t = 0.5)]
    outdoor_humidity: f64,

    /// Indoor dry-bulb temperature (°C)
    #[arg(long, default_value_t = 26.0, allow_hyphen_values = true)]
    indoor_temperature: f64,

    /// Indoor relative humidity (0 to 1)
    #[arg(long, default_value_t = 0.5)]
    indoor_humidity: f64,

    /// Supply air temperature below indoor (K)
    #[arg(long, default_value_t = Supply::DEFAULT_OFFSET_KELVIN, allow_hyphen_values = true)]
    supply_offset: f64,

    /// Psychrometric property model
    #[arg(long, value_enum, default_value_t = Psychro::HylandWexler)]
    psychro: Psychro,

    /// Barometric pressure (Pa)
    #[arg(long, default_value_t = STANDARD_ATMOSPHERE_PA)]
    pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Psychro {
    /// ASHRAE Hyland–Wexler correlation
    HylandWexler,
    /// Magnus–Tetens correlation
    Magnus,
}

impl Cli {
    fn input(&self) -> anyhow::Result<ZoneLoadsInput> {
        let wall_fraction = UnitInterval::new(Ratio::new::<ratio>(self.wall_fraction))
            .context("invalid wall fraction")?;

        let geometry = ZoneGeometry::new(
            Length::new::<meter>(self.length),
            Length::new::<meter>(self.width),
            Length::new::<meter>(self.height),
        )
        .context("invalid zone dimensions")?
        .with_wall_fraction(wall_fraction);

        let gains = InternalGains::new(
            self.persons,
            Power::new::<watt>(self.sensible_per_person),
            Power::new::<watt>(self.latent_per_person),
            HeatFluxDensity::new::<watt_per_square_meter>(self.equipment),
            HeatFluxDensity::new::<watt_per_square_meter>(self.solar),
        )
        .context("invalid internal gains")?;

        let envelope = Envelope::new(
            HeatTransfer::new::<watt_per_square_meter_kelvin>(self.u_wall),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(self.u_window),
        )
        .context("invalid U-values")?;

        let ventilation = AirChangeRate::per_hour(self.ach).context("invalid air change rate")?;

        let outdoor = MoistAir::new(
            ThermodynamicTemperature::new::<degree_celsius>(self.outdoor_temperature),
            Ratio::new::<ratio>(self.outdoor_humidity),
        )
        .context("invalid outdoor relative humidity")?;

        let indoor = MoistAir::new(
            ThermodynamicTemperature::new::<degree_celsius>(self.indoor_temperature),
            Ratio::new::<ratio>(self.indoor_humidity),
        )
        .context("invalid indoor relative humidity")?;

        Ok(ZoneLoadsInput {
            geometry,
            gains,
            envelope,
            ventilation,
            outdoor,
            indoor,
            supply: Supply::Offset(TemperatureInterval::new::<kelvin>(self.supply_offset)),
        })
    }
}

fn run(input: &ZoneLoadsInput, psychro: impl HasHumidityRatio) -> anyhow::Result<ZoneLoads> {
    let loads = ZoneLoadsModel::with_psychro(psychro)
        .call(input)
        .context("zone load calculation failed")?;
    Ok(loads)
}

/// A negative supply flow means the cold supply cannot meet the load.
fn needs_heating(loads: &ZoneLoads) -> bool {
    loads.supply_mass_rate.get::<kilogram_per_second>() < 0.0
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let input = cli.input()?;
    let pressure = Pressure::new::<pascal>(cli.pressure);

    let loads = match cli.psychro {
        Psychro::HylandWexler => run(
            &input,
            HylandWexler::at_pressure(pressure).context("invalid pressure")?,
        )?,
        Psychro::Magnus => run(
            &input,
            Magnus::at_pressure(pressure).context("invalid pressure")?,
        )?,
    };

    println!("{}", loads.report());
    if needs_heating(&loads) {
        eprintln!(
            "warning: negative supply mass flow, the zone needs heating rather than cooling"
        );
    }

    Ok(())
}
