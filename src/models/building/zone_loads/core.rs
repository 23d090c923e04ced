//! Steady-state sensible and latent loads of a single zone.
//!
//! The calculation is a single deterministic pass:
//!
//! ```text
//! UA   = U_wall·A_wall + U_window·A_window
//! mi   = ρ · ACH · V / 3600
//! Qsa  = n·q_s + q_solar·A_window + q_equipment·A_floor
//! Qla  = n·q_l
//! QsTZ = (UA + mi·c)·(θo - θI) + Qsa
//! QlTZ = mi·l·(wo - wI) + Qla
//! m    = QsTZ / (c·(θI - θS))
//! ```

mod air;
mod error;
mod input;
mod results;

#[cfg(test)]
mod test_support;

pub use air::AirProperties;
pub use error::ZoneLoadsError;
pub use input::{
    AirChangeRate, Envelope, InternalGains, Supply, Surfaces, ZoneGeometry, ZoneLoadsInput,
};
pub use results::{Report, ZoneLoads};

use log::{debug, warn};
use uom::{
    ConstZero,
    si::{
        f64::{
            MassRate, Power, Ratio, SpecificHeatCapacity, TemperatureInterval, ThermalConductance,
            ThermodynamicTemperature,
        },
        mass_rate::kilogram_per_second,
        power::watt,
        ratio::ratio,
        temperature_interval, thermal_conductance::watt_per_kelvin, thermodynamic_temperature,
    },
};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    psychro::{HasHumidityRatio, MoistAir, PropertyError},
    units::{SpecificEnthalpy, TemperatureDifference},
};

use input::ResolvedGains;

/// Calculates the design loads of a zone.
///
/// The supply offset is validated before anything is evaluated, and both
/// humidity ratios are resolved before any load is computed, so a failure
/// never yields partial results.
///
/// # Errors
///
/// - [`ZoneLoadsError::SupplyOffset`] if `θI - θS` is not strictly positive,
///   or would put the supply at or below absolute zero.
/// - [`ZoneLoadsError::HumidityRatio`] if the psychrometric model fails or
///   returns a non-finite value.
pub fn calculate(
    input: &ZoneLoadsInput,
    air: &AirProperties,
    psychro: &impl HasHumidityRatio,
) -> Result<ZoneLoads, ZoneLoadsError> {
    let indoor_temperature = input.indoor.dry_bulb();
    let offset = supply_offset(input.supply.offset(indoor_temperature), indoor_temperature)?;

    let w_o = humidity_ratio(psychro, &input.outdoor, "outdoor")?;
    let w_i = humidity_ratio(psychro, &input.indoor, "indoor")?;

    let surfaces = input.geometry.surfaces();
    let ua = input.envelope.conductance(&surfaces);
    let infiltration: MassRate = air.density()
        * input
            .ventilation
            .volume_rate(input.geometry.volume());

    let ResolvedGains {
        solar,
        equipment,
        sensible: sensible_gains,
        latent: latent_gains,
    } = input.gains.resolve(&surfaces);

    let c: SpecificHeatCapacity = air.specific_heat();
    let l: SpecificEnthalpy = air.latent_heat();

    let conductance: ThermalConductance = ua + infiltration * c;
    let delta_t = input.outdoor.dry_bulb().minus(indoor_temperature);
    let sensible_load: Power = conductance * delta_t + sensible_gains;

    let delta_w: Ratio = w_o - w_i;
    let latent_load: Power = infiltration * l * delta_w + latent_gains;

    let supply_temperature = indoor_temperature.lowered_by(offset);
    let supply_mass_rate: MassRate = sensible_load / (c * offset);

    debug!(
        "zone surfaces: floor={:?} envelope={:?} wall={:?} window={:?}",
        surfaces.floor, surfaces.envelope, surfaces.wall, surfaces.window,
    );
    debug!(
        "zone loads: UA={:.1} W/K mi={:.3} kg/s QsTZ={:.1} W QlTZ={:.1} W",
        ua.get::<watt_per_kelvin>(),
        infiltration.get::<kilogram_per_second>(),
        sensible_load.get::<watt>(),
        latent_load.get::<watt>(),
    );
    if supply_mass_rate < MassRate::ZERO {
        warn!(
            "negative supply mass flow ({:.3} kg/s): the zone needs heating, not cooling",
            supply_mass_rate.get::<kilogram_per_second>(),
        );
    }

    Ok(ZoneLoads {
        surfaces,
        outdoor_humidity_ratio: w_o,
        indoor_humidity_ratio: w_i,
        envelope_conductance: ua,
        infiltration,
        solar_gains: solar,
        equipment_gains: equipment,
        sensible_gains,
        latent_gains,
        sensible_load,
        latent_load,
        supply_temperature,
        supply_mass_rate,
    })
}

/// Checks that the supply sits strictly between absolute zero and indoor.
fn supply_offset(
    offset: TemperatureInterval,
    indoor: ThermodynamicTemperature,
) -> Result<TemperatureInterval, ZoneLoadsError> {
    let offset = StrictlyPositive::new(offset)
        .map_err(|source| ZoneLoadsError::SupplyOffset { offset, source })?
        .into_inner();

    // Also catches an infinite offset.
    if offset.get::<temperature_interval::kelvin>()
        >= indoor.get::<thermodynamic_temperature::kelvin>()
    {
        return Err(ZoneLoadsError::SupplyOffset {
            offset,
            source: ConstraintError::AboveMaximum,
        });
    }

    Ok(offset)
}

/// Evaluates a humidity ratio, rejecting non-finite values.
fn humidity_ratio(
    psychro: &impl HasHumidityRatio,
    state: &MoistAir,
    location: &'static str,
) -> Result<Ratio, ZoneLoadsError> {
    let fail = |source| ZoneLoadsError::HumidityRatio {
        location,
        state: *state,
        source,
    };

    let w = psychro.humidity_ratio(state).map_err(fail)?;
    if w.get::<ratio>().is_finite() {
        Ok(w)
    } else {
        Err(fail(PropertyError::Calculation {
            context: format!("humidity ratio evaluated to {}", w.get::<ratio>()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{HeatTransfer, Length},
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        temperature_interval::kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use super::test_support::{FailingHumidity, FixedHumidity, NanHumidity};
    use crate::support::{
        constraint::{ConstraintError, UnitInterval},
        psychro::{HylandWexler, Magnus},
    };

    fn design() -> ZoneLoadsInput {
        ZoneLoadsInput::design_example()
    }

    fn run(input: &ZoneLoadsInput) -> ZoneLoads {
        calculate(input, &AirProperties::default(), &FixedHumidity::design())
            .expect("design calculation should succeed")
    }

    fn with_u_values(wall: f64, window: f64) -> ZoneLoadsInput {
        ZoneLoadsInput {
            envelope: Envelope::new(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(wall),
                HeatTransfer::new::<watt_per_square_meter_kelvin>(window),
            )
            .unwrap(),
            ..design()
        }
    }

    #[test]
    fn design_case() {
        let loads = run(&design());

        assert_relative_eq!(loads.surfaces.floor.get::<square_meter>(), 600.0);
        assert_relative_eq!(loads.surfaces.envelope.get::<square_meter>(), 950.0);
        assert_relative_eq!(loads.surfaces.wall.get::<square_meter>(), 855.0, max_relative = 1e-12);
        assert_relative_eq!(loads.surfaces.window.get::<square_meter>(), 95.0, max_relative = 1e-12);

        assert_relative_eq!(
            loads.envelope_conductance.get::<watt_per_kelvin>(),
            674.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            loads.infiltration.get::<kilogram_per_second>(),
            0.7,
            max_relative = 1e-12
        );
        assert_relative_eq!(loads.solar_gains.get::<watt>(), 14_250.0, max_relative = 1e-12);
        assert_relative_eq!(loads.equipment_gains.get::<watt>(), 9000.0, max_relative = 1e-12);
        assert_relative_eq!(loads.sensible_gains.get::<watt>(), 29_250.0, max_relative = 1e-12);
        assert_relative_eq!(loads.latent_gains.get::<watt>(), 4000.0, max_relative = 1e-12);

        // (674.5 + 0.7·1000)·6 + 29250
        assert_relative_eq!(loads.sensible_load.get::<watt>(), 37_497.0, max_relative = 1e-9);
        // 0.7·2496e3·(0.015 - 0.0105) + 4000
        assert_relative_eq!(loads.latent_load.get::<watt>(), 11_862.4, max_relative = 1e-9);

        assert_relative_eq!(
            loads.supply_temperature.get::<degree_celsius>(),
            11.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            loads.supply_mass_rate.get::<kilogram_per_second>(),
            2.4998,
            max_relative = 1e-9
        );
    }

    #[test]
    fn design_case_with_ashrae_psychrometrics() {
        let loads = calculate(&design(), &AirProperties::default(), &HylandWexler::default())
            .unwrap();

        assert_relative_eq!(
            loads.outdoor_humidity_ratio.get::<ratio>(),
            0.014_955,
            max_relative = 1e-3
        );
        assert_relative_eq!(loads.latent_load.get::<watt>(), 11_792.0, max_relative = 1e-3);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = run(&design());
        let second = run(&design());
        assert_eq!(first, second);
        assert_eq!(
            first.sensible_load.get::<watt>().to_bits(),
            second.sensible_load.get::<watt>().to_bits()
        );
    }

    #[test]
    fn higher_u_values_increase_conductance_and_load() {
        let base = run(&with_u_values(0.4, 3.5));
        let walls = run(&with_u_values(0.5, 3.5));
        let windows = run(&with_u_values(0.4, 4.0));

        for worse in [walls, windows] {
            assert!(worse.envelope_conductance > base.envelope_conductance);
            assert!(worse.sensible_load > base.sensible_load);
        }
    }

    #[test]
    fn no_air_exchange_removes_infiltration() {
        let input = ZoneLoadsInput {
            ventilation: AirChangeRate::none(),
            ..design()
        };
        let loads = run(&input);

        assert_eq!(loads.infiltration, MassRate::ZERO);
        // 674.5·6 + 29250
        assert_relative_eq!(loads.sensible_load.get::<watt>(), 33_297.0, max_relative = 1e-9);
        assert_eq!(loads.latent_load, loads.latent_gains);
    }

    #[test]
    fn no_indoor_outdoor_difference_leaves_internal_gains() {
        let input = ZoneLoadsInput {
            outdoor: design().indoor,
            ..design()
        };
        let loads = calculate(&input, &AirProperties::default(), &HylandWexler::default())
            .unwrap();

        assert_eq!(loads.sensible_load, loads.sensible_gains);
        assert_eq!(loads.latent_load, loads.latent_gains);
    }

    #[test]
    fn supply_at_indoor_temperature_is_invalid() {
        let input = ZoneLoadsInput {
            supply: Supply::Temperature(design().indoor.dry_bulb()),
            ..design()
        };
        let result = calculate(&input, &AirProperties::default(), &FixedHumidity::design());

        assert!(matches!(
            result,
            Err(ZoneLoadsError::SupplyOffset {
                source: ConstraintError::Zero,
                ..
            })
        ));
    }

    #[test]
    fn zero_or_negative_offset_is_invalid() {
        for kelvins in [0.0, -5.0, f64::NAN] {
            let input = ZoneLoadsInput {
                supply: Supply::Offset(TemperatureInterval::new::<kelvin>(kelvins)),
                ..design()
            };
            assert!(matches!(
                calculate(&input, &AirProperties::default(), &FixedHumidity::design()),
                Err(ZoneLoadsError::SupplyOffset { .. })
            ));
        }
    }

    #[test]
    fn supply_below_absolute_zero_is_invalid() {
        // Indoor is 299.15 K, so these offsets put the supply below 0 K.
        for kelvins in [300.0, 400.0, f64::INFINITY] {
            let input = ZoneLoadsInput {
                supply: Supply::Offset(TemperatureInterval::new::<kelvin>(kelvins)),
                ..design()
            };
            assert!(matches!(
                calculate(&input, &AirProperties::default(), &HylandWexler::default()),
                Err(ZoneLoadsError::SupplyOffset {
                    source: ConstraintError::AboveMaximum,
                    ..
                })
            ));
        }
    }

    #[test]
    fn large_offset_above_absolute_zero_is_accepted() {
        let input = ZoneLoadsInput {
            supply: Supply::Offset(TemperatureInterval::new::<kelvin>(290.0)),
            ..design()
        };
        let loads = run(&input);
        assert!(loads.supply_mass_rate > MassRate::ZERO);
    }

    #[test]
    fn absolute_supply_temperature() {
        let input = ZoneLoadsInput {
            supply: Supply::Temperature(ThermodynamicTemperature::new::<degree_celsius>(16.0)),
            ..design()
        };
        let loads = run(&input);

        // 37497 W / (1000 J/kg·K · 10 K)
        assert_relative_eq!(
            loads.supply_mass_rate.get::<kilogram_per_second>(),
            3.7497,
            max_relative = 1e-9
        );
    }

    #[test]
    fn property_failures_propagate() {
        let result = calculate(&design(), &AirProperties::default(), &FailingHumidity);
        assert!(matches!(
            result,
            Err(ZoneLoadsError::HumidityRatio {
                location: "outdoor",
                source: PropertyError::OutOfDomain { .. },
                ..
            })
        ));
    }

    #[test]
    fn nan_humidity_ratio_is_an_error() {
        let result = calculate(&design(), &AirProperties::default(), &NanHumidity);
        assert!(matches!(
            result,
            Err(ZoneLoadsError::HumidityRatio {
                source: PropertyError::Calculation { .. },
                ..
            })
        ));
    }

    #[test]
    fn out_of_domain_outdoor_temperature() {
        let input = ZoneLoadsInput {
            outdoor: MoistAir::new(
                ThermodynamicTemperature::new::<degree_celsius>(75.0),
                Ratio::new::<ratio>(0.5),
            )
            .unwrap(),
            ..design()
        };
        let result = calculate(&input, &AirProperties::default(), &Magnus::default());
        assert!(matches!(
            result,
            Err(ZoneLoadsError::HumidityRatio { location: "outdoor", .. })
        ));
    }

    #[test]
    fn heating_case_gives_negative_supply_flow() {
        let input = ZoneLoadsInput {
            outdoor: MoistAir::new(
                ThermodynamicTemperature::new::<degree_celsius>(-10.0),
                Ratio::new::<ratio>(0.8),
            )
            .unwrap(),
            gains: InternalGains::none(),
            ..design()
        };
        let loads = calculate(&input, &AirProperties::default(), &HylandWexler::default())
            .unwrap();

        assert!(loads.sensible_load < Power::ZERO);
        assert!(loads.supply_mass_rate < MassRate::ZERO);
    }

    #[test]
    fn smaller_zone_with_custom_wall_fraction() {
        let geometry = ZoneGeometry::new(
            Length::new::<meter>(10.0),
            Length::new::<meter>(10.0),
            Length::new::<meter>(3.0),
        )
        .unwrap()
        .with_wall_fraction(UnitInterval::new(Ratio::new::<ratio>(0.8)).unwrap());
        let input = ZoneLoadsInput {
            geometry,
            ..design()
        };
        let loads = run(&input);

        // envelope = 2·20·3 + 100 = 220 m², wall = 176 m², window = 44 m²
        assert_relative_eq!(loads.surfaces.window.get::<square_meter>(), 44.0, max_relative = 1e-12);
        // 0.4·176 + 3.5·44
        assert_relative_eq!(
            loads.envelope_conductance.get::<watt_per_kelvin>(),
            224.4,
            max_relative = 1e-12
        );
    }

    #[test]
    fn report_format() {
        let report = run(&design()).report().to_string();
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "QsTZ = 37497 W, QlTZ = 11862 W");
        // 674.5 W/K rounds half to even.
        assert_eq!(
            lines[1],
            "UA = 674 W/K, mi = 0.70 kg/s,      Qsa = 29250 W, Qla = 4000 W"
        );
        assert_eq!(lines[2], "m = 2.500 kg/s");
    }

    #[test]
    fn design_report_with_ashrae_psychrometrics() {
        let loads = calculate(&design(), &AirProperties::default(), &HylandWexler::default())
            .unwrap();

        assert_eq!(
            loads.report().to_string(),
            "QsTZ = 37497 W, QlTZ = 11792 W\n\
             UA = 674 W/K, mi = 0.70 kg/s,      Qsa = 29250 W, Qla = 4000 W\n\
             m = 2.500 kg/s"
        );
    }
}
