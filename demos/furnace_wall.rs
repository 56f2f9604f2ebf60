//! Sizes the high-grade refractory layer of a furnace wall.
//!
//! Run with `RUST_LOG=debug` to see the solver's convergence record.

use std::error::Error;

use twine_core::Model;
use twine_wall::models::thermal::wall::{
    Boundaries, CrossingStatus, Face, FurnaceWall, SolverConfig, Wall, WallInput,
};
use uom::si::{
    f64::{HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let celsius = ThermodynamicTemperature::new::<degree_celsius>;
    let h = HeatTransfer::new::<watt_per_square_meter_kelvin>;

    let input = WallInput {
        wall: Wall::new(
            Length::new::<meter>(0.20),
            6,
            ThermalConductivity::new::<watt_per_meter_kelvin>(1.5),
        )?,
        boundaries: Boundaries {
            hot: Face::new(celsius(1100.0), h(100.0))?,
            cold: Face::new(celsius(30.0), h(10.0))?,
        },
        ceiling: celsius(800.0),
    };

    let model = FurnaceWall::new(SolverConfig::default());
    let report = model.call(&input)?;

    if report.crossing.status == CrossingStatus::Fallback {
        log::warn!("cold face still exceeds the ceiling; reporting the last node");
    }

    println!("{report}");
    Ok(())
}
