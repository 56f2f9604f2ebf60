use uom::si::{
    f64::{HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{Boundaries, Face, Wall};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn to_celsius(temperatures: &[ThermodynamicTemperature]) -> Vec<f64> {
    temperatures
        .iter()
        .map(|t| t.get::<degree_celsius>())
        .collect()
}

/// Refractory furnace wall: 0.2 m thick, 6 nodes, k = 1.5 W/m·K, furnace gas
/// at 1100 °C (h = 100 W/m²·K) and room air at 30 °C (h = 10 W/m²·K).
pub(super) fn furnace_wall() -> (Wall, Boundaries) {
    let wall = Wall::new(
        Length::new::<meter>(0.2),
        6,
        ThermalConductivity::new::<watt_per_meter_kelvin>(1.5),
    )
    .unwrap();

    let boundaries = Boundaries {
        hot: Face::new(
            celsius(1100.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(100.0),
        )
        .unwrap(),
        cold: Face::new(
            celsius(30.0),
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
        )
        .unwrap(),
    };

    (wall, boundaries)
}
