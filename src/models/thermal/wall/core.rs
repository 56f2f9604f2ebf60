//! Steady-state conduction through a plane wall with convective faces.
//!
//! The wall is discretized into equally spaced nodes. Each face exchanges
//! heat with an ambient fluid through a convective (Robin) boundary, and the
//! nodal temperatures are relaxed sweep by sweep until the largest change
//! drops below a tolerance. The resulting field is then searched for the
//! node beyond which the wall stays below a temperature ceiling.

mod config;
mod error;
mod grid;
mod input;
mod locate;
mod report;
mod results;
mod solve;

#[cfg(test)]
mod test_support;

pub use config::SolverConfig;
pub use error::WallError;
pub use grid::Grid;
pub use input::{Biot, Boundaries, Face, Wall};
pub use locate::{CrossingStatus, LocateError, ThresholdCrossing, locate};
pub use report::WallReport;
pub use results::{FieldSolution, Residual, Status};

use uom::si::f64::ThermodynamicTemperature;

/// Entry point for solving the temperature field of a plane wall.
///
/// # Example
///
/// ```
/// use twine_wall::models::thermal::wall::{
///     Boundaries, Face, SolverConfig, Status, Wall, WallConduction,
/// };
/// use uom::si::{
///     f64::{HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature},
///     heat_transfer::watt_per_square_meter_kelvin,
///     length::meter,
///     thermal_conductivity::watt_per_meter_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let wall = Wall::new(
///     Length::new::<meter>(0.2),
///     6,
///     ThermalConductivity::new::<watt_per_meter_kelvin>(1.5),
/// )?;
/// let boundaries = Boundaries {
///     hot: Face::new(
///         ThermodynamicTemperature::new::<degree_celsius>(1100.0),
///         HeatTransfer::new::<watt_per_square_meter_kelvin>(100.0),
///     )?,
///     cold: Face::new(
///         ThermodynamicTemperature::new::<degree_celsius>(30.0),
///         HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
///     )?,
/// };
///
/// let solution = WallConduction::solve(&wall, &boundaries, &SolverConfig::default());
/// assert_eq!(solution.status, Status::Converged);
///
/// let crossing = solution.locate(ThermodynamicTemperature::new::<degree_celsius>(800.0));
/// assert_eq!(crossing.index, 3);
/// # Ok::<(), twine_wall::models::thermal::wall::WallError>(())
/// ```
pub struct WallConduction;

impl WallConduction {
    /// Relaxes the temperature field of `wall` to steady state.
    ///
    /// The solve itself cannot fail: hitting `config.max_steps` is reported
    /// through [`FieldSolution::status`] and the final [`Residual`].
    #[must_use]
    pub fn solve(wall: &Wall, boundaries: &Boundaries, config: &SolverConfig) -> FieldSolution {
        solve::solve(wall, boundaries, config)
    }

    /// Solves the field and locates its crossing below `ceiling`.
    #[must_use]
    pub fn report(
        wall: &Wall,
        boundaries: &Boundaries,
        config: &SolverConfig,
        ceiling: ThermodynamicTemperature,
    ) -> WallReport {
        WallReport::new(Self::solve(wall, boundaries, config), ceiling)
    }
}
