//! Combined field and crossing summary.

use std::fmt;

use uom::si::{
    f64::{Length, Ratio, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    ratio::percent,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::TemperatureDifference;

use super::{FieldSolution, ThresholdCrossing};

/// Solved wall together with its threshold crossing.
///
/// The crossing splits the wall into a high-grade layer on the hot side,
/// which must withstand temperatures above the ceiling, and a low-grade layer
/// on the cold side.
#[derive(Debug, Clone, PartialEq)]
pub struct WallReport {
    /// Steady-state temperature field.
    pub solution: FieldSolution,

    /// Temperature ceiling of the low-grade material.
    pub ceiling: ThermodynamicTemperature,

    /// Crossing of the field below `ceiling`.
    pub crossing: ThresholdCrossing,
}

impl WallReport {
    /// Locates the crossing of `solution` below `ceiling` and bundles both.
    #[must_use]
    pub fn new(solution: FieldSolution, ceiling: ThermodynamicTemperature) -> Self {
        let crossing = solution.locate(ceiling);
        Self {
            solution,
            ceiling,
            crossing,
        }
    }

    /// Returns the thickness of the high-grade layer, measured from the hot face.
    #[must_use]
    pub fn high_grade_thickness(&self) -> Length {
        self.crossing.position
    }

    /// Returns the thickness of the low-grade layer beyond the crossing.
    #[must_use]
    pub fn low_grade_thickness(&self) -> Length {
        self.solution.thickness() - self.crossing.position
    }

    /// Returns the temperature at the interface between the two layers.
    #[must_use]
    pub fn interface_temperature(&self) -> ThermodynamicTemperature {
        self.crossing.temperature
    }

    /// Returns how far the interface sits below the ceiling.
    ///
    /// Negative when the crossing is a fallback that still exceeds the ceiling.
    #[must_use]
    pub fn ceiling_margin(&self) -> TemperatureInterval {
        self.ceiling.minus(self.crossing.temperature)
    }

    /// Returns `true` if the final relative change is within `limit`.
    ///
    /// Returns `false` if no sweep was performed.
    #[must_use]
    pub fn within(&self, limit: Ratio) -> bool {
        self.solution
            .residual
            .is_some_and(|residual| residual.relative.abs() <= limit)
    }
}

impl fmt::Display for WallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |values: Vec<f64>, precision: usize| {
            values
                .iter()
                .map(|v| format!("{v:.precision$}"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let positions = self.solution.positions().iter().map(|x| x.get::<meter>()).collect();
        let temperatures = self
            .solution
            .temperatures()
            .iter()
            .map(|t| t.get::<degree_celsius>())
            .collect();

        writeln!(f, "x positions [m]            : [{}]", join(positions, 3))?;
        writeln!(f, "node temperatures [°C]     : [{}]", join(temperatures, 2))?;
        writeln!(f, "iterations to converge     : {}", self.solution.iterations)?;
        writeln!(f, "dx [m]                     : {:.4}", self.solution.dx().get::<meter>())?;
        writeln!(
            f,
            "required high-grade [m]    : {:.3}",
            self.high_grade_thickness().get::<meter>()
        )?;
        writeln!(
            f,
            "interface temp [°C]        : {:.2}",
            self.interface_temperature().get::<degree_celsius>()
        )?;
        writeln!(
            f,
            "remaining low-grade [m]    : {:.3}",
            self.low_grade_thickness().get::<meter>()
        )?;
        match self.solution.residual {
            Some(residual) => {
                writeln!(
                    f,
                    "convergence ΔT_max [°C]    : {:.3e}",
                    residual.absolute.get::<delta_kelvin>()
                )?;
                writeln!(
                    f,
                    "convergence error [%]      : {:.3e}",
                    residual.relative.get::<percent>()
                )?;
            }
            None => writeln!(f, "convergence                : no sweeps performed")?,
        }
        write!(
            f,
            "within ±5% change?         : {}",
            self.within(Ratio::new::<percent>(5.0))
        )
    }
}
