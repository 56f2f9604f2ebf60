//! Results types for the wall field solve.

use uom::si::f64::{Length, Ratio, TemperatureInterval, ThermodynamicTemperature};

use super::{Grid, ThresholdCrossing, locate::scan};

/// Indicates whether the relaxation met its tolerance or hit the sweep limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    MaxIters,
}

/// Change between the last two sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    /// Largest absolute nodal change.
    pub absolute: TemperatureInterval,

    /// Largest absolute nodal change relative to the largest nodal magnitude.
    ///
    /// Magnitudes are taken on the Celsius scale.
    pub relative: Ratio,
}

/// Steady-state temperature field of a wall.
///
/// The field holds exactly one temperature per grid node.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSolution {
    temperatures: Vec<ThermodynamicTemperature>,
    grid: Grid,

    /// Number of sweeps performed, including the one that met the tolerance.
    pub iterations: usize,

    /// Change over the final sweep, or `None` if no sweep was performed.
    pub residual: Option<Residual>,

    /// Whether the tolerance was met.
    pub status: Status,
}

impl FieldSolution {
    /// Bundles a solved field with its grid.
    ///
    /// The caller must ensure `temperatures.len() == grid.len()`.
    pub(super) fn new(
        temperatures: Vec<ThermodynamicTemperature>,
        grid: Grid,
        iterations: usize,
        residual: Option<Residual>,
        status: Status,
    ) -> Self {
        debug_assert_eq!(temperatures.len(), grid.len());
        Self {
            temperatures,
            grid,
            iterations,
            residual,
            status,
        }
    }

    /// Returns the node temperatures, ordered from the hot face (0) to the cold face.
    #[must_use]
    pub fn temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }

    /// Returns the node grid the field is defined on.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the node spacing.
    #[must_use]
    pub fn dx(&self) -> Length {
        self.grid.dx()
    }

    /// Returns the total wall thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.grid.thickness()
    }

    /// Returns the node positions, ordered from the hot face to the cold face.
    #[must_use]
    pub fn positions(&self) -> Vec<Length> {
        self.grid.positions()
    }

    /// Returns `true` if the relaxation met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Locates the threshold crossing of this field for `ceiling`.
    ///
    /// See [`locate`](super::locate) for the search rule.
    #[must_use]
    pub fn locate(&self, ceiling: ThermodynamicTemperature) -> ThresholdCrossing {
        scan(&self.positions(), &self.temperatures, ceiling)
    }
}
