//! Plane wall conduction models.
//!
//! [`FurnaceWall`] is the [`twine_core::Model`] adapter. The computational
//! core is in the internal `core` module; its entry points and types are
//! re-exported here.

mod core;

pub use self::core::{
    Biot, Boundaries, CrossingStatus, Face, FieldSolution, Grid, LocateError, Residual,
    SolverConfig, Status, ThresholdCrossing, Wall, WallConduction, WallError, WallReport, locate,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

/// Input to the [`FurnaceWall`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallInput {
    /// Wall geometry and material.
    pub wall: Wall,

    /// Convective environments on both faces.
    pub boundaries: Boundaries,

    /// Temperature ceiling of the low-grade material.
    pub ceiling: ThermodynamicTemperature,
}

/// Furnace wall model: solves the steady-state field and splits the wall at
/// the threshold crossing.
///
/// The model is stateless; each call owns its own field buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FurnaceWall {
    config: SolverConfig,
}

impl FurnaceWall {
    /// Creates a model that solves with `config`.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Model for FurnaceWall {
    type Input = WallInput;
    type Output = WallReport;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(WallConduction::report(
            &input.wall,
            &input.boundaries,
            &self.config,
            input.ceiling,
        ))
    }
}
