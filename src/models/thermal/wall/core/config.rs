use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::StrictlyPositive;

use super::WallError;

/// Solver configuration for the wall field relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Temperature every node starts from.
    pub initial_guess: ThermodynamicTemperature,

    /// Absolute tolerance on the largest nodal change between two sweeps.
    pub tol: TemperatureInterval,

    /// Maximum number of sweeps.
    ///
    /// Reaching this limit is not an error; the last field is returned with
    /// [`Status::MaxIters`](super::Status::MaxIters).
    pub max_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: ThermodynamicTemperature::new::<degree_celsius>(100.0),
            tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            max_steps: 1_000_000,
        }
    }
}

impl SolverConfig {
    /// Constructs a configuration with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not strictly positive.
    pub fn new(
        initial_guess: ThermodynamicTemperature,
        tol: TemperatureInterval,
        max_steps: usize,
    ) -> Result<Self, WallError> {
        let tol = StrictlyPositive::new(tol).map_err(WallError::invalid("tolerance"))?;
        Ok(Self {
            initial_guess,
            tol: tol.into_inner(),
            max_steps,
        })
    }

    /// Returns a copy of this configuration with a different tolerance.
    #[must_use]
    pub fn with_tol(self, tol: TemperatureInterval) -> Self {
        Self { tol, ..self }
    }

    /// Returns a copy of this configuration with a different sweep limit.
    #[must_use]
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }
}
