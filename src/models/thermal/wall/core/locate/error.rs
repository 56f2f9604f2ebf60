use thiserror::Error;

/// Errors that can occur while locating a threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    /// No nodes were given.
    #[error("cannot locate a crossing in an empty field")]
    Empty,

    /// Positions and temperatures are not one-to-one.
    #[error("got {positions} positions for {temperatures} temperatures")]
    LengthMismatch {
        /// Number of positions.
        positions: usize,

        /// Number of temperatures.
        temperatures: usize,
    },
}
