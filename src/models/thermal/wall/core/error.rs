use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while constructing wall inputs.
#[derive(Debug, Error)]
pub enum WallError {
    /// The grid has fewer than two nodes, so `dx` is undefined.
    #[error("wall grid requires at least 2 nodes, got {nodes}")]
    TooFewNodes {
        /// Requested node count.
        nodes: usize,
    },

    /// A physical input violated its numeric constraint.
    #[error("invalid {quantity}")]
    Invalid {
        /// Name of the offending input.
        quantity: &'static str,

        /// Underlying constraint violation.
        #[source]
        source: ConstraintError,
    },
}

impl WallError {
    /// Returns a mapper that tags a [`ConstraintError`] with the input it came from.
    pub(super) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Invalid { quantity, source }
    }
}
