//! Sweep-by-sweep relaxation of the nodal temperatures.
//!
//! Values are plain `f64` in degrees Celsius.

/// Convective balance of a boundary node.
#[derive(Debug, Clone, Copy)]
pub(super) struct RobinNode {
    /// Biot-like coefficient `h * dx / k`.
    pub(super) beta: f64,

    /// Ambient fluid temperature.
    pub(super) ambient: f64,
}

impl RobinNode {
    /// Returns the node temperature that balances conduction from `neighbour`
    /// against convection from the ambient fluid.
    fn balance(&self, neighbour: f64) -> f64 {
        (neighbour + self.beta * self.ambient) / (1.0 + self.beta)
    }
}

/// Two independently owned buffers holding the current and previous sweep.
#[derive(Debug, Clone)]
pub(super) struct Relaxation {
    current: Vec<f64>,
    previous: Vec<f64>,
    hot: RobinNode,
    cold: RobinNode,
}

impl Relaxation {
    /// Starts every node at `guess`.
    ///
    /// The caller must ensure `nodes >= 2`.
    pub(super) fn new(nodes: usize, guess: f64, hot: RobinNode, cold: RobinNode) -> Self {
        Self {
            current: vec![guess; nodes],
            previous: vec![guess; nodes],
            hot,
            cold,
        }
    }

    /// Performs one sweep from the hot face to the cold face.
    ///
    /// The hot boundary reads the previous sweep. Each interior node reads its
    /// left neighbour from the current sweep and its right neighbour from the
    /// previous sweep. The cold boundary reads the current sweep.
    pub(super) fn sweep(&mut self) {
        // Every entry of `current` is overwritten below, so a swap suffices.
        std::mem::swap(&mut self.current, &mut self.previous);

        let last = self.current.len() - 1;
        let (current, previous) = (&mut self.current, &self.previous);

        current[0] = self.hot.balance(previous[1]);
        for j in 1..last {
            current[j] = 0.5 * (current[j - 1] + previous[j + 1]);
        }
        current[last] = self.cold.balance(current[last - 1]);
    }

    /// Returns the field after the latest sweep.
    pub(super) fn current(&self) -> &[f64] {
        &self.current
    }

    /// Returns the field before the latest sweep.
    pub(super) fn previous(&self) -> &[f64] {
        &self.previous
    }

    /// Consumes the relaxation and returns the latest field.
    pub(super) fn into_current(self) -> Vec<f64> {
        self.current
    }
}
