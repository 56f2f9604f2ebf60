use uom::si::f64::Ratio;

use crate::models::thermal::wall::core::Wall;

use super::Face;

/// Convective environments on both faces of the wall.
///
/// The hot face sits at node 0 and the cold face at the last node.
/// The labels name the intended orientation; nothing prevents a "hot" face
/// that is colder than the "cold" one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    /// Face at `x = 0`, heated by the furnace gas.
    pub hot: Face,

    /// Face at `x = thickness`, cooled by the surroundings.
    pub cold: Face,
}

/// Biot-like coefficients of the two boundary nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biot {
    /// Coefficient of the hot-face node.
    pub hot: Ratio,

    /// Coefficient of the cold-face node.
    pub cold: Ratio,
}

impl Boundaries {
    /// Returns the Biot-like coefficients of both boundary nodes for `wall`.
    #[must_use]
    pub fn biot(&self, wall: &Wall) -> Biot {
        let dx = wall.grid().dx();
        Biot {
            hot: self.hot.biot(dx, wall.conductivity()),
            cold: self.cold.biot(dx, wall.conductivity()),
        }
    }
}
