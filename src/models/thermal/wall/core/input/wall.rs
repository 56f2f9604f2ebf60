use uom::si::f64::{Length, ThermalConductivity};

use crate::support::constraint::{Constrained, StrictlyPositive};

use crate::models::thermal::wall::core::{Grid, WallError};

/// Geometry and material of a plane wall.
///
/// The wall has a strictly positive thickness and conductivity and is
/// discretized into at least two nodes (one on each face).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    thickness: Length,
    nodes: usize,
    conductivity: ThermalConductivity,
}

impl Wall {
    /// Constructs a validated wall.
    ///
    /// # Errors
    ///
    /// Returns an error if `thickness` or `conductivity` is not strictly
    /// positive, or if `nodes < 2`.
    pub fn new(
        thickness: Length,
        nodes: usize,
        conductivity: ThermalConductivity,
    ) -> Result<Self, WallError> {
        let thickness = StrictlyPositive::new(thickness).map_err(WallError::invalid("thickness"))?;
        let conductivity =
            StrictlyPositive::new(conductivity).map_err(WallError::invalid("conductivity"))?;
        Self::from_constrained(thickness, nodes, conductivity)
    }

    /// Constructs a wall from pre-validated quantities.
    ///
    /// # Errors
    ///
    /// Returns an error if `nodes < 2`.
    pub fn from_constrained(
        thickness: Constrained<Length, StrictlyPositive>,
        nodes: usize,
        conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    ) -> Result<Self, WallError> {
        if nodes < 2 {
            return Err(WallError::TooFewNodes { nodes });
        }
        Ok(Self {
            thickness: thickness.into_inner(),
            nodes,
            conductivity: conductivity.into_inner(),
        })
    }

    /// Constructs a wall without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `thickness > 0`, `conductivity > 0`, and
    /// `nodes >= 2`. Violations surface as non-finite temperatures or panics.
    #[must_use]
    pub fn new_unchecked(
        thickness: Length,
        nodes: usize,
        conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            thickness,
            nodes,
            conductivity,
        }
    }

    /// Returns the total wall thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// Returns the node count.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the wall thermal conductivity.
    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity
    }

    /// Returns the node grid for this wall.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.thickness, self.nodes)
    }
}
