use uom::si::f64::Length;

/// Equally spaced nodes spanning the wall from the hot face to the cold face.
///
/// Node 0 sits on the hot face (`x = 0`) and node `len() - 1` on the cold
/// face (`x = thickness`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    thickness: Length,
    nodes: usize,
}

impl Grid {
    /// Constructs a grid.
    ///
    /// The caller must ensure `nodes >= 2`; [`Wall`](super::Wall) enforces this.
    pub(super) fn new(thickness: Length, nodes: usize) -> Self {
        Self { thickness, nodes }
    }

    /// Returns the node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes
    }

    /// Returns `true` if the grid has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Returns the total wall thickness spanned by the grid.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// Returns the node spacing, `thickness / (nodes - 1)`.
    #[must_use]
    pub fn dx(&self) -> Length {
        self.thickness / (self.nodes - 1) as f64
    }

    /// Returns the position of node `index`, measured from the hot face.
    ///
    /// The last node is placed exactly on the cold face.
    #[must_use]
    pub fn position(&self, index: usize) -> Length {
        if index + 1 == self.nodes {
            self.thickness
        } else {
            self.dx() * index as f64
        }
    }

    /// Returns all node positions, ordered from the hot face to the cold face.
    #[must_use]
    pub fn positions(&self) -> Vec<Length> {
        (0..self.nodes).map(|index| self.position(index)).collect()
    }
}
