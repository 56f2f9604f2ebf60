mod boundaries;
mod face;
mod wall;

pub use boundaries::{Biot, Boundaries};
pub use face::Face;
pub use wall::Wall;
