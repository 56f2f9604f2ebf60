//! Threshold crossing search.
//!
//! Given a temperature profile ordered from the hot face, the crossing is the
//! first node beyond which every remaining node stays at or below a ceiling.
//! Material past the crossing can be made of a lower-grade refractory.

mod error;

pub use error::LocateError;

use std::cmp::Ordering;

use uom::si::f64::{Length, ThermodynamicTemperature};

/// Indicates whether the ceiling is respected at the reported crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingStatus {
    /// Every node from the crossing onward is at or below the ceiling.
    Found,

    /// Even the last node exceeds the ceiling.
    ///
    /// The last node is reported as the best-available boundary.
    Fallback,
}

/// Node at which the temperature profile drops below the ceiling for good.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCrossing {
    /// Position of the crossing node, measured from the hot face.
    pub position: Length,

    /// Temperature of the crossing node.
    pub temperature: ThermodynamicTemperature,

    /// Index of the crossing node.
    pub index: usize,

    /// Whether the ceiling actually holds from the crossing onward.
    pub status: CrossingStatus,
}

/// Locates the first node beyond which every node respects `ceiling`.
///
/// Scanning from the hot face (index 0), the crossing is the first index `j`
/// for which `max(temperatures[j..]) <= ceiling`. A single node dipping below
/// the ceiling is not enough if a later node rises above it again.
///
/// If no such index exists, the last index is reported with
/// [`CrossingStatus::Fallback`].
///
/// `positions` is expected to be sorted ascending, hot face first.
///
/// # Errors
///
/// Returns [`LocateError`] if the slices are empty or differ in length.
///
/// # Example
///
/// ```
/// use twine_wall::models::thermal::wall::{CrossingStatus, locate};
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature},
///     length::meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let positions: Vec<_> = [0.0, 0.1, 0.2].map(Length::new::<meter>).into();
/// let temperatures: Vec<_> =
///     [1000.0, 700.0, 400.0].map(ThermodynamicTemperature::new::<degree_celsius>).into();
///
/// let crossing = locate(
///     &positions,
///     &temperatures,
///     ThermodynamicTemperature::new::<degree_celsius>(800.0),
/// )
/// .unwrap();
///
/// assert_eq!(crossing.index, 1);
/// assert_eq!(crossing.status, CrossingStatus::Found);
/// ```
pub fn locate(
    positions: &[Length],
    temperatures: &[ThermodynamicTemperature],
    ceiling: ThermodynamicTemperature,
) -> Result<ThresholdCrossing, LocateError> {
    if temperatures.is_empty() {
        return Err(LocateError::Empty);
    }
    if positions.len() != temperatures.len() {
        return Err(LocateError::LengthMismatch {
            positions: positions.len(),
            temperatures: temperatures.len(),
        });
    }
    Ok(scan(positions, temperatures, ceiling))
}

/// Performs the crossing search on non-empty, equal-length slices.
pub(super) fn scan(
    positions: &[Length],
    temperatures: &[ThermodynamicTemperature],
    ceiling: ThermodynamicTemperature,
) -> ThresholdCrossing {
    let last = temperatures.len() - 1;

    // The suffix max at `j` respects the ceiling exactly when `j` lies past
    // the last node that breaks it. NaN counts as breaking it.
    let last_violation = temperatures.iter().rposition(|t| {
        !matches!(
            t.partial_cmp(&ceiling),
            Some(Ordering::Less | Ordering::Equal)
        )
    });

    let (index, status) = match last_violation {
        None => (0, CrossingStatus::Found),
        Some(j) if j < last => (j + 1, CrossingStatus::Found),
        Some(_) => (last, CrossingStatus::Fallback),
    };

    ThresholdCrossing {
        position: positions[index],
        temperature: temperatures[index],
        index,
        status,
    }
}
