/// Floor on the reference magnitude of the relative change.
///
/// Applies only when every node sits at (or within `1e-12` of) zero, where the
/// relative change would otherwise divide by zero.
pub(super) const MAGNITUDE_FLOOR: f64 = 1e-12;

/// Change between two consecutive sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Change {
    /// Largest absolute nodal change.
    pub(super) absolute: f64,

    /// `absolute` as a percentage of the largest nodal magnitude.
    pub(super) percent: f64,
}

impl Change {
    /// Measures the change from `previous` to `current`.
    ///
    /// A NaN anywhere in either field makes both measures NaN.
    pub(super) fn between(current: &[f64], previous: &[f64]) -> Self {
        let absolute = current
            .iter()
            .zip(previous)
            .map(|(now, before)| (now - before).abs())
            .fold(0.0, nan_max);

        let magnitude = current.iter().map(|t| t.abs()).fold(0.0, nan_max);
        let reference = if magnitude > MAGNITUDE_FLOOR {
            magnitude
        } else if magnitude.is_nan() {
            f64::NAN
        } else {
            MAGNITUDE_FLOOR
        };

        Self {
            absolute,
            percent: 100.0 * absolute / reference,
        }
    }
}

/// Maximum that propagates NaN instead of skipping it.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
