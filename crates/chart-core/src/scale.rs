// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) transforms from series domain to drawable pixels.

use crate::series::Series;
use crate::types::{Point, Viewport};

/// Fraction of `|max|` used as the synthetic range of a flat series.
pub const FLAT_RANGE_FRACTION: f64 = 0.01;
/// Synthetic range used when a flat series sits at zero.
pub const FLAT_RANGE_AT_ZERO: f64 = 1.0;

/// Linear mapping for one render.
///
/// Only exists for a non-empty series, so anything that needs a `Scale`
/// (paths, grid, hit testing) cannot run against empty data.
/// Contract: `value_range > 0`, `step_x >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min_value: f64,
    pub max_value: f64,
    pub value_range: f64,
    pub step_x: f64,
    pub drawable_width: f64,
    pub drawable_height: f64,
    /// Number of samples the scale was computed for.
    pub len: usize,
}

impl Scale {
    /// Derive the scale for `series` on `viewport`; `None` for an empty series.
    pub fn compute(series: &Series, viewport: &Viewport) -> Option<Self> {
        let (lo, hi) = series.value_bounds()?;
        let (min_value, max_value) = widen_flat(lo, hi);
        let drawable_width = viewport.drawable_width();
        let drawable_height = viewport.drawable_height();
        let len = series.len();
        let step_x = drawable_width / (len.saturating_sub(1).max(1)) as f64;
        Some(Self {
            min_value,
            max_value,
            value_range: max_value - min_value,
            step_x,
            drawable_width,
            drawable_height,
            len,
        })
    }

    #[inline]
    pub fn x_for_index(&self, index: usize) -> f64 {
        index as f64 * self.step_x
    }

    /// Larger values map to smaller y (higher on screen).
    #[inline]
    pub fn y_for_value(&self, value: f64) -> f64 {
        self.drawable_height - ((value - self.min_value) / self.value_range) * self.drawable_height
    }

    #[inline]
    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.x_for_index(index), self.y_for_value(value))
    }

    /// Nearest sample index for a drawable-space x, clamped to the series.
    pub fn index_for_x(&self, x: f64) -> Option<usize> {
        if self.len == 0 || !x.is_finite() {
            return None;
        }
        let last = (self.len - 1) as f64;
        let raw = if self.step_x > 0.0 { (x / self.step_x).round() } else { 0.0 };
        Some(raw.clamp(0.0, last) as usize)
    }

    /// Inverse of [`Self::y_for_value`]; returns `min_value` on a zero-height surface.
    pub fn value_for_y(&self, y: f64) -> f64 {
        if self.drawable_height <= 0.0 {
            return self.min_value;
        }
        self.min_value + ((self.drawable_height - y) / self.drawable_height) * self.value_range
    }
}

/// Expand a zero-width value range symmetrically so a flat series renders
/// through the vertical middle of the plot.
///
/// Bounds come from a `SampleBuffer`, so `|lo|, |hi| <= MAX_ABS_VALUE` and
/// `hi - lo` is finite.
fn widen_flat(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo > 0.0 {
        return (lo, hi);
    }
    let mut eps = if hi == 0.0 { FLAT_RANGE_AT_ZERO } else { hi.abs() * FLAT_RANGE_FRACTION };
    // subnormal values round the fraction down to zero
    if eps <= 0.0 {
        eps = FLAT_RANGE_AT_ZERO;
    }
    (hi - eps / 2.0, hi + eps / 2.0)
}
