// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (samples, viewport, pixel points).

use serde::{Deserialize, Serialize};

/// Default drawable width in pixels (price chart).
pub const WIDTH: f64 = 400.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 300.0;
/// Default inset on every side of the plot, in pixels.
pub const PADDING: f64 = 20.0;

/// Identity of a sample inside a series. Timestamps are unique per series,
/// so the timestamp doubles as the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(pub i64);

/// One timestamped observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub value: f64,
    /// Period-over-period delta carried by portfolio data. Display only.
    pub change_percent: Option<f64>,
}

impl Sample {
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value, change_percent: None }
    }

    pub const fn with_change(timestamp: i64, value: f64, change_percent: f64) -> Self {
        Self { timestamp, value, change_percent: Some(change_percent) }
    }

    #[inline]
    pub const fn id(&self) -> SampleId {
        SampleId(self.timestamp)
    }
}

/// A pixel position in drawable space (origin at the top-left of the plot).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Drawing surface description.
///
/// `width_px` is the plot width; the plot is inset by `padding_px` on every
/// side, so the full surface is `width_px + 2 * padding_px` wide and
/// `height_px` tall, and the drawable height is `height_px - 2 * padding_px`.
/// Contract: all fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
    pub padding_px: f64,
}

impl Viewport {
    /// Create a viewport, clamping negative or non-finite inputs to zero.
    pub fn new(width_px: f64, height_px: f64, padding_px: f64) -> Self {
        Self {
            width_px: sanitize(width_px),
            height_px: sanitize(height_px),
            padding_px: sanitize(padding_px),
        }
    }

    pub fn drawable_width(&self) -> f64 {
        self.width_px
    }

    pub fn drawable_height(&self) -> f64 {
        (self.height_px - 2.0 * self.padding_px).max(0.0)
    }

    /// Full surface size including padding.
    pub fn surface_size(&self) -> (f64, f64) {
        (self.width_px + 2.0 * self.padding_px, self.height_px)
    }

    /// Convert a surface-space position into drawable space.
    pub fn to_drawable(&self, surface_x: f64, surface_y: f64) -> Point {
        Point::new(surface_x - self.padding_px, surface_y - self.padding_px)
    }

    pub fn is_degenerate(&self) -> bool {
        self.drawable_width() <= 0.0 || self.drawable_height() <= 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}

#[inline]
fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
