// File: crates/chart-core/src/grid.rs
// Summary: Horizontal reference lines and their axis label values.

use crate::scale::Scale;

/// Grid line count used by both dashboard charts.
pub const DEFAULT_GRID_LINES: usize = 5;

/// One horizontal reference line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub y_pixel: f64,
    pub label_value: f64,
}

/// `steps` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `line_count + 1` lines from `max_value` at the top to `min_value` at the
/// bottom. Density does not adapt to the value range. A count of 0 is read as 1.
pub fn build_grid(scale: &Scale, line_count: usize) -> Vec<GridLine> {
    let steps = line_count.max(1) + 1;
    let rows = linspace(0.0, scale.drawable_height, steps);
    let values = linspace(scale.max_value, scale.min_value, steps);
    rows.into_iter()
        .zip(values)
        .map(|(y_pixel, label_value)| GridLine { y_pixel, label_value })
        .collect()
}
