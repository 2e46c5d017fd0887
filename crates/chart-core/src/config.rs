// File: crates/chart-core/src/config.rs
// Summary: Chart configuration, variant presets, and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::DEFAULT_CAPACITY;
use crate::format::{LabelFormat, TimeFormat, TimeRange};
use crate::grid::DEFAULT_GRID_LINES;
use crate::types::Viewport;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    #[error("grid line count must be at least 1")]
    ZeroGridLines,
    #[error("viewport {field} must be finite and non-negative (got {value})")]
    InvalidViewport { field: &'static str, value: f64 },
    #[error("marker {field} must be finite and non-negative (got {value})")]
    InvalidMarker { field: &'static str, value: f64 },
}

/// The two dashboard charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    /// Single-asset price line.
    #[default]
    Price,
    /// Portfolio value with filled area and per-sample change.
    Portfolio,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub variant: ChartVariant,
    /// Sliding window length `N`.
    pub capacity: usize,
    pub grid_lines: usize,
    pub viewport: Viewport,
    pub show_grid: bool,
    pub show_area: bool,
    pub marker_radius: f64,
    /// Pointer distance that still selects a marker; never below `marker_radius`.
    pub marker_hit_radius: f64,
    pub line_width: f64,
    pub label_format: LabelFormat,
    pub time_format: TimeFormat,
    /// Header caption range; `None` shows no caption.
    pub time_range: Option<TimeRange>,
    /// Theme preset name for hosts that paint the model.
    pub theme: String,
}

impl ChartConfig {
    pub fn price() -> Self {
        Self {
            variant: ChartVariant::Price,
            capacity: DEFAULT_CAPACITY,
            grid_lines: DEFAULT_GRID_LINES,
            viewport: Viewport::new(400.0, 300.0, 20.0),
            show_grid: true,
            show_area: false,
            marker_radius: 3.0,
            marker_hit_radius: 3.0,
            line_width: 2.0,
            label_format: LabelFormat::Currency,
            time_format: TimeFormat::Time,
            time_range: None,
            theme: "dark".to_string(),
        }
    }

    pub fn portfolio() -> Self {
        Self {
            variant: ChartVariant::Portfolio,
            capacity: DEFAULT_CAPACITY,
            grid_lines: DEFAULT_GRID_LINES,
            viewport: Viewport::new(600.0, 300.0, 40.0),
            show_grid: true,
            show_area: true,
            marker_radius: 4.0,
            marker_hit_radius: 8.0,
            line_width: 3.0,
            label_format: LabelFormat::Thousands,
            time_format: TimeFormat::Date,
            time_range: Some(TimeRange::Month),
            theme: "dark".to_string(),
        }
    }

    pub fn for_variant(variant: ChartVariant) -> Self {
        match variant {
            ChartVariant::Price => Self::price(),
            ChartVariant::Portfolio => Self::portfolio(),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.grid_lines == 0 {
            return Err(ConfigError::ZeroGridLines);
        }
        let vp = &self.viewport;
        for (field, value) in [("width", vp.width_px), ("height", vp.height_px), ("padding", vp.padding_px)] {
            if !is_non_negative(value) {
                return Err(ConfigError::InvalidViewport { field, value });
            }
        }
        for (field, value) in [
            ("radius", self.marker_radius),
            ("hit radius", self.marker_hit_radius),
            ("line width", self.line_width),
        ] {
            if !is_non_negative(value) {
                return Err(ConfigError::InvalidMarker { field, value });
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::price()
    }
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
