// File: crates/chart-core/src/lib.rs
// Summary: Engine entry point; exports the public API for the time-series chart engine.

pub mod buffer;
pub mod config;
pub mod controller;
pub mod format;
pub mod grid;
pub mod hit;
pub mod path;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use buffer::{AppendOutcome, RejectReason, ReplaceOutcome, SampleBuffer};
pub use config::{ChartConfig, ChartVariant, ConfigError};
pub use controller::{ChartController, ChartState, Crosshair, ReadyModel, RenderModel, Summary};
pub use format::{HeaderText, LabelFormat, TimeFormat, TimeRange, TooltipText};
pub use grid::{build_grid, GridLine};
pub use hit::{marker_at, nearest_sample, sample_by_id, HoverState, HoverTarget};
pub use path::{build_area_path, build_line_path, build_markers, Marker, PathSpec, Trend};
pub use scale::Scale;
pub use series::Series;
pub use theme::{Rgba, Theme};
pub use types::{Point, Sample, SampleId, Viewport};
