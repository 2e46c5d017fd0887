// File: crates/chart-core/src/controller.rs
// Summary: Chart controller; owns the sample window, recomputes frames on command,
// and tracks hover state.
//
// State machine: Loading -> Empty | Ready, with Ready carrying an Idle/Hovering
// hover sub-state. Every mutation (append, replace, set_viewport) synchronously
// rebuilds the Ready frame, so `render_model` is always a finished computation.

use tracing::{debug, trace};

use crate::buffer::{AppendOutcome, ReplaceOutcome, SampleBuffer};
use crate::config::{ChartConfig, ConfigError};
use crate::grid::{build_grid, GridLine};
use crate::hit::{marker_at, nearest_target, sample_by_id, HoverState, HoverTarget};
use crate::path::{build_area_path, build_line_path, build_markers, Marker, PathSpec, Trend};
use crate::scale::Scale;
use crate::series::Series;
use crate::types::{Point, Sample, SampleId, Viewport};

/// Coarse controller state, for hosts that only need to pick a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    Loading,
    Empty,
    Ready,
}

/// First/last figures over the visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub first_value: f64,
    pub last_value: f64,
    pub change: f64,
    /// Percent of `first_value`; 0 when `first_value <= 0`.
    pub change_percent: f64,
    pub count: usize,
    pub last: Sample,
}

impl Summary {
    fn of(series: &Series) -> Option<Self> {
        let first = *series.first()?;
        let last = *series.last()?;
        let change = last.value - first.value;
        let change_percent = if first.value > 0.0 { change / first.value * 100.0 } else { 0.0 };
        Some(Self {
            first_value: first.value,
            last_value: last.value,
            change,
            change_percent,
            count: series.len(),
            last,
        })
    }
}

/// Vertical hover guide through the hovered sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
    /// Where the guide meets the line.
    pub point: Point,
    pub target: HoverTarget,
}

/// Everything a view needs to paint a ready chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadyModel {
    pub series: Series,
    pub viewport: Viewport,
    pub scale: Scale,
    pub line_path: PathSpec,
    /// `None` when the area is disabled or there are fewer than two samples.
    pub area_path: Option<PathSpec>,
    pub grid_lines: Vec<GridLine>,
    pub markers: Vec<Marker>,
    pub trend: Trend,
    pub summary: Summary,
    pub hover: HoverState,
}

impl ReadyModel {
    pub fn crosshair(&self) -> Option<Crosshair> {
        let target = *self.hover.target()?;
        let point = self.scale.point(target.index, target.sample.value);
        Some(Crosshair { x: point.x, top: 0.0, bottom: self.scale.drawable_height, point, target })
    }
}

/// Output of [`ChartController::render_model`]. Path and grid data only
/// exist in the `Ready` variant; placeholders carry just the surface size.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderModel {
    Loading { viewport: Viewport },
    Empty { viewport: Viewport },
    Ready(Box<ReadyModel>),
}

impl RenderModel {
    pub fn state(&self) -> ChartState {
        match self {
            RenderModel::Loading { .. } => ChartState::Loading,
            RenderModel::Empty { .. } => ChartState::Empty,
            RenderModel::Ready(_) => ChartState::Ready,
        }
    }

    /// Viewport the frame was produced for.
    pub fn viewport(&self) -> Viewport {
        match self {
            RenderModel::Loading { viewport } | RenderModel::Empty { viewport } => *viewport,
            RenderModel::Ready(m) => m.viewport,
        }
    }

    pub fn as_ready(&self) -> Option<&ReadyModel> {
        match self {
            RenderModel::Ready(m) => Some(m.as_ref()),
            _ => None,
        }
    }
}

enum Phase {
    Loading,
    Empty,
    Ready(Box<ReadyModel>),
}

pub struct ChartController {
    config: ChartConfig,
    buffer: SampleBuffer,
    viewport: Viewport,
    phase: Phase,
}

impl ChartController {
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buffer: SampleBuffer::new(config.capacity),
            viewport: config.viewport,
            config,
            phase: Phase::Loading,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> ChartState {
        match self.phase {
            Phase::Loading => ChartState::Loading,
            Phase::Empty => ChartState::Empty,
            Phase::Ready(_) => ChartState::Ready,
        }
    }

    pub fn hover(&self) -> HoverState {
        match &self.phase {
            Phase::Ready(m) => m.hover,
            _ => HoverState::Idle,
        }
    }

    /// Snapshot of the visible window (empty unless ready).
    pub fn series(&self) -> Series {
        match &self.phase {
            Phase::Ready(m) => m.series.clone(),
            _ => Series::empty(),
        }
    }

    pub fn render_model(&self) -> RenderModel {
        match &self.phase {
            Phase::Loading => RenderModel::Loading { viewport: self.viewport },
            Phase::Empty => RenderModel::Empty { viewport: self.viewport },
            Phase::Ready(m) => RenderModel::Ready(m.clone()),
        }
    }

    /// Idempotent; a changed viewport recomputes the frame and keeps hover.
    pub fn set_viewport(&mut self, width_px: f64, height_px: f64, padding_px: f64) {
        let next = Viewport::new(width_px, height_px, padding_px);
        if next == self.viewport {
            return;
        }
        self.viewport = next;
        if matches!(self.phase, Phase::Ready(_)) {
            let hover = self.hover();
            self.rebuild(hover);
        }
    }

    /// Rejected samples leave the controller untouched, including a pending
    /// `Loading` state.
    pub fn append(&mut self, sample: Sample) -> AppendOutcome {
        let outcome = self.buffer.append(sample);
        if outcome.is_appended() {
            let hover = self.hover();
            self.rebuild(hover);
        }
        outcome
    }

    /// Swap the whole window and drop any hover from the previous series.
    pub fn replace(&mut self, samples: impl IntoIterator<Item = Sample>) -> ReplaceOutcome {
        let outcome = self.buffer.replace(samples);
        self.rebuild(HoverState::Idle);
        outcome
    }

    /// Back to `Loading`, e.g. while a new asset's data is on its way.
    pub fn begin_loading(&mut self) {
        self.buffer.clear();
        self.set_phase(Phase::Loading);
    }

    /// Release the series; the controller is gone afterwards.
    pub fn unmount(self) {
        debug!(len = self.buffer.len(), "chart unmounted");
    }

    /// Inverse-map a drawable-space x to the nearest sample.
    pub fn on_pointer_move(&mut self, x: f64) -> HoverState {
        let Phase::Ready(model) = &mut self.phase else {
            return HoverState::Idle;
        };
        model.hover = match nearest_target(&model.series, &model.scale, x) {
            Some(target) => HoverState::Hovering(target),
            None => HoverState::Idle,
        };
        model.hover
    }

    /// Direct selection of a plotted point. Unknown ids leave hover unchanged.
    pub fn on_pointer_enter(&mut self, id: SampleId) -> HoverState {
        let Phase::Ready(model) = &mut self.phase else {
            return HoverState::Idle;
        };
        if let Some(target) = sample_by_id(&model.series, id) {
            model.hover = HoverState::Hovering(target);
        }
        model.hover
    }

    /// Marker hit test at a drawable-space position.
    pub fn on_pointer_at(&mut self, x: f64, y: f64) -> HoverState {
        let Phase::Ready(model) = &mut self.phase else {
            return HoverState::Idle;
        };
        model.hover = match marker_at(&model.markers, Point::new(x, y)) {
            Some(marker) => HoverState::Hovering(HoverTarget {
                index: marker.index,
                sample: model.series[marker.index],
            }),
            None => HoverState::Idle,
        };
        model.hover
    }

    pub fn on_pointer_leave(&mut self) -> HoverState {
        if let Phase::Ready(model) = &mut self.phase {
            model.hover = HoverState::Idle;
        }
        HoverState::Idle
    }

    fn set_phase(&mut self, next: Phase) {
        let from = self.state();
        self.phase = next;
        let to = self.state();
        if from != to {
            debug!(?from, ?to, "chart state changed");
        }
    }

    fn rebuild(&mut self, hover: HoverState) {
        let series = self.buffer.snapshot();
        let next = match self.build_model(series, hover) {
            Some(model) => Phase::Ready(Box::new(model)),
            None => Phase::Empty,
        };
        self.set_phase(next);
    }

    fn build_model(&self, series: Series, hover: HoverState) -> Option<ReadyModel> {
        let scale = Scale::compute(&series, &self.viewport)?;
        let summary = Summary::of(&series)?;
        let line_path = build_line_path(&series, &scale);
        let area_path = if self.config.show_area && series.len() >= 2 {
            Some(build_area_path(&series, &scale))
        } else {
            None
        };
        let grid_lines = build_grid(&scale, self.config.grid_lines);
        let markers = build_markers(&series, &scale, self.config.marker_radius, self.config.marker_hit_radius);
        let trend = Trend::of(&series);

        // Hover follows its sample by id; an evicted sample drops the hover.
        let hover = match hover {
            HoverState::Hovering(t) => sample_by_id(&series, t.id()).map_or(HoverState::Idle, HoverState::Hovering),
            HoverState::Idle => HoverState::Idle,
        };

        trace!(len = series.len(), degenerate = self.viewport.is_degenerate(), step_x = scale.step_x, range = scale.value_range, "frame recomputed");
        Some(ReadyModel {
            series,
            viewport: self.viewport,
            scale,
            line_path,
            area_path,
            grid_lines,
            markers,
            trend,
            summary,
            hover,
        })
    }
}
