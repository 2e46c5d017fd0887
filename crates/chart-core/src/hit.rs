// File: crates/chart-core/src/hit.rs
// Summary: Pointer-to-sample resolution (inverse X mapping and direct point selection).

use crate::path::Marker;
use crate::scale::Scale;
use crate::series::Series;
use crate::types::{Point, Sample, SampleId};

/// A resolved sample. Every selection route produces this same shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverTarget {
    pub index: usize,
    pub sample: Sample,
}

impl HoverTarget {
    pub fn id(&self) -> SampleId {
        self.sample.id()
    }
}

/// Hover sub-state of a ready chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(HoverTarget),
}

impl HoverState {
    pub fn target(&self) -> Option<&HoverTarget> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(t) => Some(t),
        }
    }

    pub fn selected_sample(&self) -> Option<&Sample> {
        self.target().map(|t| &t.sample)
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, HoverState::Hovering(_))
    }
}

/// Nearest target for a drawable-space x: `round(x / step_x)` clamped to the series.
pub fn nearest_target(series: &Series, scale: &Scale, pointer_x: f64) -> Option<HoverTarget> {
    if series.is_empty() {
        return None;
    }
    let index = scale.index_for_x(pointer_x)?.min(series.len() - 1);
    Some(HoverTarget { index, sample: series[index] })
}

pub fn nearest_sample(series: &Series, scale: &Scale, pointer_x: f64) -> Option<Sample> {
    nearest_target(series, scale, pointer_x).map(|t| t.sample)
}

/// Direct selection by id, bypassing any geometry.
pub fn sample_by_id(series: &Series, id: SampleId) -> Option<HoverTarget> {
    let index = series.index_of(id)?;
    Some(HoverTarget { index, sample: series[index] })
}

/// Marker whose hit circle contains `p`; the closest one wins on overlap.
pub fn marker_at(markers: &[Marker], p: Point) -> Option<&Marker> {
    markers
        .iter()
        .filter(|m| m.contains(p))
        .min_by(|a, b| a.center.distance_to(p).total_cmp(&b.center.distance_to(p)))
}
