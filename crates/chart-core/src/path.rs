// File: crates/chart-core/src/path.rs
// Summary: Line/area path construction, point markers, and the trend decision.

use std::fmt::Write as _;

use crate::scale::Scale;
use crate::series::Series;
use crate::types::{Point, SampleId};

/// Ordered vertex list. `closed` paths are polygons (area fill).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSpec {
    pub vertices: Vec<Point>,
    pub closed: bool,
}

impl PathSpec {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A single vertex: nothing to stroke, draw it as a dot.
    pub fn is_point(&self) -> bool {
        self.vertices.len() == 1
    }

    /// SVG path data: `M x,y L x,y ...`, with a trailing `Z` when closed.
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(out, "{cmd} {},{}", fmt_coord(p.x), fmt_coord(p.y));
        }
        if self.closed && !out.is_empty() {
            out.push_str(" Z");
        }
        out
    }
}

fn fmt_coord(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() { format!("{}", r as i64) } else { format!("{r}") }
}

/// Binary trend over the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Non-negative `last - first` is `Up`. An empty series counts as `Up`.
    pub fn of(series: &Series) -> Self {
        match (series.first(), series.last()) {
            (Some(first), Some(last)) if last.value - first.value < 0.0 => Trend::Down,
            _ => Trend::Up,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Polyline through every sample, one vertex per sample.
pub fn build_line_path(series: &Series, scale: &Scale) -> PathSpec {
    let vertices = series
        .iter()
        .enumerate()
        .map(|(i, s)| scale.point(i, s.value))
        .collect();
    PathSpec { vertices, closed: false }
}

/// Closed polygon under the polyline, down to the bottom of the plot.
/// Fewer than two samples have no area.
pub fn build_area_path(series: &Series, scale: &Scale) -> PathSpec {
    if series.len() < 2 {
        return PathSpec::empty();
    }
    let baseline = scale.drawable_height;
    let line = build_line_path(series, scale);
    let last_x = line.vertices.last().map_or(0.0, |p| p.x);

    let mut vertices = Vec::with_capacity(line.len() + 2);
    vertices.push(Point::new(0.0, baseline));
    vertices.extend(line.vertices);
    vertices.push(Point::new(last_x, baseline));
    PathSpec { vertices, closed: true }
}

/// Plotted point with a visible radius and a (possibly larger) hit radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub id: SampleId,
    pub index: usize,
    pub center: Point,
    pub radius: f64,
    pub hit_radius: f64,
}

impl Marker {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_to(p) <= self.hit_radius
    }
}

pub fn build_markers(series: &Series, scale: &Scale, radius: f64, hit_radius: f64) -> Vec<Marker> {
    let hit_radius = hit_radius.max(radius);
    series
        .iter()
        .enumerate()
        .map(|(index, s)| Marker {
            id: s.id(),
            index,
            center: scale.point(index, s.value),
            radius,
            hit_radius,
        })
        .collect()
}
