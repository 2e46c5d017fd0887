// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, independent of any graphics backend.

use serde::{Deserialize, Serialize};

use crate::path::Trend;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub plot_background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub crosshair: Rgba,
    pub trend_up: Rgba,
    pub trend_down: Rgba,
    pub area_fill: Rgba,
    pub placeholder: Rgba,
    /// Header and tooltip values.
    pub text: Rgba,
    pub tooltip_background: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 17, 24, 39),
            plot_background: Rgba::from_argb(255, 31, 41, 55),
            grid: Rgba::from_argb(26, 229, 231, 235),
            axis_label: Rgba::from_argb(153, 229, 231, 235),
            crosshair: Rgba::from_argb(77, 229, 231, 235),
            trend_up: Rgba::from_argb(255, 0x10, 0xB9, 0x81),
            trend_down: Rgba::from_argb(255, 0xEF, 0x44, 0x44),
            area_fill: Rgba::from_argb(77, 0x3B, 0x82, 0xF6),
            placeholder: Rgba::from_argb(255, 107, 114, 128),
            text: Rgba::rgb(243, 244, 246),
            tooltip_background: Rgba::rgb(55, 65, 81),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 255, 255, 255),
            plot_background: Rgba::from_argb(255, 249, 250, 251),
            grid: Rgba::from_argb(26, 17, 24, 39),
            axis_label: Rgba::from_argb(153, 17, 24, 39),
            crosshair: Rgba::from_argb(77, 17, 24, 39),
            trend_up: Rgba::from_argb(255, 0x10, 0xB9, 0x81),
            trend_down: Rgba::from_argb(255, 0xEF, 0x44, 0x44),
            area_fill: Rgba::from_argb(77, 0x3B, 0x82, 0xF6),
            placeholder: Rgba::from_argb(255, 107, 114, 128),
            text: Rgba::rgb(17, 24, 39),
            tooltip_background: Rgba::rgb(229, 231, 235),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::from_argb(255, 0x00, 0x00, 0x00),
            plot_background: Rgba::from_argb(255, 0x00, 0x00, 0x00),
            grid: Rgba::from_argb(255, 0x33, 0x33, 0x33),
            axis_label: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            crosshair: Rgba::from_argb(255, 0xff, 0xff, 0x00),
            trend_up: Rgba::from_argb(255, 0x00, 0xff, 0x00),
            trend_down: Rgba::from_argb(255, 0xff, 0x00, 0x00),
            area_fill: Rgba::from_argb(120, 0x00, 0xaa, 0xff),
            placeholder: Rgba::from_argb(255, 0xcc, 0xcc, 0xcc),
            text: Rgba::rgb(0xff, 0xff, 0xff),
            tooltip_background: Rgba::rgb(0x22, 0x22, 0x22),
        }
    }

    /// Stroke/marker color for the window's trend.
    pub fn trend_color(&self, trend: Trend) -> Rgba {
        match trend {
            Trend::Up => self.trend_up,
            Trend::Down => self.trend_down,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
