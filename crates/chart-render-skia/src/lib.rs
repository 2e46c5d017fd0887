// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless raster painter for engine render models using Skia CPU surfaces.
// Notes:
// - Pure view layer: it reads a `RenderModel` and never touches the controller.
// - PNG encoding goes through the `image` crate after an RGBA8 readback.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::trace;

use chart_core::theme;
use chart_core::{
    ChartConfig, Crosshair, HeaderText, LabelFormat, ReadyModel, RenderModel, Rgba, Theme, TimeFormat, TimeRange,
    TooltipText,
};

/// Smallest tooltip box width in pixels.
pub const TOOLTIP_MIN_WIDTH: f32 = 96.0;
/// Gap between the hover guide and the tooltip box.
pub const TOOLTIP_OFFSET: f32 = 12.0;
/// Tooltip box top, in drawable space.
pub const TOOLTIP_TOP: f32 = 8.0;

const LINE_HEIGHT: f32 = 16.0;
const TOOLTIP_INSET: f32 = 8.0;

pub struct RenderOptions {
    pub theme: Theme,
    pub line_width: f32,
    pub show_grid: bool,
    /// Axis labels, header, tooltip and placeholder text.
    pub draw_labels: bool,
    pub label_format: LabelFormat,
    pub time_format: TimeFormat,
    pub time_range: Option<TimeRange>,
}

impl RenderOptions {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        Self {
            theme: theme::find(&cfg.theme),
            line_width: cfg.line_width as f32,
            show_grid: cfg.show_grid,
            draw_labels: true,
            label_format: cfg.label_format,
            time_format: cfg.time_format,
            time_range: cfg.time_range,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

/// RGBA8 pixels plus `(width, height, row_bytes)`.
pub type RgbaFrame = (Vec<u8>, u32, u32, usize);

/// Paint `model` and read the surface back as straight-alpha RGBA8.
pub fn render_to_rgba8(model: &RenderModel, opts: &RenderOptions) -> Result<RgbaFrame> {
    let (sw, sh) = model.viewport().surface_size();
    let w = (sw.ceil() as i32).max(1);
    let h = (sh.ceil() as i32).max(1);

    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(color(opts.theme.background));
        match model {
            RenderModel::Loading { .. } => draw_placeholder(canvas, w, h, "Loading chart data...", opts),
            RenderModel::Empty { .. } => draw_placeholder(canvas, w, h, "No data available", opts),
            RenderModel::Ready(m) => draw_ready(canvas, m, opts),
        }
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(anyhow!("pixel readback failed"));
    }
    trace!(w, h, state = ?model.state(), "frame rasterized");
    Ok((pixels, w as u32, h as u32, row_bytes))
}

pub fn render_to_png_bytes(model: &RenderModel, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (pixels, w, h, _) = render_to_rgba8(model, opts)?;
    let img = image::RgbaImage::from_raw(w, h, pixels)
        .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
    Ok(out.into_inner())
}

/// Render to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(model: &RenderModel, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(model, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

#[inline]
fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn label_font() -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(12.0);
    font
}

fn draw_placeholder(canvas: &skia::Canvas, w: i32, h: i32, text: &str, opts: &RenderOptions) {
    if !opts.draw_labels {
        return;
    }
    let paint = fill(opts.theme.placeholder);
    let mut font = skia::Font::default();
    font.set_size(14.0);
    let (text_w, _) = font.measure_str(text, Some(&paint));
    canvas.draw_str(text, ((w as f32 - text_w) * 0.5, h as f32 * 0.5), &font, &paint);
}

fn draw_ready(canvas: &skia::Canvas, m: &ReadyModel, opts: &RenderOptions) {
    let pad = m.viewport.padding_px as f32;
    let plot_w = m.scale.drawable_width as f32;
    let plot_h = m.scale.drawable_height as f32;
    let theme = &opts.theme;
    let trend = theme.trend_color(m.trend);

    canvas.save();
    canvas.translate((pad, pad));
    canvas.draw_rect(skia::Rect::from_xywh(0.0, 0.0, plot_w, plot_h), &fill(theme.plot_background));

    if opts.show_grid {
        draw_grid(canvas, m, plot_w, opts);
    }

    if let Some(area) = &m.area_path {
        if let Some(path) = to_sk_path(&area.vertices, area.closed) {
            canvas.draw_path(&path, &fill(theme.area_fill));
        }
    }

    if m.line_path.len() >= 2 {
        if let Some(path) = to_sk_path(&m.line_path.vertices, false) {
            let mut paint = stroke(trend, opts.line_width);
            paint.set_stroke_cap(skia::paint::Cap::Round);
            paint.set_stroke_join(skia::paint::Join::Round);
            canvas.draw_path(&path, &paint);
        }
    }

    if let Some(cross) = m.crosshair() {
        let mut paint = stroke(theme.crosshair, 1.0);
        paint.set_path_effect(skia::PathEffect::dash(&[5.0, 5.0], 0.0));
        canvas.draw_line((cross.x as f32, cross.top as f32), (cross.x as f32, cross.bottom as f32), &paint);
        let glow = fill(theme.area_fill.with_alpha(128));
        let r = m.markers.get(cross.target.index).map_or(4.0, |mk| mk.radius as f32);
        canvas.draw_circle((cross.point.x as f32, cross.point.y as f32), r * 2.0, &glow);
    }

    let dot = fill(trend);
    for marker in &m.markers {
        canvas.draw_circle((marker.center.x as f32, marker.center.y as f32), marker.radius as f32, &dot);
    }

    if opts.draw_labels {
        if let Some(cross) = m.crosshair() {
            draw_tooltip(canvas, &cross, plot_w, opts);
        }
    }
    canvas.restore();

    if opts.draw_labels {
        draw_header(canvas, m, pad, plot_w, opts);
    }
}

/// Current value and window change on the left of the top band, range caption on the right.
fn draw_header(canvas: &skia::Canvas, m: &ReadyModel, pad: f32, plot_w: f32, opts: &RenderOptions) {
    let header = HeaderText::new(&m.summary, opts.label_format, opts.time_range);
    let font = label_font();
    let baseline = (pad - 6.0).max(12.0);

    let value_paint = fill(opts.theme.text);
    let (value_w, _) = font.measure_str(&header.value, Some(&value_paint));
    canvas.draw_str(&header.value, (pad, baseline), &font, &value_paint);
    let change_paint = fill(opts.theme.trend_color(m.trend));
    canvas.draw_str(&header.change, (pad + value_w + 8.0, baseline), &font, &change_paint);

    if let Some(caption) = &header.caption {
        let paint = fill(opts.theme.axis_label);
        let (caption_w, _) = font.measure_str(caption, Some(&paint));
        canvas.draw_str(caption, (pad + plot_w - caption_w, baseline), &font, &paint);
    }
}

/// Boxed time/value/change next to the hover guide; flips left near the right edge.
fn draw_tooltip(canvas: &skia::Canvas, cross: &Crosshair, plot_w: f32, opts: &RenderOptions) {
    let sample = &cross.target.sample;
    let text = TooltipText::new(sample, opts.time_format, opts.label_format);
    let font = label_font();
    let text_paint = fill(opts.theme.text);

    let mut lines: Vec<(&str, skia::Paint)> = vec![
        (text.time.as_str(), fill(opts.theme.axis_label)),
        (text.value.as_str(), text_paint),
    ];
    if let Some(change) = &text.change {
        let up = sample.change_percent.is_some_and(|c| c >= 0.0);
        let color = if up { opts.theme.trend_up } else { opts.theme.trend_down };
        lines.push((change.as_str(), fill(color)));
    }

    let widest = lines
        .iter()
        .map(|(s, p)| font.measure_str(s, Some(p)).0)
        .fold(0.0f32, f32::max);
    let box_w = (widest + 2.0 * TOOLTIP_INSET).max(TOOLTIP_MIN_WIDTH);
    let box_h = lines.len() as f32 * LINE_HEIGHT + TOOLTIP_INSET;
    let x = tooltip_left(cross.x as f32, box_w, plot_w);

    let rect = skia::Rect::from_xywh(x, TOOLTIP_TOP, box_w, box_h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill(opts.theme.tooltip_background));
    for (i, (s, paint)) in lines.iter().enumerate() {
        let baseline = TOOLTIP_TOP + TOOLTIP_INSET / 2.0 + LINE_HEIGHT * (i as f32 + 1.0) - 4.0;
        canvas.draw_str(s, (x + TOOLTIP_INSET, baseline), &font, paint);
    }
}

/// Left edge of a `box_w` tooltip beside a guide at `guide_x`, kept inside `[0, plot_w]` when it fits.
pub fn tooltip_left(guide_x: f32, box_w: f32, plot_w: f32) -> f32 {
    let right = guide_x + TOOLTIP_OFFSET;
    if right + box_w <= plot_w {
        right
    } else {
        (guide_x - TOOLTIP_OFFSET - box_w).max(0.0)
    }
}

fn draw_grid(canvas: &skia::Canvas, m: &ReadyModel, plot_w: f32, opts: &RenderOptions) {
    let line = stroke(opts.theme.grid, 1.0);
    let text = fill(opts.theme.axis_label);
    let font = label_font();
    for g in &m.grid_lines {
        let y = g.y_pixel as f32;
        canvas.draw_line((0.0, y), (plot_w, y), &line);
        if opts.draw_labels {
            let label = opts.label_format.format(g.label_value);
            let (label_w, _) = font.measure_str(&label, Some(&text));
            // right-aligned just left of the plot
            canvas.draw_str(&label, (-5.0 - label_w, y + 4.0), &font, &text);
        }
    }
}

fn to_sk_path(vertices: &[chart_core::Point], closed: bool) -> Option<skia::Path> {
    let (first, rest) = vertices.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first.x as f32, first.y as f32));
    for p in rest {
        path.line_to((p.x as f32, p.y as f32));
    }
    if closed {
        path.close();
    }
    Some(path)
}
