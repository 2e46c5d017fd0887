// File: crates/chart-render-skia/tests/render.rs
// Purpose: Raster output shape, placeholder states, and a few known pixels.

use chart_core::{ChartConfig, ChartController, RenderModel, Sample, SampleId, Theme, Viewport};
use chart_render_skia::{
    render_to_png, render_to_png_bytes, render_to_rgba8, tooltip_left, RenderOptions, TOOLTIP_MIN_WIDTH,
    TOOLTIP_OFFSET, TOOLTIP_TOP,
};

fn price_model() -> (ChartController, RenderOptions) {
    let cfg = ChartConfig::price();
    let mut ctl = ChartController::new(cfg.clone()).expect("valid config");
    ctl.replace(vec![Sample::new(0, 100.0), Sample::new(1_000, 110.0), Sample::new(2_000, 90.0)]);
    let mut opts = RenderOptions::from_config(&cfg);
    opts.draw_labels = false; // avoid font variance
    (ctl, opts)
}

fn pixel(px: &[u8], row_bytes: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * row_bytes + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn surface_includes_padding() {
    let (ctl, opts) = price_model();
    let (px, w, h, stride) = render_to_rgba8(&ctl.render_model(), &opts).expect("rgba render");
    assert_eq!((w, h), (440, 300));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);

    let bg = Theme::dark().background;
    assert_eq!(pixel(&px, stride, 0, 0), [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn markers_use_trend_color() {
    let (ctl, opts) = price_model();
    let (px, _, _, stride) = render_to_rgba8(&ctl.render_model(), &opts).expect("rgba render");
    // vertex 1 sits at drawable (200, 0) -> surface (220, 20)
    let down = Theme::dark().trend_down;
    assert_eq!(pixel(&px, stride, 220, 20), [down.r, down.g, down.b, 255]);
}

#[test]
fn png_bytes_decode_to_surface_size() {
    let (mut ctl, opts) = price_model();
    ctl.on_pointer_enter(SampleId(1_000));
    let bytes = render_to_png_bytes(&ctl.render_model(), &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (440, 300));
}

#[test]
fn placeholders_render_without_geometry() {
    let opts = RenderOptions::from_config(&ChartConfig::portfolio());
    let viewport = Viewport::new(600.0, 300.0, 40.0);
    for model in [RenderModel::Loading { viewport }, RenderModel::Empty { viewport }] {
        let (px, w, h, _) = render_to_rgba8(&model, &opts).expect("placeholder render");
        assert_eq!((w, h), (680, 300));
        assert_eq!(px.len(), 680 * 300 * 4);
    }
}

#[test]
fn placeholder_uses_resized_viewport() {
    let cfg = ChartConfig::portfolio();
    let mut ctl = ChartController::new(cfg.clone()).expect("valid config");
    ctl.set_viewport(300.0, 200.0, 10.0);
    let opts = RenderOptions::from_config(&cfg);
    let (_, w, h, _) = render_to_rgba8(&ctl.render_model(), &opts).expect("placeholder render");
    assert_eq!((w, h), (320, 200));
}

#[test]
fn hovered_sample_gets_a_tooltip_box() {
    let (mut ctl, mut opts) = price_model();
    opts.draw_labels = true;
    let bg = opts.theme.tooltip_background;

    let (idle, _, _, stride) = render_to_rgba8(&ctl.render_model(), &opts).expect("idle render");
    ctl.on_pointer_enter(SampleId(1_000));
    let (hover, _, _, _) = render_to_rgba8(&ctl.render_model(), &opts).expect("hover render");

    // guide at drawable x = 200; box starts to its right, inside the 20px padding
    let x = (20.0 + 200.0 + TOOLTIP_OFFSET + 5.0) as usize;
    let y = (20.0 + TOOLTIP_TOP + 5.0) as usize;
    assert_eq!(pixel(&hover, stride, x, y), [bg.r, bg.g, bg.b, 255]);
    assert_ne!(pixel(&idle, stride, x, y), pixel(&hover, stride, x, y));
}

#[test]
fn tooltip_flips_left_at_the_right_edge() {
    assert_eq!(tooltip_left(200.0, TOOLTIP_MIN_WIDTH, 400.0), 200.0 + TOOLTIP_OFFSET);
    assert_eq!(tooltip_left(390.0, TOOLTIP_MIN_WIDTH, 400.0), 390.0 - TOOLTIP_OFFSET - TOOLTIP_MIN_WIDTH);
    assert_eq!(tooltip_left(50.0, 120.0, 100.0), 0.0);
}

#[test]
fn portfolio_area_and_file_output() {
    let cfg = ChartConfig::portfolio();
    let mut ctl = ChartController::new(cfg.clone()).expect("valid config");
    ctl.replace((0..20).map(|i| Sample::with_change(i * 86_400_000, 120_000.0 + (i as f64 * 0.7).sin() * 4_000.0, 0.5)));
    ctl.on_pointer_move(310.0);

    let opts = RenderOptions::from_config(&cfg);
    let out = std::path::PathBuf::from("target/test_out/portfolio.png");
    render_to_png(&ctl.render_model(), &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
