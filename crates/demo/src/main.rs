// File: crates/demo/src/main.rs
// Summary: Demo loads a timestamp/value CSV, replays it as live ticks through the chart
// controller, and renders loading, hover, and final frames to PNGs.

use anyhow::{Context, Result};
use chart_core::format::{grouped_dollars, signed_percent};
use chart_core::{AppendOutcome, ChartConfig, ChartController, RenderModel, Sample};
use chart_render_skia::{render_to_png, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    // Args: <csv> [config.json]
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/demo/data/btc_usd_hourly.csv".to_string());
    let path = PathBuf::from(&raw);
    let cfg = match std::env::args().nth(2) {
        Some(cfg_path) => load_config(Path::new(&cfg_path))?,
        None => ChartConfig::default(),
    };
    info!(input = %path.display(), variant = ?cfg.variant, capacity = cfg.capacity, "starting demo");

    let samples = load_samples_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!("Loaded {} samples", samples.len());

    let mut ctl = ChartController::new(cfg.clone()).context("invalid chart config")?;
    let opts = RenderOptions::from_config(&cfg);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");

    write_frame(&ctl.render_model(), &opts, stem, "loading")?;

    // Initial window, then the rest arrives as ticks.
    let split = samples.len().min(cfg.capacity);
    let (initial, ticks) = samples.split_at(split);
    let outcome = ctl.replace(initial.iter().copied());
    info!(accepted = outcome.accepted, rejected = outcome.rejected, "initial window delivered");
    write_frame(&ctl.render_model(), &opts, stem, "initial")?;

    let mut evicted = 0usize;
    for s in ticks {
        match ctl.append(*s) {
            AppendOutcome::Appended { evicted: gone } => evicted += gone.len(),
            AppendOutcome::Rejected(reason) => warn!(%reason, "tick dropped"),
        }
    }
    debug!(ticks = ticks.len(), evicted, "live ticks applied");

    // Hover the middle of the plot, as a pointer would.
    let vp = ctl.viewport();
    let (surface_w, surface_h) = vp.surface_size();
    let pointer = vp.to_drawable(surface_w / 2.0, surface_h / 2.0);
    let hover = ctl.on_pointer_move(pointer.x);
    if let Some(t) = hover.target() {
        let when = cfg.time_format.format(t.sample.timestamp).unwrap_or_default();
        info!(index = t.index, at = %when, value = %cfg.label_format.format(t.sample.value), "hovering");
    }
    write_frame(&ctl.render_model(), &opts, stem, "hover")?;

    ctl.on_pointer_leave();
    let model = ctl.render_model();
    if let Some(ready) = model.as_ready() {
        let s = &ready.summary;
        println!(
            "{} samples, last {} ({}), trend {}",
            s.count,
            grouped_dollars(s.last_value),
            signed_percent(s.change_percent),
            ready.trend.as_str()
        );
        println!("line: {}", ready.line_path.to_svg_path_data());
    }
    write_frame(&model, &opts, stem, "final")?;
    ctl.unmount();
    Ok(())
}

fn write_frame(model: &RenderModel, opts: &RenderOptions, stem: &str, suffix: &str) -> Result<()> {
    let out = out_name_with(stem, suffix);
    render_to_png(model, opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("chart_{}.png", suffix));
    } else {
        out.push(format!("chart_{}_{}.png", short, suffix));
    }
    out
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: ChartConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

/// Load a timestamp/value CSV. Recognized headers are case-insensitive; an
/// optional `change` column feeds the portfolio tooltip.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let i_time = idx(&["timestamp", "time", "date", "open_time", "datetime"])
        .context("no timestamp column")?;
    let i_value = idx(&["value", "price", "close", "c"]).context("no value column")?;
    let i_change = idx(&["change", "change_percent"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::trim);
        let (Some(t), Some(v)) = (field(i_time).and_then(parse_time_to_ms), field(i_value).and_then(|s| s.parse::<f64>().ok()))
        else {
            warn!(row, "skipping unparsable row");
            continue;
        };
        let sample = match i_change.and_then(field).and_then(|s| s.parse::<f64>().ok()) {
            Some(c) => Sample::with_change(t, v, c),
            None => Sample::new(t, v),
        };
        out.push(sample);
    }
    Ok(out)
}

/// Epoch seconds or millis -> millis.
fn parse_time_to_ms(s: &str) -> Option<i64> {
    let n = s.parse::<i64>().ok()?;
    if n.abs() < 10_i64.pow(11) { Some(n * 1000) } else { Some(n) }
}

