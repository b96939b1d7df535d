// File: crates/chroma-demo/src/main.rs
// Summary: Demo loads a one-column sample CSV (plus optional JSON style) and renders a PNG.

use anyhow::{Context, Result};
use chroma_render_skia::{render_to_png, RenderOptions};
use chroma_view::{ChartStyle, ChartView};
use std::path::{Path, PathBuf};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let csv_arg = args.next().unwrap_or_else(|| "samples.csv".to_string());
    let style_arg = args.next();

    let csv_path = Path::new(&csv_arg);
    let samples = load_samples_csv(csv_path)
        .with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    info!(count = samples.len(), "loaded samples");
    if samples.is_empty() {
        anyhow::bail!("no samples loaded — check headers/delimiter.");
    }

    let mut view = match &style_arg {
        Some(p) => ChartView::with_style(
            load_style(Path::new(p)).with_context(|| format!("failed to load style '{p}'"))?,
        ),
        None => ChartView::new(),
    };

    // Scale the ceiling to the data so the tallest sample touches the top edge
    let data_max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if style_arg.is_none() && data_max > 0.0 {
        view.set_max_value(data_max.ceil());
    }
    view.set_data(samples);

    let out = out_name(csv_path);
    render_to_png(&view, &RenderOptions::default(), &out).context("render png")?;
    info!(path = %out.display(), "wrote chart");
    Ok(())
}

fn load_style(path: &Path) -> Result<ChartStyle> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load Y samples from a headered CSV, reading the `value` column (falling
/// back to the first column when no recognized header is present).
fn load_samples_csv(path: &Path) -> Result<Vec<f32>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };
    let i_value = idx(&["value", "y", "sample"]).unwrap_or(0);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(v) = rec.get(i_value).and_then(|s| s.trim().parse::<f32>().ok()) {
            out.push(v);
        }
    }
    Ok(out)
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{stem}.png"));
    out
}
