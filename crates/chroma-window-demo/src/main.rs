// File: crates/chroma-window-demo/src/main.rs
// Summary: Windowed host for the chart widget: mutators mark the view dirty, the
// event loop coalesces that into request_redraw, and RedrawRequested blits via softbuffer.

use anyhow::{Context, Result};
use chroma_render_skia::{render_to_rgba8, RenderOptions};
use chroma_view::{ChartView, Color};
use std::num::NonZeroU32;
use std::path::Path;
use tracing::info;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const LINE_PALETTE: [Color; 4] = [
    Color::BLUE,
    Color::from_rgb(40, 200, 120),
    Color::from_rgb(255, 160, 40),
    Color::from_rgb(220, 80, 200),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // Arg: optional CSV of samples; falls back to generated datasets
    let datasets = match std::env::args().nth(1) {
        Some(path) => {
            let samples = load_samples_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?;
            info!(count = samples.len(), "loaded samples");
            build_datasets(Some(samples))
        }
        None => build_datasets(None),
    };

    let mut view = ChartView::new();
    apply_dataset(&mut view, &datasets[0]);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("ChromaForge — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut dataset_idx = 0usize;
    let mut color_idx = 0usize;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    // Surface geometry changed; repaint even without a mutation
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::Space) => {
                            dataset_idx = (dataset_idx + 1) % datasets.len();
                            apply_dataset(&mut view, &datasets[dataset_idx]);
                        }
                        Some(VirtualKeyCode::C) => {
                            color_idx = (color_idx + 1) % LINE_PALETTE.len();
                            view.set_line_color(LINE_PALETTE[color_idx]);
                        }
                        Some(VirtualKeyCode::G) => {
                            let step = view.style().grid_step % 10 + 1;
                            view.set_grid_step(step);
                        }
                        Some(VirtualKeyCode::Escape) => {
                            *cf = ControlFlow::Exit;
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // Coalesce any number of mutations into a single repaint
                if view.take_redraw_request() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = blit(&mut surface, &view, size) {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn blit(
    surface: &mut softbuffer::Surface,
    view: &ChartView,
    size: winit::dpi::PhysicalSize<u32>,
) -> Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .map_err(|e| anyhow::anyhow!("surface resize: {e}"))?;

    let opts = RenderOptions {
        width: w as i32,
        height: h as i32,
        background: Color::WHITE,
    };
    let (rgba, ..) = render_to_rgba8(view, &opts).context("render rgba")?;

    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let a = px[3] as u32;
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }
    frame
        .present()
        .map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

struct Dataset {
    name: &'static str,
    samples: Vec<f32>,
    max_value: f32,
}

fn apply_dataset(view: &mut ChartView, dataset: &Dataset) {
    info!(name = dataset.name, count = dataset.samples.len(), "showing dataset");
    view.set_max_value(dataset.max_value);
    view.set_data(dataset.samples.clone());
}

fn build_datasets(loaded: Option<Vec<f32>>) -> Vec<Dataset> {
    let mut out = Vec::new();
    if let Some(samples) = loaded {
        let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        out.push(Dataset {
            name: "csv",
            max_value: if max > 0.0 { max.ceil() } else { 100.0 },
            samples,
        });
    }
    out.push(Dataset {
        name: "sine",
        samples: (0..48)
            .map(|i| ((i as f32 * 0.3).sin() * 0.5 + 0.5) * 100.0)
            .collect(),
        max_value: 100.0,
    });
    out.push(Dataset {
        name: "ramp",
        samples: (0..16).map(|i| i as f32 * 6.25).collect(),
        max_value: 100.0,
    });
    out.push(Dataset {
        name: "sparse",
        samples: vec![10.0, 90.0, 35.0, 70.0],
        max_value: 100.0,
    });
    out
}

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
    let i_value = headers
        .iter()
        .position(|h| h == "value" || h == "y" || h == "sample")
        .unwrap_or(0);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(v) = rec.get(i_value).and_then(|s| s.trim().parse::<f32>().ok()) {
            out.push(v);
        }
    }
    Ok(out)
}
