// File: crates/chroma-render-skia/src/lib.rs
// Summary: Skia-backed canvas plus headless PNG/RGBA rendering over a CPU raster surface.

pub mod text;

use skia_safe as skia;
use thiserror::Error;

use chroma_view::{Canvas, ChartView, Color, Paint, Point, TextPaint};
use text::TextShaper;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("PNG encoding failed")]
    Encode,
    #[error("pixel read-back failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            background: Color::from_argb(255, 18, 18, 20), // near-black
        }
    }
}

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

/// Adapts a Skia canvas (plus a text shaper for labels) to the widget's
/// drawing contract. Strokes are anti-aliased.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }
}

impl Canvas for SkiaCanvas<'_> {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(paint.stroke_width);
        p.set_color(to_skia(paint.color));
        self.canvas
            .draw_line((from.x, from.y), (to.x, to.y), &p);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(to_skia(paint.color));
        self.canvas.draw_circle((center.x, center.y), radius, &p);
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &TextPaint) {
        self.shaper.draw_left(
            self.canvas,
            text,
            origin.x,
            origin.y,
            paint.size,
            to_skia(paint.color),
        );
    }
}

fn paint_surface(view: &ChartView, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(
        RenderError::Surface {
            width: opts.width,
            height: opts.height,
        },
    )?;
    let canvas = surface.canvas();
    canvas.clear(to_skia(opts.background));

    let shaper = TextShaper::new();
    let mut target = SkiaCanvas::new(canvas, &shaper);
    view.paint(&mut target, opts.width as f32, opts.height as f32);
    Ok(surface)
}

/// Render the widget to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(view: &ChartView, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = paint_surface(view, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render the widget to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    view: &ChartView,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<(), RenderError> {
    let bytes = render_to_png_bytes(view, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render the widget to a tightly packed RGBA8 buffer.
///
/// Returns `(pixels, width, height, row_stride_bytes)`.
pub fn render_to_rgba8(
    view: &ChartView,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
    let mut surface = paint_surface(view, opts)?;
    let image = surface.image_snapshot();

    let row_bytes = opts.width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * opts.height as usize];
    let dst_info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    if !image.read_pixels(
        &dst_info,
        &mut pixels,
        row_bytes,
        (0, 0),
        skia::image::CachingHint::Disallow,
    ) {
        return Err(RenderError::ReadPixels);
    }
    Ok((pixels, opts.width, opts.height, row_bytes))
}
