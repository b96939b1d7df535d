// File: crates/chroma-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chroma_render_skia::{render_to_rgba8, RenderOptions};
use chroma_view::{ChartView, Color};

#[test]
fn render_rgba8_buffer() {
    let mut view = ChartView::new();
    view.set_data(vec![0.0, 100.0]);

    let opts = RenderOptions::default();
    let (px, w, h, stride) = render_to_rgba8(&view, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Background alpha in the top-left pixel (RGBA)
    assert_eq!(px[3], 255);
    // Top-left corner lies outside the plot rect, so it keeps the background color
    let bg = opts.background;
    assert_eq!((px[0], px[1], px[2]), (bg.r, bg.g, bg.b));
}

#[test]
fn background_color_is_honored() {
    let view = ChartView::new();
    let opts = RenderOptions {
        width: 64,
        height: 64,
        background: Color::from_rgb(10, 200, 30),
    };
    let (px, ..) = render_to_rgba8(&view, &opts).expect("rgba render");
    assert_eq!((px[0], px[1], px[2]), (10, 200, 30));
}
