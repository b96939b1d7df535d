// File: crates/chroma-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chroma_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};
use chroma_view::ChartView;

#[test]
fn render_smoke_png() {
    let mut view = ChartView::new();
    view.set_data(vec![0.0, 40.0, 20.0, 70.0, 50.0]);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    render_to_png(&view, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&view, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
