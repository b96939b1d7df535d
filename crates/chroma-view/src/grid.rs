// File: crates/chroma-view/src/grid.rs
// Summary: Horizontal grid-line layout and label values.

use crate::geometry::PlotRect;

/// One horizontal grid boundary: its pixel Y and its display label.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f32,
    pub label: String,
}

/// Label value for boundary `index` (1-based): `(max_value / steps) * index`,
/// rounded to the nearest integer for display.
pub fn label_value(max_value: f32, steps: u32, index: u32) -> i64 {
    ((max_value / steps as f32) * index as f32).round() as i64
}

/// Divide the plot's vertical extent into `steps` equal intervals and return
/// one line per boundary, bottom to top. `steps` is floored to 1.
pub fn horizontal_lines(rect: &PlotRect, steps: u32, max_value: f32) -> Vec<GridLine> {
    let steps = steps.max(1);
    let step_y = rect.height() / steps as f32;
    (1..=steps)
        .map(|i| GridLine {
            y: rect.bottom - i as f32 * step_y,
            label: label_value(max_value, steps, i).to_string(),
        })
        .collect()
}
