// File: crates/chroma-view/src/view.rs
// Summary: The chart widget: styling state, sample sequence, invalidation, and the render pass.

use crate::canvas::Canvas;
use crate::geometry::PlotRect;
use crate::grid;
use crate::paint::{Paint, TextPaint};
use crate::style::ChartStyle;
use crate::types::{Color, Point};

/// Smallest normalization ceiling the widget will accept; keeps the
/// value-to-pixel division finite.
const MIN_MAX_VALUE: f32 = 1e-6;

/// X position of grid labels, measured from the surface's left edge.
const LABEL_X: f32 = 10.0;
/// Baseline nudge so a label sits visually on its grid line.
const LABEL_BASELINE_OFFSET: f32 = 10.0;

/// A line-chart widget.
///
/// Owns a sequence of Y samples (implicit evenly spaced X) and flat styling
/// state. Mutators update state and request a repaint from the host; the host
/// later calls [`ChartView::paint`] with its current surface size. The widget
/// holds one paint handle per chart part, and color setters retarget the
/// matching handle immediately rather than at paint time.
///
/// Not thread-safe by design: live on the host's UI thread.
pub struct ChartView {
    data: Vec<f32>,
    style: ChartStyle,
    axis_paint: Paint,
    grid_paint: Paint,
    line_paint: Paint,
    point_paint: Paint,
    text_paint: TextPaint,
    dirty: bool,
}

impl ChartView {
    pub fn new() -> Self {
        Self::with_style(ChartStyle::default())
    }

    /// Construct with an explicit style. Degenerate `max_value`/`grid_step`
    /// are clamped the same way the setters clamp them.
    pub fn with_style(mut style: ChartStyle) -> Self {
        style.max_value = style.max_value.max(MIN_MAX_VALUE);
        style.grid_step = style.grid_step.max(1);
        Self {
            data: Vec::new(),
            axis_paint: Paint::new(style.axis_color, style.axis_stroke),
            grid_paint: Paint::new(style.grid_color, style.grid_stroke),
            line_paint: Paint::new(style.line_color, style.line_stroke),
            point_paint: Paint::new(style.point_color, 0.0),
            text_paint: TextPaint::new(style.text_color, style.text_size),
            style,
            dirty: true,
        }
    }

    // ---- mutators ----------------------------------------------------------

    /// Replace the sample sequence wholesale. Any length is accepted; with
    /// fewer than two samples the render pass draws axes and grid only.
    pub fn set_data(&mut self, samples: Vec<f32>) {
        self.data = samples;
        self.invalidate();
    }

    /// Replace the normalization ceiling. Non-positive values are clamped to
    /// a small positive epsilon.
    pub fn set_max_value(&mut self, max_value: f32) {
        self.style.max_value = max_value.max(MIN_MAX_VALUE);
        self.invalidate();
    }

    /// Replace the number of horizontal grid divisions. Zero is clamped to 1.
    pub fn set_grid_step(&mut self, step: u32) {
        self.style.grid_step = step.max(1);
        self.invalidate();
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.style.line_color = color;
        self.line_paint.color = color;
        self.invalidate();
    }

    pub fn set_point_color(&mut self, color: Color) {
        self.style.point_color = color;
        self.point_paint.color = color;
        self.invalidate();
    }

    pub fn set_axis_color(&mut self, color: Color) {
        self.style.axis_color = color;
        self.axis_paint.color = color;
        self.invalidate();
    }

    pub fn set_grid_color(&mut self, color: Color) {
        self.style.grid_color = color;
        self.grid_paint.color = color;
        self.invalidate();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.text_paint.color = color;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.style.padding = padding.max(0.0);
        self.invalidate();
    }

    // ---- invalidation ------------------------------------------------------

    fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Return and clear the pending repaint request. Any number of mutations
    /// since the last call coalesce into a single `true`.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ---- accessors ---------------------------------------------------------

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn axis_paint(&self) -> &Paint {
        &self.axis_paint
    }

    pub fn grid_paint(&self) -> &Paint {
        &self.grid_paint
    }

    pub fn line_paint(&self) -> &Paint {
        &self.line_paint
    }

    pub fn point_paint(&self) -> &Paint {
        &self.point_paint
    }

    pub fn text_paint(&self) -> &TextPaint {
        &self.text_paint
    }

    // ---- render pass -------------------------------------------------------

    /// Paint the chart into `canvas` at the surface's current size.
    ///
    /// Pure function of current state and `width`/`height`; invoked by the
    /// host whenever it decides a repaint is due.
    pub fn paint(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let rect = PlotRect::inset(width, height, self.style.padding);

        // X and Y axes along the bottom and left edges
        canvas.draw_line(
            rect.origin(),
            Point::new(rect.right, rect.bottom),
            &self.axis_paint,
        );
        canvas.draw_line(
            rect.origin(),
            Point::new(rect.left, rect.top),
            &self.axis_paint,
        );

        // Horizontal grid + Y labels
        for line in grid::horizontal_lines(&rect, self.style.grid_step, self.style.max_value) {
            canvas.draw_line(
                Point::new(rect.left, line.y),
                Point::new(rect.right, line.y),
                &self.grid_paint,
            );
            canvas.draw_text(
                &line.label,
                Point::new(LABEL_X, line.y + LABEL_BASELINE_OFFSET),
                &self.text_paint,
            );
        }

        // With fewer than two samples there is no data layer to draw
        if self.data.len() < 2 {
            return;
        }

        let n = self.data.len();
        let max = self.style.max_value;
        for i in 0..n - 1 {
            let p1 = Point::new(rect.sample_x(i, n), rect.value_y(self.data[i], max));
            let p2 = Point::new(rect.sample_x(i + 1, n), rect.value_y(self.data[i + 1], max));
            canvas.draw_line(p1, p2, &self.line_paint);
            canvas.fill_circle(p1, self.style.marker_radius, &self.point_paint);
        }

        // Last sample is never a pair's first element; mark it here
        let last = Point::new(
            rect.sample_x(n - 1, n),
            rect.value_y(self.data[n - 1], max),
        );
        canvas.fill_circle(last, self.style.marker_radius, &self.point_paint);
    }
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}
