// File: crates/chroma-view/src/lib.rs
// Summary: Core library entry point; exports the widget, canvas contract, and helpers.

pub mod canvas;
pub mod geometry;
pub mod grid;
pub mod paint;
pub mod style;
pub mod types;
pub mod view;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use geometry::PlotRect;
pub use paint::{Paint, TextPaint};
pub use style::ChartStyle;
pub use types::{Color, Point};
pub use view::ChartView;
