// File: crates/chroma-view/src/canvas.rs
// Summary: Drawing surface contract plus a recording implementation for tests and diffing.

use crate::paint::{Paint, TextPaint};
use crate::types::Point;

/// The 2D vector-drawing contract a host surface provides to the widget.
///
/// The widget only ever needs stroked lines, filled circles, and label text;
/// a backend adapts these three calls onto its native canvas.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);
    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint);
    fn draw_text(&mut self, text: &str, origin: Point, paint: &TextPaint);
}

/// One recorded paint call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Text {
        content: String,
        origin: Point,
        paint: TextPaint,
    },
}

/// A `Canvas` that captures draw calls as `DrawCommand`s instead of rasterizing.
///
/// Useful for asserting what a render pass painted, and for hosts that want
/// to diff or serialize a frame.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &TextPaint) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            origin,
            paint: *paint,
        });
    }
}
