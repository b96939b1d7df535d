// File: crates/chroma-view/src/paint.rs
// Summary: Paint handles passed to the canvas with every draw call.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Stroke/fill tool for lines and markers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
}

impl Paint {
    pub const fn new(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

/// Tool for label text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextPaint {
    pub color: Color,
    pub size: f32,
}

impl TextPaint {
    pub const fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }
}
