// File: crates/chroma-view/src/style.rs
// Summary: Flat style configuration for the chart widget.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Styling state read during rendering.
///
/// All fields are independently settable through the widget; `Default` gives
/// the stock look (black axes, light-gray grid, blue line, red markers).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub axis_color: Color,
    pub grid_color: Color,
    pub line_color: Color,
    pub point_color: Color,
    pub text_color: Color,
    /// Margin between the surface edge and the plot rectangle, in pixels.
    pub padding: f32,
    /// Number of horizontal grid divisions. Floored to 1 by the setter.
    pub grid_step: u32,
    /// Normalization ceiling for sample values. Floored to a small positive
    /// epsilon by the setter.
    pub max_value: f32,
    pub axis_stroke: f32,
    pub grid_stroke: f32,
    pub line_stroke: f32,
    pub text_size: f32,
    pub marker_radius: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            grid_color: Color::LIGHT_GRAY,
            line_color: Color::BLUE,
            point_color: Color::RED,
            text_color: Color::DARK_GRAY,
            padding: 80.0,
            grid_step: 5,
            max_value: 100.0,
            axis_stroke: 3.0,
            grid_stroke: 1.0,
            line_stroke: 4.0,
            text_size: 28.0,
            marker_radius: 6.0,
        }
    }
}
