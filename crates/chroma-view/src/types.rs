// File: crates/chroma-view/src/types.rs
// Summary: Shared value types (colors, pixel points).

use serde::{Deserialize, Serialize};

/// 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from RGB components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const DARK_GRAY: Self = Self::from_rgb(0x44, 0x44, 0x44);
    pub const LIGHT_GRAY: Self = Self::from_rgb(0xcc, 0xcc, 0xcc);
    pub const WHITE: Self = Self::from_rgb(0xff, 0xff, 0xff);
    pub const RED: Self = Self::from_rgb(0xff, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 0xff, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 0xff);
}

/// Point in surface pixel coordinates (origin top-left, Y growing downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
