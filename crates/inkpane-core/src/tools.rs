//! Editing modes and brush settings.

use crate::error::EditorResult;
use crate::shapes::RgbaColor;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Top-level input interpretation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Select, drag and resize images.
    #[default]
    Move,
    /// Freehand drawing.
    Draw,
}

impl Mode {
    /// Get display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Move => "move",
            Mode::Draw => "draw",
        }
    }
}

/// Color and width applied to new strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSettings {
    color: RgbaColor,
    size: u32,
    range: RangeInclusive<u32>,
}

impl BrushSettings {
    /// Create brush settings; `size` is clamped into `range`.
    pub fn new(color: RgbaColor, size: u32, range: RangeInclusive<u32>) -> Self {
        let size = size.clamp(*range.start(), *range.end());
        Self { color, size, range }
    }

    pub fn color(&self) -> RgbaColor {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Smallest and largest selectable size, for the size slider.
    pub fn size_range(&self) -> (u32, u32) {
        (*self.range.start(), *self.range.end())
    }

    /// Stroke width in canvas pixels.
    pub fn width(&self) -> f64 {
        self.size as f64
    }

    /// Set the brush size, clamped to the slider range. Returns the applied size.
    pub fn set_size(&mut self, size: u32) -> u32 {
        self.size = size.clamp(*self.range.start(), *self.range.end());
        self.size
    }

    /// Set the color from a CSS hex string. Leaves the color unchanged on error.
    pub fn set_color_hex(&mut self, hex: &str) -> EditorResult<()> {
        self.color = RgbaColor::from_hex(hex)?;
        Ok(())
    }
}
