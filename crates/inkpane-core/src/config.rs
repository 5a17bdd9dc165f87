//! Editor configuration.

use crate::error::EditorResult;
use crate::selection::{HANDLE_SIZE, MIN_IMAGE_WIDTH};
use crate::shapes::RgbaColor;
use serde::{Deserialize, Serialize};

/// Tunables for placement, handles, highlight and brush defaults.
///
/// Every field has a default, so a JSON config only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Fraction of the smaller surface dimension a new image is scaled to.
    pub placement_fraction: f64,
    /// Minimum image width while resizing.
    pub min_image_width: f64,
    /// Side of the square hit area around each resize handle.
    pub handle_size: f64,
    /// Outline color of the selected image.
    pub highlight_color: RgbaColor,
    /// Outline width of the selected image.
    pub highlight_width: f64,
    /// Initial brush color.
    pub brush_color: RgbaColor,
    /// Initial brush size.
    pub brush_size: u32,
    /// Smallest selectable brush size.
    pub brush_size_min: u32,
    /// Largest selectable brush size.
    pub brush_size_max: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placement_fraction: 0.7,
            min_image_width: MIN_IMAGE_WIDTH,
            handle_size: HANDLE_SIZE,
            highlight_color: RgbaColor::new(0x00, 0x74, 0xcc, 255),
            highlight_width: 2.0,
            brush_color: RgbaColor::black(),
            brush_size: 5,
            brush_size_min: 1,
            brush_size_max: 50,
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON, filling missing keys with defaults.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}
