//! Bitmap ingestion boundary.
//!
//! Decoding is a platform capability: the browser shell decodes through an
//! image element. The editor only needs a [`DecodedBitmap`] carrying the
//! intrinsic size.

use crate::error::{EditorError, EditorResult};
use crate::shapes::BitmapId;
use kurbo::Size;
use uuid::Uuid;

/// A successfully decoded bitmap, identified for the shell's bitmap cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedBitmap {
    pub id: BitmapId,
    pub width: u32,
    pub height: u32,
}

impl DecodedBitmap {
    /// Describe a freshly decoded bitmap under a new id.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    /// Reject bitmaps that cannot be placed.
    pub fn validate(&self) -> EditorResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EditorError::EmptyBitmap {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Whether a picker MIME type names an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Accept a picked file for decoding only when its MIME type names an image.
pub fn check_mime(mime: &str) -> EditorResult<()> {
    if is_image_mime(mime) {
        Ok(())
    } else {
        Err(EditorError::NotAnImage(mime.to_string()))
    }
}
