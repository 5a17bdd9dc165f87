//! Retained canvas content: placed images and stroke paths.

use crate::shapes::{PlacedImage, StrokePath};
use kurbo::{Point, Size};

/// Everything drawn on the surface, plus the surface size.
///
/// The raster itself is disposable; a full redraw reproduces it from here.
/// Insertion order is z-order within each list, and an image's index is its
/// selection key.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Placed images, back to front.
    images: Vec<PlacedImage>,
    /// Stroke paths, oldest first.
    paths: Vec<StrokePath>,
    /// Surface size in pixels.
    size: Size,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl Canvas {
    /// Create an empty canvas of the given surface size.
    pub fn new(size: Size) -> Self {
        Self {
            images: Vec::new(),
            paths: Vec::new(),
            size,
        }
    }

    /// Surface size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Set the surface size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn images(&self) -> &[PlacedImage] {
        &self.images
    }

    pub fn paths(&self) -> &[StrokePath] {
        &self.paths
    }

    pub fn image(&self, index: usize) -> Option<&PlacedImage> {
        self.images.get(index)
    }

    pub fn image_mut(&mut self, index: usize) -> Option<&mut PlacedImage> {
        self.images.get_mut(index)
    }

    /// Add an image on top. Returns its index.
    pub fn add_image(&mut self, image: PlacedImage) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// Start tracking a new stroke path.
    pub fn add_path(&mut self, path: StrokePath) {
        self.paths.push(path);
    }

    /// The most recent stroke path.
    pub fn last_path(&self) -> Option<&StrokePath> {
        self.paths.last()
    }

    pub fn last_path_mut(&mut self) -> Option<&mut StrokePath> {
        self.paths.last_mut()
    }

    /// Topmost image under `point`, if any.
    pub fn image_at(&self, point: Point) -> Option<usize> {
        self.images.iter().rposition(|image| image.hit_test(point))
    }

    /// Remove all images and paths.
    pub fn clear(&mut self) {
        self.images.clear();
        self.paths.clear();
    }
}
