//! Floating color image quantity.

use glam::{Vec3, Vec4};
use vizbridge_core::error::{Result, VizError};
use vizbridge_core::quantity::{Quantity, QuantityKind};

use super::ImageOrigin;

/// A floating color image quantity (not attached to any structure).
///
/// Displays a 2D grid of RGBA colors directly. Opaque RGB data is stored with
/// alpha 1.
#[derive(Debug, Clone)]
pub struct FloatingColorImage {
    name: String,
    width: u32,
    height: u32,
    colors: Vec<Vec4>,
    origin: ImageOrigin,
    enabled: bool,
    is_premultiplied: bool,
    show_fullscreen: bool,
    transparency: f32,
}

impl FloatingColorImage {
    /// Creates a new floating color image from opaque row-major RGB colors.
    pub fn new(name: impl Into<String>, width: u32, height: u32, colors: Vec<Vec3>) -> Result<Self> {
        let colors = colors.into_iter().map(|c| c.extend(1.0)).collect();
        Self::with_alpha(name, width, height, colors)
    }

    /// Creates a new floating color image from row-major RGBA colors.
    pub fn with_alpha(
        name: impl Into<String>,
        width: u32,
        height: u32,
        colors: Vec<Vec4>,
    ) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if colors.len() != expected {
            return Err(VizError::SizeMismatch {
                expected,
                actual: colors.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            width,
            height,
            colors,
            origin: ImageOrigin::default(),
            enabled: true,
            is_premultiplied: false,
            show_fullscreen: false,
            transparency: 1.0,
        })
    }

    /// Returns the image width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel colors (RGBA).
    #[must_use]
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Gets the image origin.
    #[must_use]
    pub fn origin(&self) -> ImageOrigin {
        self.origin
    }

    /// Sets the image origin.
    pub fn set_origin(&mut self, origin: ImageOrigin) -> &mut Self {
        self.origin = origin;
        self
    }

    /// Whether the color data has premultiplied alpha.
    #[must_use]
    pub fn is_premultiplied(&self) -> bool {
        self.is_premultiplied
    }

    /// Marks the color data as premultiplied (or not).
    pub fn set_is_premultiplied(&mut self, premultiplied: bool) -> &mut Self {
        self.is_premultiplied = premultiplied;
        self
    }

    /// Whether the image composites over the whole viewport instead of a
    /// panel.
    #[must_use]
    pub fn show_fullscreen(&self) -> bool {
        self.show_fullscreen
    }

    /// Sets fullscreen compositing.
    pub fn set_show_fullscreen(&mut self, fullscreen: bool) -> &mut Self {
        self.show_fullscreen = fullscreen;
        self
    }

    /// Gets the overlay transparency in `[0, 1]`.
    #[must_use]
    pub fn transparency(&self) -> f32 {
        self.transparency
    }

    /// Sets the overlay transparency, clamped to `[0, 1]`.
    pub fn set_transparency(&mut self, transparency: f32) -> &mut Self {
        self.transparency = transparency.clamp(0.0, 1.0);
        self
    }

    /// Returns the pixel color at `(x, y)`, accounting for image origin.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Vec4 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let row = self.origin.storage_row(y, self.height);
        self.colors[(row * self.width + x) as usize]
    }
}

impl Quantity for FloatingColorImage {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
    fn name(&self) -> &str {
        &self.name
    }
    #[allow(clippy::unnecessary_literal_bound)]
    fn structure_name(&self) -> &str {
        "" // No parent structure
    }
    fn kind(&self) -> QuantityKind {
        QuantityKind::Color
    }
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    fn refresh(&mut self) {}
    fn data_size(&self) -> usize {
        self.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_creation() {
        let colors = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        let img = FloatingColorImage::new("test", 2, 2, colors).unwrap();

        assert_eq!(img.name(), "test");
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.data_size(), 4);
        assert_eq!(img.kind(), QuantityKind::Color);
        assert!(!img.is_premultiplied());
        // RGB constructor fills alpha with 1.
        assert_eq!(img.pixel(0, 0), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_image_size_validation() {
        let err = FloatingColorImage::new("test", 2, 2, vec![Vec3::ZERO; 3]).unwrap_err();
        assert!(matches!(
            err,
            VizError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_color_alpha_image() {
        let colors = vec![
            Vec4::new(1.0, 0.0, 0.0, 0.5),
            Vec4::new(0.0, 1.0, 0.0, 0.25),
        ];
        let mut img = FloatingColorImage::with_alpha("test", 2, 1, colors).unwrap();
        img.set_is_premultiplied(true);

        assert!(img.is_premultiplied());
        assert_eq!(img.pixel(0, 0).w, 0.5);
        assert_eq!(img.pixel(1, 0).w, 0.25);
    }

    #[test]
    fn test_color_image_lower_left_origin() {
        let colors = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        let mut img = FloatingColorImage::new("test", 2, 2, colors).unwrap();
        img.set_origin(ImageOrigin::LowerLeft);

        // LowerLeft: y=0 maps to bottom row (index 2,3)
        assert_eq!(img.pixel(0, 0), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(img.pixel(1, 0), Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(img.pixel(0, 1), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(img.pixel(1, 1), Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_color_image_pixel_y_out_of_bounds() {
        let img = FloatingColorImage::new("test", 2, 1, vec![Vec3::ZERO; 2]).unwrap();
        let _ = img.pixel(0, 1);
    }
}
