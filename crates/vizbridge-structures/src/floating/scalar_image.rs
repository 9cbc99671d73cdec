//! Floating scalar image quantity.

use vizbridge_core::error::{Result, VizError};
use vizbridge_core::quantity::{Quantity, QuantityKind};

use super::ImageOrigin;

/// A floating scalar image quantity (not attached to any structure).
///
/// Displays a 2D grid of scalar values through a colormap.
#[derive(Debug, Clone)]
pub struct FloatingScalarImage {
    name: String,
    width: u32,
    height: u32,
    values: Vec<f32>,
    origin: ImageOrigin,
    enabled: bool,
    colormap_name: String,
    data_min: f32,
    data_max: f32,
    show_fullscreen: bool,
    transparency: f32,
}

impl FloatingScalarImage {
    /// Creates a new floating scalar image from row-major values.
    pub fn new(name: impl Into<String>, width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if values.len() != expected {
            return Err(VizError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Ok(Self {
            name: name.into(),
            width,
            height,
            values,
            origin: ImageOrigin::default(),
            enabled: true,
            colormap_name: "viridis".to_string(),
            data_min: min,
            data_max: max,
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

    /// Returns the scalar values.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
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

    /// Gets the colormap name.
    #[must_use]
    pub fn colormap_name(&self) -> &str {
        &self.colormap_name
    }

    /// Sets the colormap name.
    pub fn set_colormap(&mut self, name: impl Into<String>) -> &mut Self {
        self.colormap_name = name.into();
        self
    }

    /// Gets the mapped data range.
    #[must_use]
    pub fn data_range(&self) -> (f32, f32) {
        (self.data_min, self.data_max)
    }

    /// Sets the mapped data range.
    pub fn set_data_range(&mut self, min: f32, max: f32) -> &mut Self {
        self.data_min = min;
        self.data_max = max;
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

    /// Returns the pixel value at `(x, y)`, accounting for image origin.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let row = self.origin.storage_row(y, self.height);
        self.values[(row * self.width + x) as usize]
    }
}

impl Quantity for FloatingScalarImage {
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
        QuantityKind::Image
    }
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    fn refresh(&mut self) {
        self.data_min = self.values.iter().copied().fold(f32::INFINITY, f32::min);
        self.data_max = self
            .values
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
    }
    fn data_size(&self) -> usize {
        self.values.len()
    }
}
