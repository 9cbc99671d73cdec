//! Floating quantities — screen-space data not attached to any structure.
//!
//! Floating quantities are registered on the global floating root and are
//! displayed as standalone overlays: scalar images mapped through a colormap,
//! and color images shown directly.

mod color_image;
mod scalar_image;

pub use color_image::*;
pub use scalar_image::*;

/// Image origin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageOrigin {
    /// Image row 0 is the top row (standard screen convention).
    #[default]
    UpperLeft,
    /// Image row 0 is the bottom row (OpenGL convention).
    LowerLeft,
}

impl ImageOrigin {
    /// Maps a logical row to a storage row under this convention.
    #[must_use]
    pub(crate) fn storage_row(self, y: u32, height: u32) -> u32 {
        match self {
            ImageOrigin::UpperLeft => y,
            ImageOrigin::LowerLeft => height - 1 - y,
        }
    }
}
