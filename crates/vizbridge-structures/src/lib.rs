//! Structure implementations for vizbridge.
//!
//! This crate provides the concrete scene entities exposed by the binding
//! layer:
//! - Point clouds with scalar/vector/color quantities and pick interpretation
//! - Floating image quantities (scalar and color)

// Image/geometry code intentionally uses casts for indices and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod floating;
pub mod point_cloud;

pub use floating::{FloatingColorImage, FloatingScalarImage, ImageOrigin};
pub use point_cloud::{PointCloud, PointCloudPickResult, PointRenderMode};
