//! Floating quantity registration.
//!
//! Floating quantities live on the global floating root rather than any
//! structure. Names are unique across the root; registering under an
//! existing name replaces the previous quantity.

use vizbridge_core::error::Result;
use vizbridge_core::quantity::Quantity;
use vizbridge_core::state::{with_context, with_context_mut};
use vizbridge_structures::{FloatingColorImage, FloatingScalarImage};

use crate::{Vec3, Vec4};

fn register_floating(quantity: Box<dyn Quantity>) {
    with_context_mut(|ctx| {
        let name = quantity.name().to_string();
        let had = ctx.floating_quantities.len();
        ctx.floating_quantities.retain(|q| q.name() != name);
        if ctx.floating_quantities.len() != had && ctx.options.warn_on_replace {
            log::warn!("floating quantity '{name}' already existed; replaced");
        }
        ctx.floating_quantities.push(quantity);
    });
}

/// Registers a floating scalar image from row-major values.
pub fn register_floating_scalar_image(
    name: impl Into<String>,
    width: u32,
    height: u32,
    values: Vec<f32>,
) -> Result<()> {
    let img = FloatingScalarImage::new(name, width, height, values)?;
    register_floating(Box::new(img));
    Ok(())
}

/// Registers a floating color image from row-major RGB colors.
pub fn register_floating_color_image(
    name: impl Into<String>,
    width: u32,
    height: u32,
    colors: Vec<Vec3>,
) -> Result<()> {
    let img = FloatingColorImage::new(name, width, height, colors)?;
    register_floating(Box::new(img));
    Ok(())
}

/// Registers a floating color image from row-major RGBA colors.
pub fn register_floating_color_alpha_image(
    name: impl Into<String>,
    width: u32,
    height: u32,
    colors: Vec<Vec4>,
    premultiplied: bool,
) -> Result<()> {
    let mut img = FloatingColorImage::with_alpha(name, width, height, colors)?;
    img.set_is_premultiplied(premultiplied);
    register_floating(Box::new(img));
    Ok(())
}

/// Checks for a floating quantity by name.
#[must_use]
pub fn has_floating_quantity(name: &str) -> bool {
    with_context(|ctx| ctx.floating_quantities.iter().any(|q| q.name() == name))
}

/// Removes a floating quantity by name. Returns whether one existed.
pub fn remove_floating_quantity(name: &str) -> bool {
    with_context_mut(|ctx| {
        let had = ctx.floating_quantities.len();
        ctx.floating_quantities.retain(|q| q.name() != name);
        ctx.floating_quantities.len() != had
    })
}

/// Removes all floating quantities.
pub fn remove_all_floating_quantities() {
    with_context_mut(|ctx| {
        ctx.floating_quantities.clear();
    });
}
