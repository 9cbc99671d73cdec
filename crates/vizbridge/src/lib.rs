//! vizbridge: a scene binding layer for a native 3D viewer.
//!
//! The rendering engine (GPU upload, shading, picking rasterization) lives
//! elsewhere; this crate owns what a host scripting environment needs to talk
//! to it: a registry of named **structures**, **quantities** attached to them
//! (or floating free of any structure), and an **event bridge** that relays
//! pick/hover events to user callbacks with a cooperative interruption
//! checkpoint.
//!
//! # Quick Start
//!
//! ```no_run
//! use vizbridge::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     let points = vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(0.0, 1.0, 0.0),
//!     ];
//!     let cloud = register_point_cloud("my points", points);
//!     cloud.add_scalar_quantity("height", vec![0.0, 0.0, 1.0])?;
//!     cloud.set_pick_callback(|index| {
//!         println!("picked point {index}");
//!         Ok(())
//!     })?;
//!
//!     // Driven by the host UI loop whenever the engine reports a pick:
//!     dispatch_pick("my points", 2)?;
//!
//!     shutdown();
//!     Ok(())
//! }
//! ```
//!
//! # Interruption
//!
//! A host with asynchronous cancellation (ctrl-c in a REPL) calls
//! [`request_interrupt`] from its signal handler. The next event dispatch
//! consumes the flag and returns [`VizError::Interrupted`] instead of running
//! the user callback, so the native loop stays responsive even while user
//! code is wired into every frame.

mod events;
mod floating;
mod point_cloud;

// Re-export core types
pub use vizbridge_core::{
    error::{Result, VizError},
    events::{EventHandler, EventKind},
    interrupt::{clear_interrupt, interrupt_pending, request_interrupt},
    options::Options,
    pick::PickResult,
    quantity::{DataType, Quantity, QuantityKind, VectorType},
    registry::Registry,
    state::{with_context, with_context_mut, Context},
    structure::{HasQuantities, Structure},
    Mat4, Vec2, Vec3, Vec4,
};

// Re-export structures
pub use vizbridge_structures::{
    FloatingColorImage, FloatingScalarImage, ImageOrigin, PointCloud, PointCloudPickResult,
    PointRenderMode,
};

pub use events::{clear_event_handler, dispatch_event, dispatch_hover, dispatch_pick, set_event_handler};
pub use floating::{
    has_floating_quantity, register_floating_color_alpha_image, register_floating_color_image,
    register_floating_scalar_image, remove_all_floating_quantities, remove_floating_quantity,
};
pub use point_cloud::{
    get_point_cloud, has_point_cloud, register_point_cloud, remove_point_cloud, with_point_cloud,
    with_point_cloud_ref, PointCloudHandle,
};

/// Initializes vizbridge with default settings.
///
/// This must be called before any other vizbridge functions.
pub fn init() -> Result<()> {
    vizbridge_core::state::init_context()?;
    log::info!("vizbridge initialized");
    Ok(())
}

/// Returns whether vizbridge has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    vizbridge_core::state::is_initialized()
}

/// Shuts down vizbridge, dropping all structures, floating quantities, and
/// bound event handlers.
pub fn shutdown() {
    vizbridge_core::state::shutdown_context();
    log::info!("vizbridge shut down");
}

/// Removes a structure of any type by name, along with its event handlers.
///
/// Returns whether a structure with that name existed.
pub fn remove_structure(name: &str) -> bool {
    with_context_mut(|ctx| {
        let Some(type_name) = ctx.registry.type_name_of(name) else {
            return false;
        };
        ctx.remove_structure(type_name, name)
    })
}

/// Removes all structures and every registered event handler.
pub fn remove_all_structures() {
    with_context_mut(Context::clear_all_structures);
}
