//! Core abstractions for vizbridge.
//!
//! This crate provides the fundamental traits and types used throughout
//! vizbridge:
//! - [`Structure`] trait for scene entities (point clouds, etc.)
//! - [`Quantity`] trait for data associated with structures (scalars,
//!   vectors, colors, images)
//! - Global state management and structure registry
//! - The pick/hover event bridge with cooperative interruption

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod events;
pub mod interrupt;
pub mod options;
pub mod pick;
pub mod quantity;
pub mod registry;
pub mod state;
pub mod structure;

pub use error::{Result, VizError};
pub use events::{EventHandler, EventKind, HandlerTable};
pub use interrupt::{clear_interrupt, interrupt_pending, request_interrupt};
pub use options::Options;
pub use pick::PickResult;
pub use quantity::{DataType, Quantity, QuantityKind, VectorType};
pub use registry::Registry;
pub use state::{with_context, with_context_mut, Context};
pub use structure::{HasQuantities, Structure};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
