//! Quantity trait and related types.
//!
//! A [`Quantity`] represents data associated with a structure, such as scalar
//! values, vector fields, or colors. Floating quantities attach to the global
//! floating root instead of a structure.

/// The kind of quantity (for categorization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    /// Scalar values (single float per element).
    Scalar,
    /// Vector values (Vec3 per element).
    Vector,
    /// Color values (RGB or RGBA per element).
    Color,
    /// 2D image data (floating quantities).
    Image,
}

/// Interpretation hint for scalar data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Map the observed data range.
    #[default]
    Standard,
    /// Data is signed; map symmetrically about zero.
    Symmetric,
    /// Data is a magnitude; map from zero upward.
    Magnitude,
}

/// Interpretation hint for vector data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorType {
    /// Lengths are relative; the viewer may rescale for display.
    #[default]
    Standard,
    /// Lengths are in world units and must not be rescaled.
    Ambient,
}

/// Data associated with a structure that can be visualized.
pub trait Quantity: Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Returns the name of this quantity.
    fn name(&self) -> &str;

    /// Returns the name of the parent structure (empty for floating
    /// quantities).
    fn structure_name(&self) -> &str;

    /// Returns the kind of this quantity.
    fn kind(&self) -> QuantityKind;

    /// Returns whether this quantity is currently enabled/visible.
    fn is_enabled(&self) -> bool;

    /// Sets the enabled state of this quantity.
    fn set_enabled(&mut self, enabled: bool);

    /// Recomputes derived state after data changes.
    fn refresh(&mut self);

    /// Returns the number of data elements.
    fn data_size(&self) -> usize;
}
