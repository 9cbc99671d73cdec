//! Pick results.
//!
//! The external rendering engine owns the pick pass; what reaches this layer
//! is a transient [`PickResult`] naming the hit structure and element.
//! Structures interpret the raw result into their own terms (see
//! `PointCloud::interpret_pick_result`).

use glam::Vec3;

/// Result of a pick/selection operation, as reported by the engine.
#[derive(Debug, Clone)]
pub struct PickResult {
    /// The type of structure that was picked.
    pub structure_type: String,

    /// The name of the structure that was picked.
    pub structure_name: String,

    /// The index of the element that was picked (point, face, etc.).
    pub element_index: usize,

    /// The world position of the pick point.
    pub world_position: Vec3,

    /// The depth of the pick point.
    pub depth: f32,
}

impl PickResult {
    /// Creates a new pick result.
    pub fn new(
        structure_type: impl Into<String>,
        structure_name: impl Into<String>,
        element_index: usize,
        world_position: Vec3,
        depth: f32,
    ) -> Self {
        Self {
            structure_type: structure_type.into(),
            structure_name: structure_name.into(),
            element_index,
            world_position,
            depth,
        }
    }

    /// Returns whether this result targets the given structure.
    #[must_use]
    pub fn targets(&self, structure_type: &str, structure_name: &str) -> bool {
        self.structure_type == structure_type && self.structure_name == structure_name
    }
}
