//! Point cloud quantity implementations.

use glam::Vec3;
use vizbridge_core::quantity::{DataType, Quantity, QuantityKind, VectorType};

/// A scalar quantity on a point cloud.
pub struct PointCloudScalarQuantity {
    name: String,
    structure_name: String,
    values: Vec<f32>,
    data_type: DataType,
    enabled: bool,
    data_min: f32,
    data_max: f32,
}

impl PointCloudScalarQuantity {
    /// Creates a new scalar quantity.
    pub fn new(
        name: impl Into<String>,
        structure_name: impl Into<String>,
        values: Vec<f32>,
        data_type: DataType,
    ) -> Self {
        let (data_min, data_max) = scalar_range(&values, data_type);
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            values,
            data_type,
            enabled: false,
            data_min,
            data_max,
        }
    }

    /// Returns the scalar values.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the interpretation hint for the data.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the mapped data range.
    #[must_use]
    pub fn data_range(&self) -> (f32, f32) {
        (self.data_min, self.data_max)
    }
}

/// Computes the mapped range for scalar data under its interpretation hint.
fn scalar_range(values: &[f32], data_type: DataType) -> (f32, f32) {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    match data_type {
        DataType::Standard => (min, max),
        DataType::Symmetric => {
            let bound = min.abs().max(max.abs());
            (-bound, bound)
        }
        DataType::Magnitude => (0.0, max),
    }
}

impl Quantity for PointCloudScalarQuantity {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
    }

    fn kind(&self) -> QuantityKind {
        QuantityKind::Scalar
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn refresh(&mut self) {
        let (min, max) = scalar_range(&self.values, self.data_type);
        self.data_min = min;
        self.data_max = max;
    }

    fn data_size(&self) -> usize {
        self.values.len()
    }
}

/// A vector quantity on a point cloud.
pub struct PointCloudVectorQuantity {
    name: String,
    structure_name: String,
    vectors: Vec<Vec3>,
    vector_type: VectorType,
    enabled: bool,
    max_length: f32,
}

impl PointCloudVectorQuantity {
    /// Creates a new vector quantity.
    pub fn new(
        name: impl Into<String>,
        structure_name: impl Into<String>,
        vectors: Vec<Vec3>,
        vector_type: VectorType,
    ) -> Self {
        let max_length = max_norm(&vectors);
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            vectors,
            vector_type,
            enabled: false,
            max_length,
        }
    }

    /// Returns the vectors.
    #[must_use]
    pub fn vectors(&self) -> &[Vec3] {
        &self.vectors
    }

    /// Returns the interpretation hint for the vectors.
    #[must_use]
    pub fn vector_type(&self) -> VectorType {
        self.vector_type
    }

    /// Returns the largest vector norm, used for display scaling.
    #[must_use]
    pub fn max_length(&self) -> f32 {
        self.max_length
    }
}

fn max_norm(vectors: &[Vec3]) -> f32 {
    vectors.iter().map(|v| v.length()).fold(0.0, f32::max)
}

impl Quantity for PointCloudVectorQuantity {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
    }

    fn kind(&self) -> QuantityKind {
        QuantityKind::Vector
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn refresh(&mut self) {
        self.max_length = max_norm(&self.vectors);
    }

    fn data_size(&self) -> usize {
        self.vectors.len()
    }
}

/// A color quantity on a point cloud.
pub struct PointCloudColorQuantity {
    name: String,
    structure_name: String,
    colors: Vec<Vec3>,
    enabled: bool,
}

impl PointCloudColorQuantity {
    /// Creates a new color quantity.
    pub fn new(
        name: impl Into<String>,
        structure_name: impl Into<String>,
        colors: Vec<Vec3>,
    ) -> Self {
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            colors,
            enabled: false,
        }
    }

    /// Returns the colors.
    #[must_use]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }
}

impl Quantity for PointCloudColorQuantity {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
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
    fn test_scalar_range_interpretation() {
        let values = vec![-2.0, 1.0, 0.5];

        let standard =
            PointCloudScalarQuantity::new("q", "pc", values.clone(), DataType::Standard);
        assert_eq!(standard.data_range(), (-2.0, 1.0));

        let symmetric =
            PointCloudScalarQuantity::new("q", "pc", values.clone(), DataType::Symmetric);
        assert_eq!(symmetric.data_range(), (-2.0, 2.0));

        let magnitude = PointCloudScalarQuantity::new("q", "pc", values, DataType::Magnitude);
        assert_eq!(magnitude.data_range(), (0.0, 1.0));
    }

    #[test]
    fn test_vector_max_length() {
        let q = PointCloudVectorQuantity::new(
            "v",
            "pc",
            vec![Vec3::X, Vec3::new(0.0, 3.0, 4.0)],
            VectorType::Standard,
        );
        assert!((q.max_length() - 5.0).abs() < 1e-6);
        assert_eq!(q.kind(), QuantityKind::Vector);
        assert_eq!(q.structure_name(), "pc");
    }

    #[test]
    fn test_color_quantity_basics() {
        let q = PointCloudColorQuantity::new("c", "pc", vec![Vec3::ONE; 4]);
        assert_eq!(q.kind(), QuantityKind::Color);
        assert_eq!(q.data_size(), 4);
        assert!(!q.is_enabled());
    }
}
