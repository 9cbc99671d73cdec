//! Point cloud structure.

mod quantities;

use glam::{Mat4, Vec3, Vec4};
use vizbridge_core::error::{Result, VizError};
use vizbridge_core::pick::PickResult;
use vizbridge_core::quantity::{DataType, Quantity, QuantityKind, VectorType};
use vizbridge_core::structure::{HasQuantities, Structure};

pub use quantities::*;

/// How the engine draws individual points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointRenderMode {
    /// Shaded spheres.
    #[default]
    Sphere,
    /// Flat screen-facing quads (cheaper for very large clouds).
    Quad,
}

/// Interpretation of a raw pick result for a point cloud: the index of the
/// picked point. Transient; consumed by the requesting caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointCloudPickResult {
    /// Index of the picked point.
    pub index: usize,
}

/// A point cloud structure.
pub struct PointCloud {
    name: String,
    points: Vec<Vec3>,
    enabled: bool,
    transform: Mat4,
    quantities: Vec<Box<dyn Quantity>>,
    material: String,
    point_radius: f32,
    base_color: Vec4,
    render_mode: PointRenderMode,
    /// Scalar quantity driving per-point radius, with its autoscale flag.
    radius_quantity: Option<(String, bool)>,
    /// Scalar quantity driving per-point transparency.
    transparency_quantity: Option<String>,
}

impl PointCloud {
    /// Creates a new point cloud.
    pub fn new(name: impl Into<String>, points: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            points,
            enabled: true,
            transform: Mat4::IDENTITY,
            quantities: Vec::new(),
            material: "clay".to_string(),
            point_radius: 0.01,
            base_color: Vec4::new(0.2, 0.5, 0.8, 1.0),
            render_mode: PointRenderMode::default(),
            radius_quantity: None,
            transparency_quantity: None,
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Replaces the point positions.
    ///
    /// The new positions must have the same count as the old ones; attached
    /// quantities are indexed per point.
    pub fn update_points(&mut self, points: Vec<Vec3>) -> Result<()> {
        if points.len() != self.points.len() {
            return Err(VizError::SizeMismatch {
                expected: self.points.len(),
                actual: points.len(),
            });
        }
        self.points = points;
        self.refresh();
        Ok(())
    }

    fn check_size(&self, actual: usize) -> Result<()> {
        if actual == self.points.len() {
            Ok(())
        } else {
            Err(VizError::SizeMismatch {
                expected: self.points.len(),
                actual,
            })
        }
    }

    /// Adds a scalar quantity to this point cloud, one value per point.
    pub fn add_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f32>,
        data_type: DataType,
    ) -> Result<&mut Self> {
        self.check_size(values.len())?;
        let quantity = PointCloudScalarQuantity::new(name, self.name.clone(), values, data_type);
        self.add_quantity(Box::new(quantity));
        Ok(self)
    }

    /// Adds a vector quantity to this point cloud, one vector per point.
    pub fn add_vector_quantity(
        &mut self,
        name: impl Into<String>,
        vectors: Vec<Vec3>,
        vector_type: VectorType,
    ) -> Result<&mut Self> {
        self.check_size(vectors.len())?;
        let quantity = PointCloudVectorQuantity::new(name, self.name.clone(), vectors, vector_type);
        self.add_quantity(Box::new(quantity));
        Ok(self)
    }

    /// Adds a color quantity to this point cloud, one RGB color per point.
    pub fn add_color_quantity(
        &mut self,
        name: impl Into<String>,
        colors: Vec<Vec3>,
    ) -> Result<&mut Self> {
        self.check_size(colors.len())?;
        let quantity = PointCloudColorQuantity::new(name, self.name.clone(), colors);
        self.add_quantity(Box::new(quantity));
        Ok(self)
    }

    fn require_scalar_quantity(&self, name: &str) -> Result<()> {
        match self.get_quantity(name) {
            Some(q) if q.kind() == QuantityKind::Scalar => Ok(()),
            _ => Err(VizError::QuantityNotFound(
                name.to_string(),
                self.name.clone(),
            )),
        }
    }

    /// Uses an existing scalar quantity to set the per-point radius.
    ///
    /// With `autoscale`, values are rescaled so the largest maps to the base
    /// radius; without it they are used as world-unit radii directly.
    pub fn set_point_radius_quantity(&mut self, name: &str, autoscale: bool) -> Result<()> {
        self.require_scalar_quantity(name)?;
        self.radius_quantity = Some((name.to_string(), autoscale));
        Ok(())
    }

    /// Clears any quantity setting the per-point radius.
    pub fn clear_point_radius_quantity(&mut self) {
        self.radius_quantity = None;
    }

    /// Returns the radius quantity name and autoscale flag, if set.
    #[must_use]
    pub fn point_radius_quantity(&self) -> Option<(&str, bool)> {
        self.radius_quantity
            .as_ref()
            .map(|(name, autoscale)| (name.as_str(), *autoscale))
    }

    /// Uses an existing scalar quantity to set per-point transparency.
    pub fn set_transparency_quantity(&mut self, name: &str) -> Result<()> {
        self.require_scalar_quantity(name)?;
        self.transparency_quantity = Some(name.to_string());
        Ok(())
    }

    /// Clears any quantity setting per-point transparency.
    pub fn clear_transparency_quantity(&mut self) {
        self.transparency_quantity = None;
    }

    /// Returns the transparency quantity name, if set.
    #[must_use]
    pub fn transparency_quantity(&self) -> Option<&str> {
        self.transparency_quantity.as_deref()
    }

    /// Interprets a raw engine pick result in terms of this point cloud.
    ///
    /// Returns `None` when the result targets another structure or carries an
    /// out-of-range index.
    #[must_use]
    pub fn interpret_pick_result(&self, pick: &PickResult) -> Option<PointCloudPickResult> {
        if !pick.targets("PointCloud", &self.name) {
            return None;
        }
        if pick.element_index >= self.points.len() {
            return None;
        }
        Some(PointCloudPickResult {
            index: pick.element_index,
        })
    }

    /// Sets the point radius.
    pub fn set_point_radius(&mut self, radius: f32) {
        self.point_radius = radius;
    }

    /// Gets the point radius.
    #[must_use]
    pub fn point_radius(&self) -> f32 {
        self.point_radius
    }

    /// Sets the base color.
    pub fn set_base_color(&mut self, color: Vec3) {
        self.base_color = color.extend(1.0);
    }

    /// Gets the base color.
    #[must_use]
    pub fn base_color(&self) -> Vec4 {
        self.base_color
    }

    /// Sets the point render mode.
    pub fn set_point_render_mode(&mut self, mode: PointRenderMode) {
        self.render_mode = mode;
    }

    /// Gets the point render mode.
    #[must_use]
    pub fn point_render_mode(&self) -> PointRenderMode {
        self.render_mode
    }
}

impl std::fmt::Debug for PointCloud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointCloud")
            .field("name", &self.name)
            .field("num_points", &self.points.len())
            .field("num_quantities", &self.quantities.len())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Structure for PointCloud {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "PointCloud"
    }

    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        for &p in &self.points {
            min = min.min(p);
            max = max.max(p);
        }

        // Apply transform
        let transform = self.transform;
        let corners = [
            transform.transform_point3(Vec3::new(min.x, min.y, min.z)),
            transform.transform_point3(Vec3::new(max.x, min.y, min.z)),
            transform.transform_point3(Vec3::new(min.x, max.y, min.z)),
            transform.transform_point3(Vec3::new(max.x, max.y, min.z)),
            transform.transform_point3(Vec3::new(min.x, min.y, max.z)),
            transform.transform_point3(Vec3::new(max.x, min.y, max.z)),
            transform.transform_point3(Vec3::new(min.x, max.y, max.z)),
            transform.transform_point3(Vec3::new(max.x, max.y, max.z)),
        ];

        let mut world_min = Vec3::splat(f32::MAX);
        let mut world_max = Vec3::splat(f32::MIN);
        for corner in corners {
            world_min = world_min.min(corner);
            world_max = world_max.max(corner);
        }

        Some((world_min, world_max))
    }

    fn length_scale(&self) -> f32 {
        self.bounding_box()
            .map_or(1.0, |(min, max)| (max - min).length())
    }

    fn transform(&self) -> Mat4 {
        self.transform
    }

    fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn material(&self) -> &str {
        &self.material
    }

    fn set_material(&mut self, material: &str) {
        self.material = material.to_string();
    }

    fn refresh(&mut self) {
        for quantity in &mut self.quantities {
            quantity.refresh();
        }
    }
}

impl HasQuantities for PointCloud {
    fn add_quantity(&mut self, quantity: Box<dyn Quantity>) {
        // Names are unique per structure; same-name replaces (and any
        // radius/transparency reference keeps pointing at the new data).
        if let Some(idx) = self
            .quantities
            .iter()
            .position(|q| q.name() == quantity.name())
        {
            log::debug!(
                "quantity '{}' on '{}' replaced",
                quantity.name(),
                self.name
            );
            self.quantities[idx] = quantity;
        } else {
            self.quantities.push(quantity);
        }
    }

    fn get_quantity(&self, name: &str) -> Option<&dyn Quantity> {
        self.quantities
            .iter()
            .find(|q| q.name() == name)
            .map(std::convert::AsRef::as_ref)
    }

    fn get_quantity_mut(&mut self, name: &str) -> Option<&mut Box<dyn Quantity>> {
        self.quantities.iter_mut().find(|q| q.name() == name)
    }

    fn remove_quantity(&mut self, name: &str) -> Option<Box<dyn Quantity>> {
        let idx = self.quantities.iter().position(|q| q.name() == name)?;
        // A removed quantity can no longer drive radius or transparency.
        if self
            .radius_quantity
            .as_ref()
            .is_some_and(|(n, _)| n == name)
        {
            self.radius_quantity = None;
        }
        if self.transparency_quantity.as_deref() == Some(name) {
            self.transparency_quantity = None;
        }
        Some(self.quantities.remove(idx))
    }

    fn quantities(&self) -> &[Box<dyn Quantity>] {
        &self.quantities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_cloud() -> PointCloud {
        PointCloud::new(
            "cloud1",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_quantity_size_validation() {
        let mut pc = triangle_cloud();

        assert!(pc
            .add_scalar_quantity("ok", vec![0.0, 0.5, 1.0], DataType::Standard)
            .is_ok());
        let err = pc
            .add_scalar_quantity("short", vec![0.0], DataType::Standard)
            .unwrap_err();
        assert!(matches!(
            err,
            VizError::SizeMismatch {
                expected: 3,
                actual: 1
            }
        ));
        assert_eq!(pc.num_quantities(), 1);
    }

    #[test]
    fn test_same_name_quantity_replaces() {
        let mut pc = triangle_cloud();
        pc.add_scalar_quantity("v", vec![0.0, 0.0, 0.0], DataType::Standard)
            .unwrap();
        pc.add_scalar_quantity("v", vec![1.0, 2.0, 3.0], DataType::Standard)
            .unwrap();

        assert_eq!(pc.num_quantities(), 1);
        let q = pc.get_quantity("v").unwrap();
        let sq = q.as_any().downcast_ref::<PointCloudScalarQuantity>().unwrap();
        assert_eq!(sq.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_radius_quantity_must_be_scalar() {
        let mut pc = triangle_cloud();
        pc.add_color_quantity("colors", vec![Vec3::X, Vec3::Y, Vec3::Z])
            .unwrap();
        pc.add_scalar_quantity("sizes", vec![0.1, 0.2, 0.3], DataType::Magnitude)
            .unwrap();

        assert!(matches!(
            pc.set_point_radius_quantity("colors", true),
            Err(VizError::QuantityNotFound(_, _))
        ));
        assert!(matches!(
            pc.set_point_radius_quantity("missing", true),
            Err(VizError::QuantityNotFound(_, _))
        ));

        pc.set_point_radius_quantity("sizes", false).unwrap();
        assert_eq!(pc.point_radius_quantity(), Some(("sizes", false)));

        // Removing the quantity clears the reference.
        pc.remove_quantity("sizes");
        assert_eq!(pc.point_radius_quantity(), None);
    }

    #[test]
    fn test_transparency_quantity() {
        let mut pc = triangle_cloud();
        pc.add_scalar_quantity("alpha", vec![0.1, 0.5, 1.0], DataType::Standard)
            .unwrap();

        pc.set_transparency_quantity("alpha").unwrap();
        assert_eq!(pc.transparency_quantity(), Some("alpha"));
        pc.clear_transparency_quantity();
        assert_eq!(pc.transparency_quantity(), None);
    }

    #[test]
    fn test_update_points_preserves_count() {
        let mut pc = triangle_cloud();
        assert!(pc.update_points(vec![Vec3::ZERO, Vec3::X, Vec3::Y]).is_ok());
        assert!(pc.update_points(vec![Vec3::ZERO]).is_err());
        assert_eq!(pc.num_points(), 3);
    }

    #[test]
    fn test_interpret_pick_result() {
        let pc = triangle_cloud();

        let hit = PickResult::new("PointCloud", "cloud1", 2, Vec3::new(0.0, 1.0, 0.0), 0.5);
        assert_eq!(
            pc.interpret_pick_result(&hit),
            Some(PointCloudPickResult { index: 2 })
        );

        // Wrong structure: not ours to interpret.
        let other = PickResult::new("PointCloud", "cloud2", 1, Vec3::ZERO, 0.5);
        assert_eq!(pc.interpret_pick_result(&other), None);
        let wrong_type = PickResult::new("SurfaceMesh", "cloud1", 1, Vec3::ZERO, 0.5);
        assert_eq!(pc.interpret_pick_result(&wrong_type), None);

        // Out-of-range index.
        let oob = PickResult::new("PointCloud", "cloud1", 3, Vec3::ZERO, 0.5);
        assert_eq!(pc.interpret_pick_result(&oob), None);
    }

    #[test]
    fn test_bounding_box_with_transform() {
        let mut pc = triangle_cloud();
        let (min, max) = pc.bounding_box().unwrap();
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::new(1.0, 1.0, 0.0));

        pc.set_transform(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
        let (min, _) = pc.bounding_box().unwrap();
        assert_eq!(min, Vec3::new(10.0, 0.0, 0.0));
    }
}
