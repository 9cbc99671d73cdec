//! Point cloud registration and handle API.

use vizbridge_core::error::{Result, VizError};
use vizbridge_core::events::EventKind;
use vizbridge_core::pick::PickResult;
use vizbridge_core::quantity::{DataType, VectorType};
use vizbridge_core::state::{with_context, with_context_mut};
use vizbridge_structures::{PointCloud, PointCloudPickResult, PointRenderMode};

use crate::{Vec3, Vec4};

/// Registers a point cloud, replacing any existing structure with the same
/// name (along with its event handlers).
pub fn register_point_cloud(name: impl Into<String>, points: Vec<Vec3>) -> PointCloudHandle {
    let name = name.into();
    let point_cloud = PointCloud::new(name.clone(), points);

    with_context_mut(|ctx| {
        ctx.register_structure(Box::new(point_cloud));
    });

    PointCloudHandle { name }
}

/// Gets a registered point cloud by name.
#[must_use]
pub fn get_point_cloud(name: &str) -> Option<PointCloudHandle> {
    with_context(|ctx| {
        ctx.registry
            .contains("PointCloud", name)
            .then(|| PointCloudHandle {
                name: name.to_string(),
            })
    })
}

/// Checks for a point cloud by name.
#[must_use]
pub fn has_point_cloud(name: &str) -> bool {
    with_context(|ctx| ctx.registry.contains("PointCloud", name))
}

/// Removes a point cloud by name, along with its event handlers.
///
/// Returns whether a point cloud with that name existed.
pub fn remove_point_cloud(name: &str) -> bool {
    with_context_mut(|ctx| ctx.remove_structure("PointCloud", name))
}

/// Handle for a registered point cloud.
///
/// The handle resolves its name on every call; operations on a cloud that has
/// since been removed return [`VizError::StructureNotFound`].
#[derive(Clone, Debug)]
pub struct PointCloudHandle {
    name: String,
}

impl PointCloudHandle {
    /// Returns the name of this point cloud.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn resolve<R>(&self, f: impl FnOnce(&mut PointCloud) -> R) -> Result<R> {
        with_context_mut(|ctx| {
            ctx.registry
                .get_mut("PointCloud", &self.name)
                .and_then(|s| s.as_any_mut().downcast_mut::<PointCloud>())
                .map(f)
                .ok_or_else(|| VizError::StructureNotFound(self.name.clone()))
        })
    }

    fn resolve_ref<R>(&self, f: impl FnOnce(&PointCloud) -> R) -> Result<R> {
        with_context(|ctx| {
            ctx.registry
                .get("PointCloud", &self.name)
                .and_then(|s| s.as_any().downcast_ref::<PointCloud>())
                .map(f)
                .ok_or_else(|| VizError::StructureNotFound(self.name.clone()))
        })
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> Result<usize> {
        self.resolve_ref(PointCloud::num_points)
    }

    /// Replaces the point positions (the count must not change).
    pub fn update_point_positions(&self, points: Vec<Vec3>) -> Result<()> {
        self.resolve(|pc| pc.update_points(points))?
    }

    /// Adds a scalar quantity to this point cloud.
    pub fn add_scalar_quantity(&self, name: &str, values: Vec<f32>) -> Result<&Self> {
        self.add_scalar_quantity_typed(name, values, DataType::Standard)
    }

    /// Adds a scalar quantity with an explicit interpretation hint.
    pub fn add_scalar_quantity_typed(
        &self,
        name: &str,
        values: Vec<f32>,
        data_type: DataType,
    ) -> Result<&Self> {
        self.resolve(|pc| pc.add_scalar_quantity(name, values, data_type).map(|_| ()))??;
        Ok(self)
    }

    /// Adds a vector quantity to this point cloud.
    pub fn add_vector_quantity(&self, name: &str, vectors: Vec<Vec3>) -> Result<&Self> {
        self.add_vector_quantity_typed(name, vectors, VectorType::Standard)
    }

    /// Adds a vector quantity with an explicit interpretation hint.
    pub fn add_vector_quantity_typed(
        &self,
        name: &str,
        vectors: Vec<Vec3>,
        vector_type: VectorType,
    ) -> Result<&Self> {
        self.resolve(|pc| pc.add_vector_quantity(name, vectors, vector_type).map(|_| ()))??;
        Ok(self)
    }

    /// Adds a color quantity to this point cloud.
    pub fn add_color_quantity(&self, name: &str, colors: Vec<Vec3>) -> Result<&Self> {
        self.resolve(|pc| pc.add_color_quantity(name, colors).map(|_| ()))??;
        Ok(self)
    }

    /// Removes a quantity by name. Returns whether one existed.
    pub fn remove_quantity(&self, name: &str) -> Result<bool> {
        use vizbridge_core::structure::HasQuantities;
        self.resolve(|pc| pc.remove_quantity(name).is_some())
    }

    /// Uses an existing scalar quantity to set the per-point radius.
    pub fn set_point_radius_quantity(&self, name: &str, autoscale: bool) -> Result<&Self> {
        self.resolve(|pc| pc.set_point_radius_quantity(name, autoscale))??;
        Ok(self)
    }

    /// Clears any quantity setting the per-point radius.
    pub fn clear_point_radius_quantity(&self) -> Result<()> {
        self.resolve(PointCloud::clear_point_radius_quantity)
    }

    /// Uses an existing scalar quantity to set per-point transparency.
    pub fn set_transparency_quantity(&self, name: &str) -> Result<&Self> {
        self.resolve(|pc| pc.set_transparency_quantity(name))??;
        Ok(self)
    }

    /// Clears any quantity setting per-point transparency.
    pub fn clear_transparency_quantity(&self) -> Result<()> {
        self.resolve(PointCloud::clear_transparency_quantity)
    }

    /// Sets the point radius.
    pub fn set_radius(&self, radius: f32) -> Result<&Self> {
        self.resolve(|pc| pc.set_point_radius(radius))?;
        Ok(self)
    }

    /// Gets the point radius.
    pub fn radius(&self) -> Result<f32> {
        self.resolve_ref(PointCloud::point_radius)
    }

    /// Sets the base color.
    pub fn set_color(&self, color: Vec3) -> Result<&Self> {
        self.resolve(|pc| pc.set_base_color(color))?;
        Ok(self)
    }

    /// Gets the base color.
    pub fn color(&self) -> Result<Vec4> {
        self.resolve_ref(PointCloud::base_color)
    }

    /// Sets the material by name.
    pub fn set_material(&self, material: &str) -> Result<&Self> {
        use vizbridge_core::structure::Structure;
        self.resolve(|pc| pc.set_material(material))?;
        Ok(self)
    }

    /// Sets the point render mode.
    pub fn set_point_render_mode(&self, mode: PointRenderMode) -> Result<&Self> {
        self.resolve(|pc| pc.set_point_render_mode(mode))?;
        Ok(self)
    }

    /// Gets the point render mode.
    pub fn point_render_mode(&self) -> Result<PointRenderMode> {
        self.resolve_ref(PointCloud::point_render_mode)
    }

    /// Interprets a raw engine pick result in terms of this point cloud.
    pub fn interpret_pick_result(&self, pick: &PickResult) -> Result<Option<PointCloudPickResult>> {
        self.resolve_ref(|pc| pc.interpret_pick_result(pick))
    }

    /// Registers a pick callback for this point cloud, replacing any prior
    /// one.
    ///
    /// The callback receives the picked point index whenever the host loop
    /// dispatches a pick event, unless a host interrupt preempts it.
    pub fn set_pick_callback(
        &self,
        callback: impl FnMut(usize) -> Result<()> + Send + Sync + 'static,
    ) -> Result<&Self> {
        crate::events::set_event_handler(&self.name, EventKind::Pick, Box::new(callback))?;
        Ok(self)
    }

    /// Registers a hover callback for this point cloud, replacing any prior
    /// one.
    pub fn set_hover_callback(
        &self,
        callback: impl FnMut(usize) -> Result<()> + Send + Sync + 'static,
    ) -> Result<&Self> {
        crate::events::set_event_handler(&self.name, EventKind::Hover, Box::new(callback))?;
        Ok(self)
    }

    /// Clears the pick callback. Returns whether one was registered.
    pub fn clear_pick_callback(&self) -> bool {
        crate::events::clear_event_handler(&self.name, EventKind::Pick)
    }

    /// Clears the hover callback. Returns whether one was registered.
    pub fn clear_hover_callback(&self) -> bool {
        crate::events::clear_event_handler(&self.name, EventKind::Hover)
    }
}

/// Executes a closure with mutable access to a registered point cloud.
///
/// Returns `None` if the point cloud does not exist.
pub fn with_point_cloud<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&mut PointCloud) -> R,
{
    with_context_mut(|ctx| {
        ctx.registry
            .get_mut("PointCloud", name)
            .and_then(|s| s.as_any_mut().downcast_mut::<PointCloud>())
            .map(f)
    })
}

/// Executes a closure with immutable access to a registered point cloud.
///
/// Returns `None` if the point cloud does not exist.
pub fn with_point_cloud_ref<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&PointCloud) -> R,
{
    with_context(|ctx| {
        ctx.registry
            .get("PointCloud", name)
            .and_then(|s| s.as_any().downcast_ref::<PointCloud>())
            .map(f)
    })
}
