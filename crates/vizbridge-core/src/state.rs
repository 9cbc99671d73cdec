//! Global state management.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use glam::Vec3;

use crate::error::{Result, VizError};
use crate::events::HandlerTable;
use crate::options::Options;
use crate::quantity::Quantity;
use crate::registry::Registry;
use crate::structure::Structure;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context containing all vizbridge state.
pub struct Context {
    /// Whether vizbridge has been initialized.
    pub initialized: bool,

    /// The structure registry.
    pub registry: Registry,

    /// Registered pick/hover event handlers.
    pub events: HandlerTable,

    /// Floating quantities, attached to the global root rather than any
    /// structure. Names are unique; same-name registration replaces.
    pub floating_quantities: Vec<Box<dyn Quantity>>,

    /// Global options.
    pub options: Options,

    /// Representative length scale for all registered structures.
    pub length_scale: f32,

    /// Axis-aligned bounding box for all registered structures.
    pub bounding_box: (Vec3, Vec3),

    /// Per-name registration epoch, bumped every time a name is (re)bound.
    /// Lets dispatchers detect that a structure was replaced while they were
    /// running user code outside the lock.
    registration_epochs: HashMap<String, u64>,

    epoch_counter: u64,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            initialized: false,
            registry: Registry::new(),
            events: HandlerTable::new(),
            floating_quantities: Vec::new(),
            options: Options::default(),
            length_scale: 1.0,
            bounding_box: (Vec3::ZERO, Vec3::ONE),
            registration_epochs: HashMap::new(),
            epoch_counter: 0,
        }
    }
}

impl Context {
    /// Computes the center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.bounding_box.0 + self.bounding_box.1) * 0.5
    }

    /// Updates the global bounding box and length scale from all structures.
    pub fn update_extents(&mut self) {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut has_extent = false;

        for structure in self.registry.iter() {
            if let Some((bb_min, bb_max)) = structure.bounding_box() {
                min = min.min(bb_min);
                max = max.max(bb_max);
                has_extent = true;
            }
        }

        if has_extent {
            self.bounding_box = (min, max);
            self.length_scale = (max - min).length();
        } else {
            self.bounding_box = (Vec3::ZERO, Vec3::ONE);
            self.length_scale = 1.0;
        }
    }

    /// Returns the registration epoch for `name`, or `None` if no structure
    /// with that name is currently registered through this context.
    ///
    /// An epoch value identifies one particular binding of the name: it
    /// changes when the name is re-registered and disappears when the
    /// structure is removed.
    #[must_use]
    pub fn registration_epoch(&self, name: &str) -> Option<u64> {
        self.registration_epochs.get(name).copied()
    }

    fn bump_epoch(&mut self, name: &str) {
        self.epoch_counter += 1;
        self.registration_epochs
            .insert(name.to_string(), self.epoch_counter);
    }

    /// Registers a structure, replacing any existing one of the same type and
    /// name.
    ///
    /// Event handlers bound to a replaced structure are dropped with it: they
    /// were registered against the old instance's elements.
    pub fn register_structure(&mut self, structure: Box<dyn Structure>) {
        let name = structure.name().to_string();
        if let Some(replaced) = self.registry.register(structure) {
            if self.options.warn_on_replace {
                log::warn!(
                    "structure '{}' of type {} already existed; replaced",
                    name,
                    replaced.type_name()
                );
            }
            self.events.clear_structure(&name);
        }
        self.bump_epoch(&name);
        if self.options.auto_compute_scene_extents {
            self.update_extents();
        }
    }

    /// Removes a structure by type and name, along with its event handlers.
    ///
    /// Returns whether a structure was removed.
    pub fn remove_structure(&mut self, type_name: &str, name: &str) -> bool {
        let removed = self.registry.remove(type_name, name).is_some();
        if removed {
            self.events.clear_structure(name);
            self.registration_epochs.remove(name);
            if self.options.auto_compute_scene_extents {
                self.update_extents();
            }
        }
        removed
    }

    /// Removes every structure and all registered event handlers.
    pub fn clear_all_structures(&mut self) {
        self.registry.clear();
        self.events.clear_all();
        self.registration_epochs.clear();
        if self.options.auto_compute_scene_extents {
            self.update_extents();
        }
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program.
pub fn init_context() -> Result<()> {
    let context = RwLock::new(Context::default());

    CONTEXT
        .set(context)
        .map_err(|_| VizError::AlreadyInitialized)?;

    with_context_mut(|ctx| {
        ctx.initialized = true;
    });

    Ok(())
}

/// Returns whether the context has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if vizbridge has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("vizbridge not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if vizbridge has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("vizbridge not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Try to access the global context for reading.
///
/// Returns `None` if vizbridge has not been initialized.
pub fn try_with_context<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get()?;
    let guard = lock.read().ok()?;
    Some(f(&guard))
}

/// Try to access the global context for writing.
///
/// Returns `None` if vizbridge has not been initialized.
pub fn try_with_context_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get()?;
    let mut guard = lock.write().ok()?;
    Some(f(&mut guard))
}

/// Shuts down the global context, dropping all structures, floating
/// quantities, and bound event handlers.
///
/// Note: Due to `OnceLock` semantics, the context cannot be re-initialized
/// after shutdown in the same process.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            ctx.initialized = false;
            ctx.registry.clear();
            ctx.floating_quantities.clear();
            ctx.events.clear_all();
            ctx.registration_epochs.clear();
        }
    }
}
