//! Structure registry for managing registered structures.

use std::collections::HashMap;

use crate::structure::Structure;

/// Registry for all structures in the scene.
///
/// Structures are organized by type name and then by instance name.
#[derive(Default)]
pub struct Registry {
    /// Map from type name -> (instance name -> structure)
    structures: HashMap<String, HashMap<String, Box<dyn Structure>>>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structure with the registry.
    ///
    /// Names are unique per type: registering under an existing name replaces
    /// the previous structure, which is returned so the caller can retire
    /// state tied to it (event handlers in particular).
    pub fn register(&mut self, structure: Box<dyn Structure>) -> Option<Box<dyn Structure>> {
        let type_name = structure.type_name().to_string();
        let name = structure.name().to_string();

        self.structures
            .entry(type_name)
            .or_default()
            .insert(name, structure)
    }

    /// Gets a reference to a structure by type and name.
    pub fn get(&self, type_name: &str, name: &str) -> Option<&dyn Structure> {
        self.structures
            .get(type_name)
            .and_then(|m| m.get(name))
            .map(std::convert::AsRef::as_ref)
    }

    /// Gets a mutable reference to a structure by type and name.
    pub fn get_mut(&mut self, type_name: &str, name: &str) -> Option<&mut Box<dyn Structure>> {
        self.structures.get_mut(type_name)?.get_mut(name)
    }

    /// Checks if a structure with the given type and name exists.
    #[must_use]
    pub fn contains(&self, type_name: &str, name: &str) -> bool {
        self.structures
            .get(type_name)
            .is_some_and(|m| m.contains_key(name))
    }

    /// Checks if a structure with the given name exists under any type.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.structures.values().any(|m| m.contains_key(name))
    }

    /// Returns the type name of the structure registered under `name`, under
    /// any type.
    #[must_use]
    pub fn type_name_of(&self, name: &str) -> Option<&'static str> {
        self.structures
            .values()
            .find_map(|m| m.get(name))
            .map(|s| s.type_name())
    }

    /// Removes a structure by type and name.
    pub fn remove(&mut self, type_name: &str, name: &str) -> Option<Box<dyn Structure>> {
        self.structures
            .get_mut(type_name)
            .and_then(|m| m.remove(name))
    }

    /// Removes all structures from the registry.
    pub fn clear(&mut self) {
        self.structures.clear();
    }

    /// Returns an iterator over all structures.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Structure> {
        self.structures
            .values()
            .flat_map(|m| m.values())
            .map(std::convert::AsRef::as_ref)
    }

    /// Returns a mutable iterator over all structures.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Structure>> + '_ {
        self.structures.values_mut().flat_map(|m| m.values_mut())
    }

    /// Returns the total number of registered structures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.values().map(HashMap::len).sum()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.values().all(HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;

    struct Dummy {
        name: String,
        transform: Mat4,
        enabled: bool,
    }

    impl Dummy {
        fn boxed(name: &str) -> Box<dyn Structure> {
            Box::new(Self {
                name: name.to_string(),
                transform: Mat4::IDENTITY,
                enabled: true,
            })
        }
    }

    impl Structure for Dummy {
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
            "Dummy"
        }
        fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
            None
        }
        fn length_scale(&self) -> f32 {
            1.0
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
        fn refresh(&mut self) {}
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        assert!(registry.register(Dummy::boxed("a")).is_none());
        assert!(registry.contains("Dummy", "a"));
        assert!(!registry.contains("Dummy", "b"));
        assert!(registry.get("Dummy", "a").is_some());
        assert_eq!(registry.type_name_of("a"), Some("Dummy"));
        assert_eq!(registry.type_name_of("b"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let mut registry = Registry::new();
        registry.register(Dummy::boxed("a"));
        registry
            .get_mut("Dummy", "a")
            .unwrap()
            .set_enabled(false);

        // Second registration under the same name hands back the old one.
        let replaced = registry.register(Dummy::boxed("a")).unwrap();
        assert!(!replaced.is_enabled());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("Dummy", "a").unwrap().is_enabled());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = Registry::new();
        registry.register(Dummy::boxed("a"));
        registry.register(Dummy::boxed("b"));

        assert!(registry.remove("Dummy", "a").is_some());
        assert!(registry.remove("Dummy", "a").is_none());
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }
}
