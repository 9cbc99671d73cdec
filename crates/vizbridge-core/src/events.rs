//! Pick/hover event bridge.
//!
//! The native UI loop reports element-level pick and hover events; user code
//! registers handlers per `(structure, kind)`. [`HandlerTable::dispatch`]
//! relays an event to the registered handler, polling the cooperative
//! interrupt flag first so that a host interrupt request is never stuck
//! behind user callback work.

use std::collections::HashMap;

use crate::error::{Result, VizError};
use crate::interrupt;

/// The kind of structure-level UI event a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The user clicked/selected an element.
    Pick,
    /// The cursor is over an element.
    Hover,
}

/// A user-supplied event handler.
///
/// Receives the picked/hovered element index. Errors terminate the current
/// dispatch and propagate unchanged to the caller; the bridge never swallows
/// them. Handlers with no failure mode of their own just return `Ok(())`.
pub type EventHandler = Box<dyn FnMut(usize) -> Result<()> + Send + Sync>;

/// Per-structure table of registered event handlers.
///
/// At most one handler is active per `(structure, kind)`; registering a new
/// one drops the previous closure.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<(String, EventKind), EventHandler>,
}

impl HandlerTable {
    /// Creates an empty handler table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `(structure, kind)`, replacing any prior one.
    pub fn set(&mut self, structure: impl Into<String>, kind: EventKind, handler: EventHandler) {
        let structure = structure.into();
        if self
            .handlers
            .insert((structure.clone(), kind), handler)
            .is_some()
        {
            log::debug!("replaced {kind:?} handler on structure '{structure}'");
        }
    }

    /// Clears the handler for `(structure, kind)`. Returns whether one was
    /// registered.
    pub fn clear(&mut self, structure: &str, kind: EventKind) -> bool {
        self.handlers
            .remove(&(structure.to_string(), kind))
            .is_some()
    }

    /// Clears all handlers registered for `structure`.
    ///
    /// Called when a structure is removed or replaced so that stale closures
    /// do not outlive it.
    pub fn clear_structure(&mut self, structure: &str) {
        self.handlers.retain(|(name, _), _| name != structure);
    }

    /// Drops every registered handler.
    pub fn clear_all(&mut self) {
        self.handlers.clear();
    }

    /// Returns whether a handler is registered for `(structure, kind)`.
    #[must_use]
    pub fn contains(&self, structure: &str, kind: EventKind) -> bool {
        self.handlers
            .contains_key(&(structure.to_string(), kind))
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Removes and returns the handler for `(structure, kind)`.
    ///
    /// Used by dispatchers that must not hold a lock on the table while user
    /// code runs; pair with [`HandlerTable::restore`].
    pub fn take(&mut self, structure: &str, kind: EventKind) -> Option<EventHandler> {
        self.handlers.remove(&(structure.to_string(), kind))
    }

    /// Puts a handler taken with [`HandlerTable::take`] back, unless the slot
    /// was filled in the meantime (a handler registered during its own
    /// invocation wins over the one being restored).
    pub fn restore(&mut self, structure: impl Into<String>, kind: EventKind, handler: EventHandler) {
        self.handlers
            .entry((structure.into(), kind))
            .or_insert(handler);
    }

    /// Relays an event to the handler registered for `(structure, kind)`.
    ///
    /// No-op when no handler is registered. Otherwise the interrupt flag is
    /// consumed first: a pending request surfaces as
    /// [`VizError::Interrupted`] and the handler is not invoked. Handler
    /// errors propagate unchanged.
    pub fn dispatch(&mut self, structure: &str, kind: EventKind, index: usize) -> Result<()> {
        let Some(handler) = self.handlers.get_mut(&(structure.to_string(), kind)) else {
            return Ok(());
        };

        // Checkpoint: a blocked host must regain control before user code
        // runs, not after.
        if interrupt::take_interrupt() {
            return Err(VizError::Interrupted);
        }

        handler(index)
    }
}
