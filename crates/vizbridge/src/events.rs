//! Event bridge entry points.
//!
//! The host UI loop calls [`dispatch_pick`]/[`dispatch_hover`] once per
//! qualifying event per frame; user code registers handlers through
//! [`set_event_handler`] or the convenience methods on
//! [`PointCloudHandle`](crate::PointCloudHandle).

use vizbridge_core::error::{Result, VizError};
use vizbridge_core::events::{EventHandler, EventKind};
use vizbridge_core::interrupt;
use vizbridge_core::state::with_context_mut;

/// Registers `handler` for `(structure, kind)`, replacing any prior handler.
///
/// Returns `StructureNotFound` if no structure with that name is registered.
pub fn set_event_handler(structure: &str, kind: EventKind, handler: EventHandler) -> Result<()> {
    with_context_mut(|ctx| {
        if !ctx.registry.contains_name(structure) {
            return Err(VizError::StructureNotFound(structure.to_string()));
        }
        ctx.events.set(structure, kind, handler);
        Ok(())
    })
}

/// Clears the handler for `(structure, kind)`. Returns whether one was
/// registered.
pub fn clear_event_handler(structure: &str, kind: EventKind) -> bool {
    with_context_mut(|ctx| ctx.events.clear(structure, kind))
}

/// Relays a structure-level UI event to the registered handler.
///
/// No-op when no handler is registered for `(structure, kind)`. Otherwise the
/// cooperative interrupt flag is consumed first: a pending request surfaces
/// as [`VizError::Interrupted`] and the handler is not invoked. Handler
/// errors propagate unchanged.
///
/// The handler runs outside the context lock, so it may call back into the
/// registration API (including replacing itself).
pub fn dispatch_event(structure: &str, kind: EventKind, index: usize) -> Result<()> {
    let (handler, epoch) = with_context_mut(|ctx| {
        (
            ctx.events.take(structure, kind),
            ctx.registration_epoch(structure),
        )
    });
    let Some(mut handler) = handler else {
        return Ok(());
    };

    // Checkpoint: a host interrupt request preempts the user callback.
    let result = if interrupt::take_interrupt() {
        Err(VizError::Interrupted)
    } else {
        log::debug!("dispatching {kind:?} on '{structure}' (index {index})");
        handler(index)
    };

    // Put the handler back unless the callback registered a replacement for
    // itself (the newer registration wins), or removed or re-registered the
    // structure during its own invocation. The epoch comparison catches a
    // remove-then-register under the same name, which `contains` would not.
    with_context_mut(|ctx| {
        if epoch.is_some() && ctx.registration_epoch(structure) == epoch {
            ctx.events.restore(structure, kind, handler);
        }
    });

    result
}

/// Relays a pick event on `structure` carrying the picked element index.
pub fn dispatch_pick(structure: &str, index: usize) -> Result<()> {
    dispatch_event(structure, EventKind::Pick, index)
}

/// Relays a hover event on `structure` carrying the hovered element index.
pub fn dispatch_hover(structure: &str, index: usize) -> Result<()> {
    dispatch_event(structure, EventKind::Hover, index)
}
