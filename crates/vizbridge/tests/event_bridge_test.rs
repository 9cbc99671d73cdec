//! Integration tests for the pick/hover event bridge.
//!
//! Runs as a single combined test: the context and the interrupt flag are
//! process-wide, so the scenarios must execute sequentially.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vizbridge::*;

fn recording_callback(
    log: &Arc<Mutex<Vec<usize>>>,
) -> impl FnMut(usize) -> Result<()> + Send + Sync {
    let log = Arc::clone(log);
    move |index| {
        log.lock().unwrap().push(index);
        Ok(())
    }
}

#[test]
fn test_event_bridge() {
    let _ = env_logger::builder().is_test(true).try_init();

    init().expect("init failed");
    clear_interrupt();

    let points = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let cloud = register_point_cloud("cloud1", points.clone());

    // Scenario: pick handler receives the picked index, dispatch succeeds.
    let picks = Arc::new(Mutex::new(Vec::new()));
    cloud.set_pick_callback(recording_callback(&picks)).unwrap();

    dispatch_pick("cloud1", 42).unwrap();
    assert_eq!(*picks.lock().unwrap(), vec![42]);

    // Scenario: hover event with only a pick handler registered is a no-op.
    dispatch_hover("cloud1", 7).unwrap();
    assert_eq!(*picks.lock().unwrap(), vec![42]);

    // Scenario: dispatch on a structure with no handlers at all is a no-op.
    register_point_cloud("cloud2", points.clone());
    dispatch_pick("cloud2", 0).unwrap();

    // Scenario: re-registration replaces; only the newest handler runs.
    let later_picks = Arc::new(Mutex::new(Vec::new()));
    cloud
        .set_pick_callback(recording_callback(&later_picks))
        .unwrap();
    dispatch_pick("cloud1", 5).unwrap();
    assert_eq!(*picks.lock().unwrap(), vec![42]);
    assert_eq!(*later_picks.lock().unwrap(), vec![5]);

    // Scenario: a pending interrupt preempts the handler.
    request_interrupt();
    let err = dispatch_pick("cloud1", 9).unwrap_err();
    assert!(matches!(err, VizError::Interrupted));
    assert_eq!(*later_picks.lock().unwrap(), vec![5]);

    // The flag was consumed when Interrupted was raised; dispatching again
    // succeeds without another request.
    assert!(!interrupt_pending());
    dispatch_pick("cloud1", 9).unwrap();
    assert_eq!(*later_picks.lock().unwrap(), vec![5, 9]);

    // An interrupt is only consumed at a checkpoint: dispatch without a
    // handler never reaches one.
    request_interrupt();
    dispatch_hover("cloud1", 1).unwrap();
    assert!(interrupt_pending());
    clear_interrupt();

    // Scenario: handler errors propagate unchanged to the dispatching loop.
    cloud
        .set_pick_callback(|index| {
            if index == 13 {
                Err(VizError::Handler("refusing index 13".into()))
            } else {
                Ok(())
            }
        })
        .unwrap();
    dispatch_pick("cloud1", 12).unwrap();
    let err = dispatch_pick("cloud1", 13).unwrap_err();
    assert!(matches!(err, VizError::Handler(_)));
    // A failed handler stays registered.
    let err = dispatch_pick("cloud1", 13).unwrap_err();
    assert!(matches!(err, VizError::Handler(_)));

    // Scenario: hover handlers are independent of pick handlers.
    let hovers = Arc::new(Mutex::new(Vec::new()));
    cloud.set_hover_callback(recording_callback(&hovers)).unwrap();
    dispatch_hover("cloud1", 2).unwrap();
    assert_eq!(*hovers.lock().unwrap(), vec![2]);

    // Scenario: clearing a callback makes dispatch a no-op again.
    assert!(cloud.clear_hover_callback());
    assert!(!cloud.clear_hover_callback());
    dispatch_hover("cloud1", 3).unwrap();
    assert_eq!(*hovers.lock().unwrap(), vec![2]);

    // Scenario: registering against a missing structure is an error.
    let err = set_event_handler("ghost", EventKind::Pick, Box::new(|_| Ok(())))
        .unwrap_err();
    assert!(matches!(err, VizError::StructureNotFound(_)));

    // Scenario: removing a structure drops its handlers; a new structure
    // under the same name starts clean.
    remove_point_cloud("cloud1");
    let reborn = register_point_cloud("cloud1", points.clone());
    let ghost_picks = Arc::new(Mutex::new(Vec::new()));
    dispatch_pick("cloud1", 1).unwrap();
    assert!(ghost_picks.lock().unwrap().is_empty());

    // Scenario: replacement registration (same name, no explicit removal)
    // also drops the old structure's handlers.
    reborn
        .set_pick_callback(recording_callback(&ghost_picks))
        .unwrap();
    register_point_cloud("cloud1", points);
    dispatch_pick("cloud1", 4).unwrap();
    assert!(ghost_picks.lock().unwrap().is_empty());

    // Scenario: a handler that replaces its own structure from inside its
    // invocation does not survive onto the replacement.
    let replacer = get_point_cloud("cloud1").unwrap();
    let replacer_hits = Arc::new(AtomicUsize::new(0));
    {
        let hits = Arc::clone(&replacer_hits);
        replacer
            .set_pick_callback(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
                register_point_cloud("cloud1", vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
                Ok(())
            })
            .unwrap();
    }
    dispatch_pick("cloud1", 0).unwrap();
    assert_eq!(replacer_hits.load(Ordering::SeqCst), 1);
    // The replacement starts clean; the old handler must not fire again.
    dispatch_pick("cloud1", 0).unwrap();
    assert_eq!(replacer_hits.load(Ordering::SeqCst), 1);

    // Same under an explicit remove-then-register inside the handler.
    {
        let hits = Arc::clone(&replacer_hits);
        replacer
            .set_pick_callback(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
                remove_point_cloud("cloud1");
                register_point_cloud("cloud1", vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
                Ok(())
            })
            .unwrap();
    }
    dispatch_pick("cloud1", 0).unwrap();
    dispatch_pick("cloud1", 0).unwrap();
    assert_eq!(replacer_hits.load(Ordering::SeqCst), 2);

    // Scenario: handlers may call back into the API (the bridge releases the
    // context lock while user code runs).
    let reentrant = get_point_cloud("cloud1").unwrap();
    let seen = Arc::new(AtomicUsize::new(0));
    {
        let seen = Arc::clone(&seen);
        reentrant
            .set_pick_callback(move |index| {
                assert!(has_point_cloud("cloud1"));
                assert!(with_point_cloud_ref("cloud1", |pc| pc.num_points()).is_some());
                seen.store(index, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();
    }
    dispatch_pick("cloud1", 11).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 11);

    shutdown();
}
