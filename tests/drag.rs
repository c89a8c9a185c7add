use camera_playground::camera::Camera;
use camera_playground::input::{DragHandler, ModifierLatch};
use glam::Vec2;

fn camera_at_origin() -> Camera {
    let mut cam = Camera::new(640.0, 480.0);
    cam.set_position(Vec2::ZERO);
    cam.update();
    cam
}

fn handler(latch: ModifierLatch) -> DragHandler {
    DragHandler::new(640.0, 480.0, latch)
}

// ── Pan ──────────────────────────────────────────────────────────────────────

/// Screen y grows downward, so dragging down moves the camera toward negative world y.
#[test]
fn drag_pans_with_inverted_y() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);

    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    assert!(drag.on_pointer_drag(&mut cam, 150.0, 120.0, false));

    assert_eq!(cam.position, Vec2::new(50.0, -20.0));
    assert_eq!(cam.rotation, 0.0);
    assert!(!cam.is_dirty(), "drag should push the updated transform");
}

/// Pan is measured from the drag origin, so the last event wins.
#[test]
fn pan_is_absolute_from_drag_origin() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);

    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    drag.on_pointer_drag(&mut cam, 400.0, 300.0, false);
    drag.on_pointer_drag(&mut cam, 110.0, 90.0, false);

    assert_eq!(cam.position, Vec2::new(10.0, 10.0));
}

#[test]
fn pointer_outside_viewport_snaps_back_to_origin() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);
    drag.on_pointer_down(&cam, 100.0, 100.0, false);

    for (x, y) in [(-1.0, 100.0), (640.0, 100.0), (100.0, -5.0), (100.0, 480.0)] {
        drag.on_pointer_drag(&mut cam, 150.0, 150.0, false);
        assert_ne!(cam.position, Vec2::ZERO);
        drag.on_pointer_drag(&mut cam, x, y, false);
        assert_eq!(cam.position, Vec2::ZERO, "pointer at ({x}, {y}) should snap back");
    }

    // The drag is still live after leaving the viewport.
    assert!(drag.is_dragging());
    drag.on_pointer_drag(&mut cam, 120.0, 100.0, false);
    assert_eq!(cam.position, Vec2::new(20.0, 0.0));
}

#[test]
fn viewport_edges_are_inside() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);
    drag.on_pointer_down(&cam, 0.0, 0.0, false);
    drag.on_pointer_drag(&mut cam, 639.0, 479.0, false);
    assert_eq!(cam.position, Vec2::new(639.0, -479.0));
}

#[test]
fn resize_moves_the_bounds() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);
    drag.resize(1000.0, 800.0);
    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    drag.on_pointer_drag(&mut cam, 900.0, 700.0, false);
    assert_eq!(cam.position, Vec2::new(800.0, -600.0));
}

#[test]
fn drag_without_pointer_down_is_ignored() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);
    assert!(!drag.on_pointer_drag(&mut cam, 150.0, 120.0, false));
    assert_eq!(cam.position, Vec2::ZERO);
}

#[test]
fn pointer_up_ends_session() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);
    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    assert!(drag.session().is_some());
    drag.on_pointer_up();
    assert!(drag.session().is_none());
    assert!(!drag.on_pointer_drag(&mut cam, 150.0, 120.0, false));
}

// ── Rotate ───────────────────────────────────────────────────────────────────

#[test]
fn modifier_drag_rotates_by_summed_delta() {
    let mut cam = camera_at_origin();
    cam.rotate(5.0);
    let mut drag = handler(ModifierLatch::PerGesture);

    drag.on_pointer_down(&cam, 100.0, 100.0, true);
    drag.on_pointer_drag(&mut cam, 150.0, 120.0, true);

    assert_eq!(cam.rotation, 5.0 + 70.0);
    assert_eq!(cam.position, Vec2::ZERO, "rotating must not pan");
}

/// Every drag event adds the full delta from the origin again.
#[test]
fn rotation_compounds_per_event() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);

    drag.on_pointer_down(&cam, 100.0, 100.0, true);
    drag.on_pointer_drag(&mut cam, 150.0, 120.0, true);
    drag.on_pointer_drag(&mut cam, 150.0, 120.0, true);

    assert_eq!(cam.rotation, 140.0);
}

#[test]
fn rotation_ignores_viewport_bounds() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);
    drag.on_pointer_down(&cam, 100.0, 100.0, true);
    drag.on_pointer_drag(&mut cam, 700.0, 100.0, true);
    assert_eq!(cam.rotation, 600.0);
}

/// Once the modifier is seen mid-gesture the rest of the gesture rotates.
#[test]
fn modifier_seen_mid_gesture_latches_for_the_gesture() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);

    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    drag.on_pointer_drag(&mut cam, 110.0, 100.0, false);
    assert_eq!(cam.position, Vec2::new(10.0, 0.0));

    drag.on_pointer_drag(&mut cam, 120.0, 100.0, true);
    assert_eq!(cam.rotation, 20.0);

    drag.on_pointer_drag(&mut cam, 130.0, 100.0, false);
    assert_eq!(cam.rotation, 50.0);
    assert_eq!(cam.position, Vec2::new(10.0, 0.0));
}

// ── Latch modes ──────────────────────────────────────────────────────────────

#[test]
fn per_gesture_latch_resets_on_pointer_down() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::PerGesture);

    drag.on_pointer_down(&cam, 100.0, 100.0, true);
    drag.on_pointer_drag(&mut cam, 110.0, 100.0, true);
    drag.on_pointer_up();
    assert_eq!(cam.rotation, 10.0);

    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    drag.on_pointer_drag(&mut cam, 130.0, 100.0, false);
    assert_eq!(cam.rotation, 10.0);
    assert_eq!(cam.position, Vec2::new(30.0, 0.0));
}

#[test]
fn sticky_latch_keeps_rotating_forever() {
    let mut cam = camera_at_origin();
    let mut drag = handler(ModifierLatch::Sticky);

    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    drag.on_pointer_drag(&mut cam, 110.0, 100.0, true);
    drag.on_pointer_up();
    assert_eq!(cam.rotation, 10.0);

    drag.on_pointer_down(&cam, 100.0, 100.0, false);
    drag.on_pointer_drag(&mut cam, 130.0, 100.0, false);
    assert_eq!(cam.rotation, 40.0);
    assert_eq!(cam.position, Vec2::ZERO);
}
