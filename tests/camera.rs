use camera_playground::camera::{Camera, CameraUniform};
use glam::Vec2;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

// ── Construction ─────────────────────────────────────────────────────────────

#[test]
fn new_camera_is_centred_on_viewport() {
    let cam = Camera::new(640.0, 480.0);
    assert_eq!(cam.position, Vec2::new(320.0, 240.0));
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.rotation, 0.0);
    assert!(!cam.is_dirty(), "constructor should compute the transform");
}

/// World (0, 0) is the bottom-left corner of the screen at startup.
#[test]
fn world_origin_maps_to_bottom_left() {
    let cam = Camera::new(640.0, 480.0);
    let ndc = cam.world_to_ndc(Vec2::ZERO);
    assert!(approx(ndc, Vec2::new(-1.0, -1.0)), "got {ndc:?}");
}

#[test]
fn identity_ortho_maps_origin_to_bottom_left() {
    let uniform = CameraUniform::identity_ortho(800.0, 600.0);
    let p = uniform.matrix().project_point3(glam::Vec3::ZERO);
    assert!((p.x + 1.0).abs() < 1e-6);
    assert!((p.y + 1.0).abs() < 1e-6);
}

// ── Mutation & update ────────────────────────────────────────────────────────

#[test]
fn mutators_mark_dirty_and_update_clears() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.translate(3.0, -4.0);
    assert!(cam.is_dirty());
    assert_eq!(cam.position, Vec2::new(323.0, 236.0));
    cam.update();
    assert!(!cam.is_dirty());

    cam.rotate(15.0);
    assert!(cam.is_dirty());
    cam.update();
    cam.zoom_by(0.5);
    assert!(cam.is_dirty());
}

#[test]
fn update_is_idempotent() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.translate(12.0, 7.0);
    cam.rotate(33.0);
    let first = cam.update();
    let second = cam.update();
    let third = cam.update();
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(cam.combined(), first);
}

#[test]
fn combined_is_stale_until_update() {
    let mut cam = Camera::new(640.0, 480.0);
    let before = cam.combined();
    cam.translate(50.0, 0.0);
    assert_eq!(cam.combined(), before);
    assert_ne!(cam.update(), before);
}

#[test]
fn camera_position_maps_to_screen_centre() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.set_position(Vec2::new(-75.0, 410.0));
    cam.update();
    let ndc = cam.world_to_ndc(Vec2::new(-75.0, 410.0));
    assert!(approx(ndc, Vec2::ZERO), "got {ndc:?}");
}

// ── Zoom ─────────────────────────────────────────────────────────────────────

#[test]
fn zoom_never_goes_negative() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.zoom_by(-0.1);
    assert!((cam.zoom - 0.9).abs() < 1e-6);
    cam.zoom_by(-5.0);
    assert_eq!(cam.zoom, 0.0);
}

/// Zero zoom is floored inside the projection so the matrix stays finite.
#[test]
fn zero_zoom_still_produces_finite_transform() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.zoom_by(-1.0);
    let uniform = cam.update();
    assert!(uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
}

/// Zoom 2 shows twice the area, so the old corner moves halfway to the centre.
#[test]
fn zoom_out_shows_more_world() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.zoom_by(1.0);
    cam.update();
    let ndc = cam.world_to_ndc(Vec2::ZERO);
    assert!(approx(ndc, Vec2::new(-0.5, -0.5)), "got {ndc:?}");
}

// ── Rotation ─────────────────────────────────────────────────────────────────

#[test]
fn positive_rotation_turns_world_clockwise() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.rotate(90.0);
    cam.update();
    // A point to the right of the camera ends up below the screen centre.
    let ndc = cam.world_to_ndc(Vec2::new(320.0 + 100.0, 240.0));
    assert!(approx(ndc, Vec2::new(0.0, -100.0 / 240.0)), "got {ndc:?}");
    // And a point above it ends up to the right.
    let ndc = cam.world_to_ndc(Vec2::new(320.0, 240.0 + 100.0));
    assert!(approx(ndc, Vec2::new(100.0 / 320.0, 0.0)), "got {ndc:?}");
}

#[test]
fn resize_changes_projection_extent() {
    let mut cam = Camera::new(640.0, 480.0);
    cam.resize(1280.0, 960.0);
    assert!(cam.is_dirty());
    cam.update();
    assert_eq!(cam.viewport(), Vec2::new(1280.0, 960.0));
    // Position is unchanged, so world origin now sits a quarter in from the corner.
    let ndc = cam.world_to_ndc(Vec2::ZERO);
    assert!(approx(ndc, Vec2::new(-0.5, -0.5)), "got {ndc:?}");
}
