use glam::Vec2;
use serde::Deserialize;
use tracing::debug;

use crate::camera::Camera;

/// How long an observed modifier keeps a drag in rotate mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierLatch {
    /// Re-evaluated for every gesture: a new pointer-down starts in pan mode.
    #[default]
    PerGesture,
    /// Once seen, every later drag of this handler rotates.
    Sticky,
}

/// Snapshot taken on pointer-down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    pub start_camera: Vec2,
    pub start_pointer: Vec2,
    /// The modifier was observed during this gesture.
    pub rotating: bool,
}

/// Turns pointer drags into camera pan (or rotation while shift is held).
///
/// Pointer coordinates are in screen pixels with y growing downward.
#[derive(Clone, Debug)]
pub struct DragHandler {
    session: Option<DragSession>,
    latch: ModifierLatch,
    /// Handler-wide latch used by [`ModifierLatch::Sticky`].
    latched: bool,
    viewport: Vec2,
}

impl DragHandler {
    pub fn new(viewport_width: f32, viewport_height: f32, latch: ModifierLatch) -> Self {
        Self {
            session: None,
            latch,
            latched: false,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport = Vec2::new(viewport_width, viewport_height);
    }

    pub fn on_pointer_down(&mut self, camera: &Camera, x: f32, y: f32, modifier_held: bool) {
        let rotating = modifier_held || (self.latch == ModifierLatch::Sticky && self.latched);
        self.session = Some(DragSession {
            start_camera: camera.position,
            start_pointer: Vec2::new(x, y),
            rotating,
        });
        if modifier_held {
            self.latched = true;
        }
        debug!(x, y, rotating, "drag started");
    }

    /// Apply one drag event. Returns whether the camera was touched.
    pub fn on_pointer_drag(&mut self, camera: &mut Camera, x: f32, y: f32, modifier_held: bool) -> bool {
        let inside = self.is_inside(x, y);
        let Some(session) = self.session.as_mut() else { return false };

        if modifier_held {
            session.rotating = true;
            self.latched = true;
        }

        let diff = Vec2::new(x, y) - session.start_pointer;

        if session.rotating {
            // Measured from the drag origin, so every event compounds.
            camera.rotate(diff.x + diff.y);
        } else if inside {
            // Screen y grows downward, world y grows upward.
            camera.set_position(Vec2::new(
                session.start_camera.x + diff.x,
                session.start_camera.y - diff.y,
            ));
        } else {
            camera.set_position(session.start_camera);
        }

        camera.update();
        true
    }

    pub fn on_pointer_up(&mut self) {
        if self.session.take().is_some() {
            debug!("drag ended");
        }
    }

    fn is_inside(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.viewport.x - 1.0 && y <= self.viewport.y - 1.0
    }
}
