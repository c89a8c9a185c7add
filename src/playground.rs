use glam::Vec2;
use tracing::info;

use crate::camera::{Camera, CameraUniform};
use crate::config::{ControlSettings, PlaygroundConfig};
use crate::effect::{CameraEffect, CameraShake, EffectTick};
use crate::input::{Action, ActionMap, DragHandler, InputState};
use crate::sprite::{ImageQuad, ImageTransform};

/// Result of one [`Playground::update`] tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Exit was requested this frame.
    pub exit: bool,
    /// New camera transform to push to the renderer, if the camera changed.
    pub projection: Option<CameraUniform>,
    /// The single draw call for this frame.
    pub quad: ImageQuad,
    pub shake: EffectTick,
}

/// The demo itself: one camera, one image, one shake effect and a drag handler.
///
/// Owns the only [`Camera`]; the effect and the drag handler borrow it per call.
pub struct Playground {
    camera: Camera,
    shake: CameraShake,
    drag: DragHandler,
    image: ImageTransform,
    actions: ActionMap<Action>,
    controls: ControlSettings,
    /// A pointer callback moved the camera since the last tick.
    pointer_moved: bool,
}

impl Playground {
    pub fn new(config: &PlaygroundConfig, shake_speed: i32, image_size: Vec2) -> Self {
        let width = config.window.width as f32;
        let height = config.window.height as f32;

        let shake = CameraShake::new(
            config.shake.duration,
            config.shake.intensity,
            shake_speed,
            config.shake.style,
        );
        info!(
            speed = shake_speed,
            interval = shake.speed(),
            duration = config.shake.duration,
            style = ?config.shake.style,
            "playground ready"
        );

        Self {
            camera: Camera::new(width, height),
            shake,
            drag: DragHandler::new(width, height, config.controls.modifier_latch),
            image: ImageTransform::new(image_size.x, image_size.y),
            actions: Action::default_bindings(),
            controls: config.controls.clone(),
            pointer_moved: false,
        }
    }

    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn shake(&self) -> &CameraShake { &self.shake }
    pub fn image(&self) -> &ImageTransform { &self.image }
    pub fn drag(&self) -> &DragHandler { &self.drag }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
        self.camera.update();
        self.drag.resize(width, height);
        self.pointer_moved = true;
    }

    // ── Pointer callbacks ─────────────────────────────────────────────────

    pub fn pointer_down(&mut self, input: &InputState, x: f32, y: f32) {
        let modifier = self.actions.is_held(Action::Modifier, input);
        self.drag.on_pointer_down(&self.camera, x, y, modifier);
    }

    pub fn pointer_drag(&mut self, input: &InputState, x: f32, y: f32) {
        let modifier = self.actions.is_held(Action::Modifier, input);
        if self.drag.on_pointer_drag(&mut self.camera, x, y, modifier) {
            self.pointer_moved = true;
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag.on_pointer_up();
    }

    // ── Frame ─────────────────────────────────────────────────────────────

    /// One tick: keyboard, shake, then the draw call.
    pub fn update(&mut self, input: &InputState) -> Frame {
        let camera_input = self.poll_camera_keys(input);
        let exit = self.actions.is_pressed(Action::Exit, input);
        self.poll_image_keys(input);

        if camera_input {
            self.camera.update();
        }
        let mut camera_changed = camera_input || std::mem::take(&mut self.pointer_moved);

        if self.actions.is_pressed(Action::Shake, input) {
            self.shake.start(&mut self.camera);
            camera_changed = true;
        }

        let shake = self.shake.play(&mut self.camera);
        if shake != EffectTick::Idle {
            camera_changed = true;
        }

        if exit {
            info!("exit requested");
        }

        Frame {
            exit,
            projection: camera_changed.then(|| self.camera.combined()),
            quad: self.image.quad(),
            shake,
        }
    }

    /// Held keys: pan, or zoom/rotate with the modifier. Returns whether any fired.
    fn poll_camera_keys(&mut self, input: &InputState) -> bool {
        let modifier = self.actions.is_held(Action::Modifier, input);
        let c = &self.controls;
        let mut fired = false;

        if self.actions.is_held(Action::CameraUp, input) {
            if modifier {
                self.camera.zoom_by(c.zoom_step);
            } else {
                self.camera.translate(0.0, c.pan_step);
            }
            fired = true;
        }
        if self.actions.is_held(Action::CameraDown, input) {
            if modifier {
                self.camera.zoom_by(-c.zoom_step);
            } else {
                self.camera.translate(0.0, -c.pan_step);
            }
            fired = true;
        }
        if self.actions.is_held(Action::CameraLeft, input) {
            if modifier {
                self.camera.rotate(c.rotate_step);
            } else {
                self.camera.translate(-c.pan_step, 0.0);
            }
            fired = true;
        }
        if self.actions.is_held(Action::CameraRight, input) {
            if modifier {
                self.camera.rotate(-c.rotate_step);
            } else {
                self.camera.translate(c.pan_step, 0.0);
            }
            fired = true;
        }

        fired
    }

    /// Discrete presses: move the image, or rotate it horizontally with the modifier.
    fn poll_image_keys(&mut self, input: &InputState) {
        let modifier = self.actions.is_held(Action::Modifier, input);
        let step = self.controls.image_step;
        let turn = self.controls.image_rotate_step;

        if self.actions.is_pressed(Action::ImageUp, input) {
            self.image.translate(0.0, step);
        }
        if self.actions.is_pressed(Action::ImageDown, input) {
            self.image.translate(0.0, -step);
        }
        if self.actions.is_pressed(Action::ImageLeft, input) {
            if modifier {
                self.image.rotate(turn);
            } else {
                self.image.translate(-step, 0.0);
            }
        }
        if self.actions.is_pressed(Action::ImageRight, input) {
            if modifier {
                self.image.rotate(-turn);
            } else {
                self.image.translate(step, 0.0);
            }
        }
    }
}
