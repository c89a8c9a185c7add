pub mod shake;

pub use shake::{CameraShake, ShakeStyle};

use crate::camera::{Camera, CameraUniform};

/// Frame counter shared by every camera effect.
///
/// A clock starts idle (`progress == duration`) and only runs after
/// [`EffectClock::restart`]. A non-positive duration never runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EffectClock {
    duration: i32,
    progress: i32,
}

impl EffectClock {
    pub fn new(duration: i32) -> Self {
        Self { duration, progress: duration }
    }

    pub fn duration(&self) -> i32 { self.duration }
    pub fn progress(&self) -> i32 { self.progress }

    pub fn is_running(&self) -> bool {
        self.progress < self.duration
    }

    /// Re-arm the clock from frame zero.
    pub fn restart(&mut self) {
        self.progress = 0;
    }

    pub fn advance(&mut self) {
        self.progress += 1;
    }

    /// Linear decay factor `1 - progress / duration`, in `[0, 1]` while running.
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration <= 0 {
            return 0.0;
        }
        1.0 - self.progress as f32 / self.duration as f32
    }
}

/// What a single [`CameraEffect::play`] step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectTick {
    /// Effect was not active; nothing happened.
    Idle,
    /// Progress advanced without moving the camera.
    Running,
    /// Progress advanced and the camera was moved.
    Triggered,
    /// The step that deactivated the effect; the camera was recentred.
    Finished,
}

/// A time-bounded animation that mutates a camera over a fixed number of frames.
///
/// The camera is never stored; it is handed in for every call.
pub trait CameraEffect {
    fn clock(&self) -> &EffectClock;
    fn clock_mut(&mut self) -> &mut EffectClock;

    fn is_active(&self) -> bool {
        self.clock().is_running()
    }

    /// Re-arm the effect. Implementors that touch the camera on start
    /// should still call `self.clock_mut().restart()`.
    fn start(&mut self, _camera: &mut Camera) {
        self.clock_mut().restart();
    }

    /// Per-frame tick.
    fn play(&mut self, camera: &mut Camera) -> EffectTick;

    /// Recompute the camera's combined transform after a mutation.
    fn update_camera(&self, camera: &mut Camera) -> CameraUniform {
        camera.update()
    }
}
