use glam::Vec2;
use serde::Deserialize;
use tracing::debug;

use super::{CameraEffect, EffectClock, EffectTick};
use crate::camera::Camera;

/// Every trigger displaces the camera by this multiple of the current intensity.
const TRIGGER_GAIN: f32 = 10.0;

/// The user-facing speed is mapped onto a trigger interval of `SPEED_SCALE - speed` frames.
const SPEED_SCALE: i32 = 100;

/// How successive shake impulses are derived.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeStyle {
    /// Sign alternates from a fixed base magnitude that decays linearly.
    /// The camera offset is tracked and fully undone when the effect ends.
    #[default]
    Alternating,
    /// Each impulse is derived from the previous signed intensity, and only
    /// the last intensity is undone at the end. The camera may not return
    /// exactly to where it started.
    Compounding,
}

/// Decaying oscillation applied to a camera.
///
/// While active, every `speed` frames the camera is pushed by
/// `10 · intensity` on both axes, with intensity fading linearly to zero
/// over the effect's lifetime.
#[derive(Clone, Debug)]
pub struct CameraShake {
    clock: EffectClock,
    /// Magnitude configured by [`CameraShake::set_intensity`].
    base_intensity: f32,
    /// Current signed intensity; updated at every trigger.
    intensity: f32,
    /// Trigger interval in frames. Zero disables the effect.
    speed: i32,
    /// Sum of every translate not yet undone by a recentre.
    applied_offset: Vec2,
    /// Sign of the next alternating impulse.
    next_sign: f32,
    style: ShakeStyle,
}

impl CameraShake {
    pub fn new(duration: i32, intensity: f32, speed: i32, style: ShakeStyle) -> Self {
        let mut shake = Self {
            clock: EffectClock::new(duration),
            base_intensity: 0.0,
            intensity: 0.0,
            speed: 0,
            applied_offset: Vec2::ZERO,
            next_sign: -1.0,
            style,
        };
        shake.set_intensity(intensity);
        shake.set_speed(speed);
        shake
    }

    pub fn intensity(&self) -> f32 { self.intensity }
    pub fn base_intensity(&self) -> f32 { self.base_intensity }
    pub fn speed(&self) -> i32 { self.speed }
    pub fn style(&self) -> ShakeStyle { self.style }
    pub fn applied_offset(&self) -> Vec2 { self.applied_offset }

    /// Negative intensities are clamped to zero.
    pub fn set_intensity(&mut self, intensity: f32) {
        let intensity = intensity.max(0.0);
        self.base_intensity = intensity;
        self.intensity = intensity;
    }

    /// Larger speeds mean shorter intervals: the stored interval is `100 - speed`.
    /// Negative input, or input above 100, leaves an interval of zero (inactive).
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = if speed < 0 { 0 } else { (SPEED_SCALE - speed).max(0) };
    }

    fn shift(&mut self, camera: &mut Camera, amount: f32) {
        camera.translate(amount, amount);
        self.applied_offset += Vec2::splat(amount);
    }

    /// Pick the next signed intensity for a trigger at the current progress.
    fn next_intensity(&mut self) -> f32 {
        let decay = self.clock.remaining_fraction();
        match self.style {
            ShakeStyle::Alternating => {
                let signed = self.next_sign * self.base_intensity * decay;
                self.next_sign = -self.next_sign;
                signed
            }
            ShakeStyle::Compounding => -(self.intensity * decay),
        }
    }

    fn recentre(&mut self, camera: &mut Camera) {
        match self.style {
            ShakeStyle::Alternating => {
                let offset = self.applied_offset;
                camera.translate(-offset.x, -offset.y);
                self.applied_offset = Vec2::ZERO;
            }
            ShakeStyle::Compounding => {
                let last = self.intensity;
                self.shift(camera, -last);
            }
        }
    }
}

impl CameraEffect for CameraShake {
    fn clock(&self) -> &EffectClock { &self.clock }
    fn clock_mut(&mut self) -> &mut EffectClock { &mut self.clock }

    fn is_active(&self) -> bool {
        self.clock.is_running() && self.speed > 0
    }

    /// Re-arm and apply the initial `(+intensity, +intensity)` kick.
    ///
    /// Restarting a running shake keeps the offset applied so far, so the
    /// final recentre still returns to where the first start found the camera.
    fn start(&mut self, camera: &mut Camera) {
        self.clock.restart();
        if self.style == ShakeStyle::Alternating {
            self.intensity = self.base_intensity;
            self.next_sign = -1.0;
            // Nothing would ever undo the kick.
            if !self.is_active() {
                debug!(speed = self.speed, duration = self.clock.duration(), "camera shake disabled");
                return;
            }
        }

        let kick = self.intensity;
        self.shift(camera, kick);
        self.update_camera(camera);
        debug!(kick, speed = self.speed, duration = self.clock.duration(), "camera shake started");
    }

    fn play(&mut self, camera: &mut Camera) -> EffectTick {
        if !self.is_active() {
            return EffectTick::Idle;
        }

        let mut tick = EffectTick::Running;
        if self.clock.progress() % self.speed == 0 {
            self.intensity = self.next_intensity();
            let amount = TRIGGER_GAIN * self.intensity;
            self.shift(camera, amount);
            tick = EffectTick::Triggered;
        }
        self.clock.advance();

        if !self.is_active() {
            self.recentre(camera);
            tick = EffectTick::Finished;
            debug!(residual = ?self.applied_offset, "camera shake finished");
        }

        self.update_camera(camera);
        tick
    }
}
