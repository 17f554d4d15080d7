//! Pointer-driven camera sway with exponential smoothing.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::constants::{DRIFT_LOOK_AT, DRIFT_RANGE_X, DRIFT_RANGE_Y, DRIFT_SMOOTHING};

/// Tunable ranges for the camera sway.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftConfig {
    /// World units of eye offset at full horizontal pointer deflection.
    pub range_x: f32,
    /// World units of eye offset at full vertical pointer deflection.
    pub range_y: f32,
    /// Fraction of the remaining distance covered per frame, in (0, 1].
    pub smoothing: f32,
    /// Point the camera re-aims at after every step.
    pub look_at: Vec3,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            range_x: DRIFT_RANGE_X,
            range_y: DRIFT_RANGE_Y,
            smoothing: DRIFT_SMOOTHING,
            look_at: DRIFT_LOOK_AT,
        }
    }
}

/// Eases the camera eye toward a pointer-offset target each frame.
///
/// The eye is never set directly: every step moves a fixed fraction of the
/// remaining distance, so it converges asymptotically and never overshoots.
#[derive(Clone, Debug)]
pub struct CameraDrift {
    pub base: Vec3,
    pub config: DriftConfig,
}

impl CameraDrift {
    pub fn new(base: Vec3) -> Self {
        Self {
            base,
            config: DriftConfig::default(),
        }
    }

    /// Eye position the camera is currently easing toward.
    #[inline]
    pub fn target_for(&self, pointer_ndc: Vec2) -> Vec3 {
        self.base
            + Vec3::new(
                pointer_ndc.x * self.config.range_x,
                pointer_ndc.y * self.config.range_y,
                0.0,
            )
    }

    /// One smoothing step; runs every frame regardless of model state.
    pub fn step(&self, camera: &mut Camera, pointer_ndc: Vec2) {
        let target = self.target_for(pointer_ndc);
        camera.eye += (target - camera.eye) * self.config.smoothing;
        camera.target = self.config.look_at;
    }
}
