//! Per-frame head tracking: mouse ray against a camera-facing plane.
//!
//! Everything here is recomputed from scratch each call. The plane, ray,
//! and hit point are locals so no stale geometry survives between frames.

use glam::{Mat3, Quat, Vec2, Vec3};

use crate::camera::Camera;

/// Infinite plane in normal/offset form (`normal · p + d = 0`).
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Plane with the given unit normal passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Distance along the ray to the intersection, if the ray hits the
    /// plane in front of its origin. Parallel rays return `None`.
    #[inline]
    pub fn intersect_ray(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
        let denom = self.normal.dot(ray_dir);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = -(self.normal.dot(ray_origin) + self.d) / denom;
        (t >= 0.0).then_some(t)
    }
}

/// Orientation that points an object's local +Z axis from `eye` at `target`.
pub fn look_at_quat(eye: Vec3, target: Vec3, up: Vec3) -> Quat {
    let forward = match (target - eye).try_normalize() {
        Some(f) => f,
        None => return Quat::IDENTITY,
    };
    let right = up.cross(forward).try_normalize().unwrap_or(Vec3::X);
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Solve where the head should look for the current pointer position.
///
/// Builds a plane through the character root facing the camera, casts the
/// pointer ray against it, and pins the hit to a fixed `depth` in front of
/// the face. Returns `None` when the geometry is degenerate (camera at the
/// origin, ray parallel to the plane, or plane behind the ray); callers
/// skip the orientation update for that frame.
pub fn gaze_target(camera: &Camera, pointer_ndc: Vec2, root_pos: Vec3, depth: f32) -> Option<Vec3> {
    let normal = camera.eye.try_normalize()?;
    let plane = Plane::from_normal_and_point(normal, root_pos);
    let (ro, rd) = camera.ndc_ray(pointer_ndc);
    let t = plane.intersect_ray(ro, rd)?;
    let hit = ro + rd * t;
    Some(Vec3::new(hit.x, hit.y, depth))
}
