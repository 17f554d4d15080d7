// Tests for the ray/plane solve and look-at orientation.

use app_core::{gaze_target, look_at_quat, Camera, Plane, GAZE_DEPTH};
use glam::{Quat, Vec2, Vec3};

fn test_camera(eye: Vec3) -> Camera {
    Camera::new(eye, Vec3::ZERO, 1.0, 45f32.to_radians())
}

#[test]
fn plane_intersection_basic() {
    // Plane facing +Z through the origin, ray shooting straight down -Z
    let plane = Plane::from_normal_and_point(Vec3::Z, Vec3::ZERO);
    let t = plane.intersect_ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-6);
}

#[test]
fn plane_intersection_parallel_ray() {
    let plane = Plane::from_normal_and_point(Vec3::Z, Vec3::ZERO);
    let t = plane.intersect_ray(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
    assert!(t.is_none());
}

#[test]
fn plane_intersection_behind_ray() {
    // Ray pointing away from the plane must not report a hit
    let plane = Plane::from_normal_and_point(Vec3::Z, Vec3::ZERO);
    let t = plane.intersect_ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(t.is_none());
}

#[test]
fn look_at_points_forward_axis_at_target() {
    let cases = [
        (Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)),
        (Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)),
        (Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 7.0)),
    ];
    for (eye, target) in cases {
        let q = look_at_quat(eye, target, Vec3::Y);
        let forward = (target - eye).normalize();
        let aimed = q * Vec3::Z;
        assert!(
            (aimed - forward).length() < 1e-5,
            "eye {eye:?} target {target:?}: aimed {aimed:?}, wanted {forward:?}"
        );
    }
}

#[test]
fn look_at_degenerate_is_identity() {
    let q = look_at_quat(Vec3::ONE, Vec3::ONE, Vec3::Y);
    assert_eq!(q, Quat::IDENTITY);
}

#[test]
fn centered_pointer_hits_straight_ahead() {
    // Camera on the +Z axis looking at the origin; the center ray passes
    // through the root plane at the origin, then the depth is pinned
    let camera = test_camera(Vec3::new(0.0, 0.0, 5.0));
    let hit = gaze_target(&camera, Vec2::ZERO, Vec3::ZERO, GAZE_DEPTH).unwrap();
    assert!(hit.x.abs() < 1e-4);
    assert!(hit.y.abs() < 1e-4);
    assert!((hit.z - GAZE_DEPTH).abs() < 1e-6);
}

#[test]
fn pointer_side_matches_hit_side() {
    let camera = test_camera(Vec3::new(0.0, 0.0, 5.0));
    let right = gaze_target(&camera, Vec2::new(0.5, 0.0), Vec3::ZERO, GAZE_DEPTH).unwrap();
    assert!(right.x > 0.0);
    let up = gaze_target(&camera, Vec2::new(0.0, 0.75), Vec3::ZERO, GAZE_DEPTH).unwrap();
    assert!(up.y > 0.0);
}

#[test]
fn camera_at_origin_declines() {
    // No usable plane normal when the camera sits on the character root
    let camera = test_camera(Vec3::ZERO);
    assert!(gaze_target(&camera, Vec2::ZERO, Vec3::ZERO, GAZE_DEPTH).is_none());
}

#[test]
fn solve_is_deterministic_for_fixed_inputs() {
    let camera = test_camera(Vec3::new(0.0, 1.0, 2.5));
    let ndc = Vec2::new(-0.3, 0.6);
    let a = gaze_target(&camera, ndc, Vec3::new(0.0, -1.0, 0.0), GAZE_DEPTH).unwrap();
    let b = gaze_target(&camera, ndc, Vec3::new(0.0, -1.0, 0.0), GAZE_DEPTH).unwrap();
    assert_eq!(a, b);
}

#[test]
fn center_ray_aims_at_look_target() {
    let camera = test_camera(Vec3::new(0.0, 1.0, 2.5));
    let (ro, rd) = camera.ndc_ray(Vec2::ZERO);
    assert_eq!(ro, camera.eye);
    let toward_target = (camera.target - camera.eye).normalize();
    assert!(rd.dot(toward_target) > 0.9999);
}
