// Sanity checks on the tuning constants and their relationships.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_valid_lerp_fraction() {
    assert!(DRIFT_SMOOTHING > 0.0 && DRIFT_SMOOTHING < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sway_ranges_are_positive() {
    assert!(DRIFT_RANGE_X > 0.0);
    assert!(DRIFT_RANGE_Y > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_consistent() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    // The camera rests in front of the character, not inside it
    assert!(CAMERA_BASE.z > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gaze_depth_sits_in_front_of_the_plane() {
    assert!(GAZE_DEPTH > 0.0);
    assert!(GAZE_DEPTH < CAMERA_ZFAR);
}

#[test]
fn head_contract_is_named() {
    assert!(!HEAD_NODE_NAME.is_empty());
    // The drop keeps the head near viewport center, so it points down
    assert!(MODEL_DROP.y < 0.0);
}
