use glam::Vec3;

// Tuning constants for the character viewer. Kept in one place so the
// interaction feel can be adjusted without hunting through the frame code.

// Asset contract: the rig must contain a node with this exact name for
// head tracking to engage.
pub const HEAD_NODE_NAME: &str = "Head_3";

// World-space offset applied to the model root after load (drops the
// character so the head sits near the viewport center).
pub const MODEL_DROP: Vec3 = Vec3::new(0.0, -1.0, 0.0);

// Camera
pub const CAMERA_BASE: Vec3 = Vec3::new(0.0, 1.0, 2.5); // rest position
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Pointer-driven camera sway
pub const DRIFT_RANGE_X: f32 = 0.5; // world units at full pointer deflection
pub const DRIFT_RANGE_Y: f32 = 0.5;
pub const DRIFT_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame
pub const DRIFT_LOOK_AT: Vec3 = Vec3::ZERO;

// Gaze solve
// Fixed depth substituted for the plane hit so the head aims slightly in
// front of its own plane instead of exactly on it.
pub const GAZE_DEPTH: f32 = 2.0;
