// Tests for the character hierarchy and the post-load head binding.

use app_core::{
    gaze_target, look_at_quat, parse_glb, Camera, CharacterScene, Mesh, ModelError, Node,
    GAZE_DEPTH, HEAD_NODE_NAME, MODEL_DROP,
};
use glam::{Quat, Vec2, Vec3};

fn node(name: Option<&str>, parent: Option<usize>, translation: Vec3) -> Node {
    Node {
        name: name.map(str::to_owned),
        parent,
        translation,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
        mesh: None,
    }
}

/// Two-node rig: a root with a head child, the shape the loader produces.
fn character() -> CharacterScene {
    CharacterScene {
        nodes: vec![
            node(Some("Armature"), None, Vec3::ZERO),
            node(Some(HEAD_NODE_NAME), Some(0), Vec3::new(0.0, 1.5, 0.0)),
        ],
        meshes: vec![Mesh::default()],
        root_offset: MODEL_DROP,
        head: None,
    }
}

#[test]
fn bind_head_finds_the_named_node() {
    let mut scene = character();
    assert_eq!(scene.bind_head(HEAD_NODE_NAME), Some(1));
    assert_eq!(scene.head, Some(1));
}

#[test]
fn bind_head_missing_node_degrades_quietly() {
    // A rig without the expected node disables tracking but nothing panics
    let mut scene = character();
    scene.nodes[1].name = Some("Head_Renamed".to_owned());
    assert_eq!(scene.bind_head(HEAD_NODE_NAME), None);
    assert_eq!(scene.head, None);

    // The per-frame step is a no-op without a bound head; the scene is
    // untouched no matter how often a frame would run
    let before = scene.nodes[1].rotation;
    for _ in 0..3 {
        if let Some(head) = scene.head {
            scene.set_world_rotation(head, Quat::from_rotation_y(1.0));
        }
    }
    assert_eq!(scene.nodes[1].rotation, before);
}

#[test]
fn root_offset_shifts_world_positions() {
    let mut scene = character();
    let head = scene.bind_head(HEAD_NODE_NAME).unwrap();
    let pos = scene.world_position(head);
    assert!((pos - (MODEL_DROP + Vec3::new(0.0, 1.5, 0.0))).length() < 1e-6);
    assert_eq!(scene.root_position(), MODEL_DROP);
}

#[test]
fn parent_rotation_carries_into_child_position() {
    let mut scene = character();
    scene.root_offset = Vec3::ZERO;
    scene.nodes[0].rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    scene.nodes[1].translation = Vec3::X;
    // +90 degrees about Y takes +X to -Z
    let pos = scene.world_position(1);
    assert!((pos - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn world_rotation_assignment_round_trips_through_parent() {
    let mut scene = character();
    scene.nodes[0].rotation = Quat::from_rotation_y(0.7);

    let wanted = look_at_quat(Vec3::ZERO, Vec3::new(2.0, -1.0, 5.0), Vec3::Y);
    scene.set_world_rotation(1, wanted);
    let got = scene.world_rotation(1);
    // Quaternions are equal up to sign
    assert!(got.dot(wanted).abs() > 1.0 - 1e-5);
}

#[test]
fn head_orientation_update_is_idempotent() {
    // Re-running the full gaze step with identical inputs must not move
    // the head: the solve reads nothing the assignment writes
    let mut scene = character();
    let head = scene.bind_head(HEAD_NODE_NAME).unwrap();
    let camera = Camera::new(Vec3::new(0.0, 1.0, 2.5), Vec3::ZERO, 1.5, 45f32.to_radians());
    let ndc = Vec2::new(0.4, -0.2);

    let target = gaze_target(&camera, ndc, scene.root_position(), GAZE_DEPTH).unwrap();
    scene.set_world_rotation(head, look_at_quat(scene.world_position(head), target, Vec3::Y));
    let first = scene.nodes[head].rotation;

    let target = gaze_target(&camera, ndc, scene.root_position(), GAZE_DEPTH).unwrap();
    scene.set_world_rotation(head, look_at_quat(scene.world_position(head), target, Vec3::Y));
    assert_eq!(scene.nodes[head].rotation, first);
}

#[test]
fn parse_rejects_garbage_bytes() {
    let err = parse_glb(b"definitely not a gltf").unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}
