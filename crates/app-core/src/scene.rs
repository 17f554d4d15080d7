//! Flat transform hierarchy for the loaded character.
//!
//! Nodes are stored in glTF index order with parent links; global
//! transforms are recomputed from local TRS on demand, so the only
//! persistent mutation the gaze solver makes is the head's local rotation.

use glam::{Mat4, Quat, Vec3};

/// One node of the character's transform hierarchy.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: Option<String>,
    pub parent: Option<usize>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Index into [`CharacterScene::meshes`] when the node carries geometry.
    pub mesh: Option<usize>,
}

/// Triangle geometry attached to a node, flattened across primitives.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// A loaded character: node hierarchy, geometry, and the bound head node.
#[derive(Clone, Debug, Default)]
pub struct CharacterScene {
    pub nodes: Vec<Node>,
    pub meshes: Vec<Mesh>,
    /// World-space offset applied beneath every root node.
    pub root_offset: Vec3,
    /// Node the gaze solver orients; bound once after load by name.
    pub head: Option<usize>,
}

impl CharacterScene {
    /// Index of the first node with the given name.
    pub fn find_node(&self, name: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.name.as_deref() == Some(name))
    }

    /// Bind the head node by name. The name is a contract with the asset;
    /// a renamed rig should be noticed, not silently lose the effect.
    pub fn bind_head(&mut self, name: &str) -> Option<usize> {
        self.head = self.find_node(name);
        if self.head.is_none() {
            log::warn!("model has no node named {name:?}; head tracking disabled");
        }
        self.head
    }

    /// Position the gaze plane passes through.
    #[inline]
    pub fn root_position(&self) -> Vec3 {
        self.root_offset
    }

    pub fn local_matrix(&self, index: usize) -> Mat4 {
        let n = &self.nodes[index];
        Mat4::from_scale_rotation_translation(n.scale, n.rotation, n.translation)
    }

    /// World transform of a node, root offset included.
    pub fn global_matrix(&self, index: usize) -> Mat4 {
        let local = self.local_matrix(index);
        match self.nodes[index].parent {
            Some(p) => self.global_matrix(p) * local,
            None => Mat4::from_translation(self.root_offset) * local,
        }
    }

    /// World-space position of a node's origin.
    pub fn world_position(&self, index: usize) -> Vec3 {
        self.global_matrix(index).w_axis.truncate()
    }

    /// Accumulated rotation of the parent chain including the node itself.
    pub fn world_rotation(&self, index: usize) -> Quat {
        let own = self.nodes[index].rotation;
        match self.nodes[index].parent {
            Some(p) => self.world_rotation(p) * own,
            None => own,
        }
    }

    /// Set a node's world-space rotation by compensating the parent chain.
    pub fn set_world_rotation(&mut self, index: usize, world: Quat) {
        let parent_world = match self.nodes[index].parent {
            Some(p) => self.world_rotation(p),
            None => Quat::IDENTITY,
        };
        self.nodes[index].rotation = parent_world.inverse() * world;
    }
}
