//! Binary glTF parsing into a [`CharacterScene`].

use glam::{Quat, Vec3};

use crate::scene::{CharacterScene, Mesh, Node};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to parse glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("model contains no geometry")]
    Empty,
}

/// Parse a `.glb` byte buffer into a scene.
///
/// Keeps the node hierarchy (names, parents, local TRS) and flattens each
/// node's mesh primitives into a single position/normal/index soup. The
/// head node is not bound here; that is an explicit post-load step.
pub fn parse_glb(bytes: &[u8]) -> Result<CharacterScene, ModelError> {
    let (doc, buffers, _images) = gltf::import_slice(bytes)?;

    let mut parent = vec![None; doc.nodes().len()];
    for node in doc.nodes() {
        for child in node.children() {
            parent[child.index()] = Some(node.index());
        }
    }

    let mut meshes: Vec<Mesh> = Vec::new();
    let mut nodes: Vec<Node> = Vec::with_capacity(doc.nodes().len());
    for node in doc.nodes() {
        let (t, r, s) = node.transform().decomposed();
        let mesh = node.mesh().map(|m| {
            meshes.push(read_mesh(&m, &buffers));
            meshes.len() - 1
        });
        nodes.push(Node {
            name: node.name().map(str::to_owned),
            parent: parent[node.index()],
            translation: Vec3::from(t),
            rotation: Quat::from_array(r),
            scale: Vec3::from(s),
            mesh,
        });
    }

    if meshes.iter().all(|m| m.positions.is_empty()) {
        return Err(ModelError::Empty);
    }
    Ok(CharacterScene {
        nodes,
        meshes,
        root_offset: Vec3::ZERO,
        head: None,
    })
}

fn read_mesh(mesh: &gltf::Mesh<'_>, buffers: &[gltf::buffer::Data]) -> Mesh {
    let mut out = Mesh::default();
    for prim in mesh.primitives() {
        let reader = prim.reader(|b| Some(&buffers[b.index()]));
        let positions: Vec<[f32; 3]> = match reader.read_positions() {
            Some(it) => it.collect(),
            None => continue,
        };
        let normals: Vec<[f32; 3]> = match reader.read_normals() {
            Some(it) => it.collect(),
            None => vec![[0.0, 1.0, 0.0]; positions.len()],
        };
        let indices: Vec<u32> = match reader.read_indices() {
            Some(it) => it.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };

        // Rebase this primitive's indices into the flattened vertex list.
        let base = out.positions.len() as u32;
        out.positions.extend_from_slice(&positions);
        out.normals.extend_from_slice(&normals);
        out.indices.extend(indices.into_iter().map(|i| base + i));
    }
    out
}
