//! Binary glTF import into a single merged [`MeshData`].

use crate::error::AssetError;
use crate::mesh::{MeshData, Vertex};
use glam::Mat4;

/// Parse GLB (or self-contained glTF JSON) bytes.
///
/// Walks the default scene, falling back to the first scene, applies node
/// transforms and bakes each material's base colour into the vertices. Only
/// triangle-list primitives are kept. Missing normals are computed, missing
/// indices generated.
pub fn load_glb(bytes: &[u8]) -> Result<MeshData, AssetError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::NoScene)?;

    let mut out = MeshData::default();
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut out)?;
    }
    if out.is_empty() {
        return Err(AssetError::Empty);
    }
    log::debug!(
        "[glb] {} vertices, {} triangles",
        out.vertices.len(),
        out.triangle_count()
    );
    Ok(out)
}

fn collect_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut MeshData,
) -> Result<(), AssetError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let mut part = read_primitive(&primitive, buffers)?;
            part.transform(world);
            out.extend(part);
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn read_primitive(
    primitive: &gltf::Primitive<'_>,
    buffers: &[gltf::buffer::Data],
) -> Result<MeshData, AssetError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
    let color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or(AssetError::MissingPositions)?
        .collect();
    let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
    let has_normals = normals
        .as_ref()
        .is_some_and(|n| n.len() == positions.len());

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| Vertex {
            position,
            normal: normals
                .as_ref()
                .filter(|_| has_normals)
                .map(|n| n[i])
                .unwrap_or([0.0; 3]),
            color,
        })
        .collect::<Vec<_>>();
    let indices = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..vertices.len() as u32).collect(),
    };

    let mut part = MeshData { vertices, indices };
    if !has_normals {
        part.compute_normals();
    }
    Ok(part)
}
