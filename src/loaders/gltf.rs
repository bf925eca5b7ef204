use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use crate::core::triangle_intersection::Triangle;

/// Loads every triangle primitive of every scene, in world space
pub fn load_gltf_triangles(path: impl AsRef<Path>) -> Result<Vec<Triangle>> {
    let path = path.as_ref();

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    log::debug!(
        "glTF {:?}: {} scenes, {} nodes, {} meshes",
        path,
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count()
    );

    let mut triangles = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut triangles)?;
        }
    }

    Ok(triangles)
}

/// Recursively processes glTF nodes
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    triangles: &mut Vec<Triangle>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, triangles)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, triangles)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    triangles: &mut Vec<Triangle>,
) -> Result<()> {
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::debug!("skipping non-triangle primitive in mesh {:?}", mesh.name());
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let vertices: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        match reader.read_indices() {
            Some(indices) => {
                let indices: Vec<u32> = indices.into_u32().collect();
                for tri in indices.chunks_exact(3) {
                    let corner = |i: u32| {
                        vertices
                            .get(i as usize)
                            .copied()
                            .with_context(|| format!("Index {} out of range", i))
                    };
                    triangles.push([corner(tri[0])?, corner(tri[1])?, corner(tri[2])?]);
                }
            }
            // No indices - treat as triangle list
            None => {
                for tri in vertices.chunks_exact(3) {
                    triangles.push([tri[0], tri[1], tri[2]]);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_gltf_triangles("/nonexistent/model.gltf").unwrap_err();
        assert!(format!("{}", err).contains("model.gltf"));
    }
}
