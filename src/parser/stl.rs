use crate::error::DeviceVisError;
use crate::scene::{MeshSurface, Triangle};
use nalgebra_glm as glm;
use std::io::{Read, Seek};

/// Reads a binary or ASCII STL into a single surface. Facet normals are
/// ignored; the winding decides which side is the front.
pub fn read_stl<R: Read + Seek>(reader: &mut R, name: &str) -> Result<MeshSurface, DeviceVisError> {
    let mesh = stl_io::read_stl(reader)
        .map_err(|e| DeviceVisError::new("stl-parse").with_arg("name", name).push_std(e))?;

    let vertex = |i: usize| {
        let v = &mesh.vertices[i];
        glm::vec3(v[0], v[1], v[2])
    };
    let triangles: Vec<Triangle> = mesh
        .faces
        .iter()
        .map(|face| {
            Triangle::new(
                vertex(face.vertices[0]),
                vertex(face.vertices[1]),
                vertex(face.vertices[2]),
            )
        })
        .collect();

    log::debug!(
        "stl '{name}': {} triangles, {} distinct vertices",
        triangles.len(),
        mesh.vertices.len()
    );
    Ok(MeshSurface::new(name, triangles))
}
