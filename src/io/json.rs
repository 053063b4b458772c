//! JSON mesh dump via serde.
//!
//! Author: Moroya Sakamoto

use crate::io::IoError;
use crate::mesh::Mesh;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Save a mesh as JSON
pub fn save_mesh_json(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);
    serde_json::to_writer(w, mesh).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Load a mesh from JSON
pub fn load_mesh_json(path: impl AsRef<Path>) -> Result<Mesh, IoError> {
    let file = File::open(path)?;
    let r = BufReader::new(file);
    serde_json::from_reader(r).map_err(|e| IoError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Triangle, Vertex};
    use glam::Vec3;

    #[test]
    fn json_roundtrip() {
        let mut m = Mesh::new();
        m.push_vertex(Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z));
        m.push_triangle(Triangle::new(0, 0, 0));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.json");
        save_mesh_json(&m, &path).unwrap();
        let loaded = load_mesh_json(&path).unwrap();
        assert_eq!(loaded.vertex_count(), 1);
        assert_eq!(loaded.triangles, m.triangles);
        assert_eq!(loaded.vertices[0].position, Vec3::new(1.0, 2.0, 3.0));
    }
}
