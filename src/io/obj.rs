//! Wavefront OBJ export.
//!
//! Compatible with Blender, Maya, 3ds Max, and all major DCC tools.
//!
//! Author: Moroya Sakamoto

use crate::io::IoError;
use crate::mesh::Mesh;
use std::io::Write;
use std::path::Path;

/// OBJ export configuration
#[derive(Debug, Clone)]
pub struct ObjConfig {
    /// Export normals (vn)
    pub export_normals: bool,
}

impl Default for ObjConfig {
    fn default() -> Self {
        ObjConfig {
            export_normals: true,
        }
    }
}

/// Export a mesh to Wavefront OBJ format
pub fn export_obj(mesh: &Mesh, path: impl AsRef<Path>, config: &ObjConfig) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(file);

    writeln!(w, "# topocubes OBJ Export")?;
    writeln!(w, "# Vertices: {}", mesh.vertices.len())?;
    writeln!(w, "# Triangles: {}", mesh.triangles.len())?;

    for v in &mesh.vertices {
        writeln!(w, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
    }
    if config.export_normals {
        for v in &mesh.vertices {
            writeln!(w, "vn {} {} {}", v.normal.x, v.normal.y, v.normal.z)?;
        }
    }

    // OBJ indices are 1-based
    for t in &mesh.triangles {
        let (a, b, c) = (t.v1 + 1, t.v2 + 1, t.v3 + 1);
        if config.export_normals {
            writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
        } else {
            writeln!(w, "f {a} {b} {c}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Triangle, Vertex};
    use glam::Vec3;

    #[test]
    fn writes_one_based_faces() {
        let mut m = Mesh::new();
        m.push_vertex(Vertex::new(Vec3::ZERO, Vec3::Z));
        m.push_vertex(Vertex::new(Vec3::X, Vec3::Z));
        m.push_vertex(Vertex::new(Vec3::Y, Vec3::Z));
        m.push_triangle(Triangle::new(0, 1, 2));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        export_obj(&m, &path, &ObjConfig::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 3);
        assert!(text.contains("f 1//1 2//2 3//3"));
    }
}
