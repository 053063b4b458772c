//! PLY (Polygon File Format) export.
//!
//! Supports ASCII and binary little-endian PLY. Compatible with MeshLab,
//! CloudCompare, Open3D, and all major DCC tools.
//!
//! Author: Moroya Sakamoto

use crate::io::IoError;
use crate::mesh::Mesh;
use std::path::Path;

/// PLY export configuration
#[derive(Debug, Clone)]
pub struct PlyConfig {
    /// Export as binary (true) or ASCII (false)
    pub binary: bool,
    /// Export vertex normals
    pub export_normals: bool,
}

impl Default for PlyConfig {
    fn default() -> Self {
        PlyConfig {
            binary: true,
            export_normals: true,
        }
    }
}

/// Export a mesh to PLY format
pub fn export_ply(mesh: &Mesh, path: impl AsRef<Path>, config: &PlyConfig) -> Result<(), IoError> {
    use std::io::{BufWriter, Write};

    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);

    let vert_count = mesh.vertices.len();
    let face_count = mesh.triangles.len();
    let format = if config.binary {
        "binary_little_endian 1.0"
    } else {
        "ascii 1.0"
    };

    // Header
    writeln!(w, "ply")?;
    writeln!(w, "format {}", format)?;
    writeln!(w, "comment topocubes PLY Export")?;
    writeln!(w, "element vertex {}", vert_count)?;
    writeln!(w, "property float x")?;
    writeln!(w, "property float y")?;
    writeln!(w, "property float z")?;
    if config.export_normals {
        writeln!(w, "property float nx")?;
        writeln!(w, "property float ny")?;
        writeln!(w, "property float nz")?;
    }
    writeln!(w, "element face {}", face_count)?;
    writeln!(w, "property list uchar int vertex_indices")?;
    writeln!(w, "end_header")?;

    if config.binary {
        for v in &mesh.vertices {
            w.write_all(&v.position.x.to_le_bytes())?;
            w.write_all(&v.position.y.to_le_bytes())?;
            w.write_all(&v.position.z.to_le_bytes())?;
            if config.export_normals {
                w.write_all(&v.normal.x.to_le_bytes())?;
                w.write_all(&v.normal.y.to_le_bytes())?;
                w.write_all(&v.normal.z.to_le_bytes())?;
            }
        }
        for t in &mesh.triangles {
            w.write_all(&[3u8])?;
            w.write_all(&(t.v1 as i32).to_le_bytes())?;
            w.write_all(&(t.v2 as i32).to_le_bytes())?;
            w.write_all(&(t.v3 as i32).to_le_bytes())?;
        }
    } else {
        for v in &mesh.vertices {
            if config.export_normals {
                writeln!(
                    w,
                    "{} {} {} {} {} {}",
                    v.position.x, v.position.y, v.position.z, v.normal.x, v.normal.y, v.normal.z
                )?;
            } else {
                writeln!(w, "{} {} {}", v.position.x, v.position.y, v.position.z)?;
            }
        }
        for t in &mesh.triangles {
            writeln!(w, "3 {} {} {}", t.v1, t.v2, t.v3)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Triangle, Vertex};
    use glam::Vec3;

    fn tri_mesh() -> Mesh {
        let mut m = Mesh::new();
        m.push_vertex(Vertex::new(Vec3::ZERO, Vec3::Z));
        m.push_vertex(Vertex::new(Vec3::X, Vec3::Z));
        m.push_vertex(Vertex::new(Vec3::Y, Vec3::Z));
        m.push_triangle(Triangle::new(0, 1, 2));
        m
    }

    #[test]
    fn ascii_header_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.ply");
        let config = PlyConfig {
            binary: false,
            export_normals: true,
        };
        export_ply(&tri_mesh(), &path, &config).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("ply\nformat ascii 1.0"));
        assert!(text.contains("element vertex 3"));
        assert!(text.contains("element face 1"));
        assert!(text.trim_end().ends_with("3 0 1 2"));
    }

    #[test]
    fn binary_size_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.ply");
        export_ply(&tri_mesh(), &path, &PlyConfig::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let header_end = bytes
            .windows(11)
            .position(|w| w == b"end_header\n")
            .unwrap()
            + 11;
        // 3 vertices * 6 floats + 1 face * (1 + 3 * 4) bytes
        assert_eq!(bytes.len() - header_end, 3 * 24 + 13);
    }
}
