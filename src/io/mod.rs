//! Mesh export.
//!
//! Supports three formats:
//! - .ply: ASCII or binary little-endian, with vertex normals
//! - .obj: Wavefront OBJ with normals
//! - .json: serde dump of the mesh buffers
//!
//! Author: Moroya Sakamoto

mod json;
mod obj;
mod ply;

pub use json::{load_mesh_json, save_mesh_json};
pub use obj::{export_obj, ObjConfig};
pub use ply::{export_ply, PlyConfig};

use crate::mesh::Mesh;
use std::path::Path;
use thiserror::Error;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Save a mesh to file (format auto-detected from the extension).
///
/// # Arguments
/// * `mesh` - The mesh to save
/// * `path` - File path (.ply, .obj or .json)
pub fn save_mesh(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("ply") => export_ply(mesh, path, &PlyConfig::default()),
        Some("obj") => export_obj(mesh, path, &ObjConfig::default()),
        Some("json") => save_mesh_json(mesh, path),
        _ => Err(IoError::InvalidFormat(
            "Unknown file extension. Use .ply, .obj or .json".to_string(),
        )),
    }
}
