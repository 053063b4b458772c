//! # topocubes
//!
//! Topologically consistent Marching Cubes isosurface extraction.
//!
//! Extracts a watertight triangle mesh (with per-vertex normals) from a
//! uniformly sampled 3D scalar field, resolving the classical ambiguous
//! cube configurations with the face and interior tests of Lewiner, Lopes,
//! Vieira and Tavares ("Efficient implementation of Marching Cubes' cases
//! with topological guarantees", Journal of Graphics Tools 8(2), 2003).
//! Adjacent cells always agree on the connectivity through shared faces,
//! and interior components of the trilinear interpolant are not missed.
//!
//! ## Example
//!
//! ```rust
//! use topocubes::prelude::*;
//!
//! // Sample a sphere on a 32^3 grid
//! let mut mc = MarchingCubes::new(32, 32, 32);
//! mc.fill_with(|i, j, k| {
//!     let f = |v: usize| 2.0 * v as f32 / 31.0 - 1.0;
//!     let (x, y, z) = (f(i), f(j), f(k));
//!     x * x + y * y + z * z
//! });
//!
//! // Extract the isosurface f = 0.49
//! mc.run(0.49);
//! assert!(mc.ntrigs() > 0);
//! ```
//!
//! Vertex coordinates are produced in grid units (sample `(i, j, k)` sits at
//! `(i as f32, j as f32, k as f32)`); callers map them to world space.
//!
//! ## Modules
//!
//! - [`grid`]: dense scalar sample storage and gradient estimation
//! - [`mesh`]: output vertex/triangle buffers
//! - [`extract`]: the extraction engine
//! - [`io`]: PLY / OBJ / JSON mesh export
//!
//! Author: Moroya Sakamoto

#![warn(missing_docs)]

pub mod extract;
pub mod grid;
pub mod io;
pub mod mesh;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::extract::MarchingCubes;
    pub use crate::grid::ScalarGrid;
    pub use crate::io::{export_obj, export_ply, save_mesh, ObjConfig, PlyConfig};
    pub use crate::mesh::Mesh;
    pub use crate::types::{Triangle, Vertex};
    pub use glam::Vec3;
}

pub use extract::MarchingCubes;
pub use grid::ScalarGrid;
pub use mesh::Mesh;
pub use types::{Triangle, Vertex};
