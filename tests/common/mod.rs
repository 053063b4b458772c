//! Common test helpers for topocubes integration tests
//!
//! Author: Moroya Sakamoto

#![allow(dead_code)]

use std::collections::HashMap;
use topocubes::prelude::*;

// ============================================================================
// Grid fills
// ============================================================================

/// Map a sample index to a world coordinate in [-1, 1].
pub fn world(i: usize, n: usize) -> f32 {
    2.0 * i as f32 / (n - 1) as f32 - 1.0
}

/// Fill the extractor with an analytic field over [-1, 1]^3.
pub fn fill_world(mc: &mut MarchingCubes, n: usize, f: impl Fn(f32, f32, f32) -> f32 + Sync) {
    mc.fill_with(|i, j, k| f(world(i, n), world(j, n), world(k, n)));
}

/// Write a cell's 8 corner values into the cell at `(ci, cj, ck)`,
/// corner order matching the case tables.
pub fn write_cell(mc: &mut MarchingCubes, ci: usize, cj: usize, ck: usize, cube: [f32; 8]) {
    for (p, v) in cube.into_iter().enumerate() {
        let di = (p ^ (p >> 1)) & 1;
        let dj = (p >> 1) & 1;
        let dk = (p >> 2) & 1;
        mc.set_sample(ci + di, cj + dj, ck + dk, v);
    }
}

// ============================================================================
// Deterministic pseudo-random values (LCG, reproducible across platforms)
// ============================================================================

pub struct Lcg(pub u64);

impl Lcg {
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// Uniform in [lo, hi)
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * (self.next_u32() as f32 / u32::MAX as f32)
    }
}

// ============================================================================
// Mesh checks
// ============================================================================

/// Check that every directed edge is used at most once and, when
/// `require_closed`, that every undirected edge is shared by exactly two
/// triangles. Returns an error description on failure.
pub fn manifold_check(mc: &MarchingCubes, require_closed: bool) -> Result<(), String> {
    let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
    let mut undirected: HashMap<(u32, u32), u32> = HashMap::new();
    for t in mc.triangles() {
        let (a, b, c) = (t.v1, t.v2, t.v3);
        if a == b || b == c || a == c {
            return Err(format!("degenerate triangle {:?}", (a, b, c)));
        }
        for (u, v) in [(a, b), (b, c), (c, a)] {
            *directed.entry((u, v)).or_insert(0) += 1;
            *undirected.entry((u.min(v), u.max(v))).or_insert(0) += 1;
        }
    }
    for (e, n) in &directed {
        if *n > 1 {
            return Err(format!("directed edge {e:?} used {n} times"));
        }
    }
    for (e, n) in &undirected {
        if require_closed && *n != 2 {
            return Err(format!("edge {e:?} has {n} incident triangles"));
        }
        if !require_closed && *n > 2 {
            return Err(format!("non-manifold edge {e:?} ({n} triangles)"));
        }
    }
    Ok(())
}

/// Number of connected components of the triangulation.
pub fn mesh_components(mc: &MarchingCubes) -> usize {
    let n = mc.nverts();
    let mut parent: Vec<u32> = (0..n as u32).collect();
    fn find(parent: &mut [u32], mut a: u32) -> u32 {
        while parent[a as usize] != a {
            parent[a as usize] = parent[parent[a as usize] as usize];
            a = parent[a as usize];
        }
        a
    }
    let mut used = vec![false; n];
    for t in mc.triangles() {
        let ra = find(&mut parent, t.v1);
        let rb = find(&mut parent, t.v2);
        parent[ra as usize] = rb;
        let rb = find(&mut parent, t.v2);
        let rc = find(&mut parent, t.v3);
        parent[rb as usize] = rc;
        for v in [t.v1, t.v2, t.v3] {
            used[v as usize] = true;
        }
    }
    let mut roots = std::collections::HashSet::new();
    for v in 0..n as u32 {
        if used[v as usize] {
            roots.insert(find(&mut parent, v));
        }
    }
    roots.len()
}

/// Signed volume of the triangulation (positive when triangle normals point
/// away from the enclosed region).
pub fn signed_volume(mc: &MarchingCubes) -> f64 {
    let mut vol = 0.0f64;
    let vs = mc.vertices();
    for t in mc.triangles() {
        let a = vs[t.v1 as usize].position.as_dvec3();
        let b = vs[t.v2 as usize].position.as_dvec3();
        let c = vs[t.v3 as usize].position.as_dvec3();
        vol += a.dot(b.cross(c));
    }
    vol / 6.0
}

/// Number of sign-changing forward edges of the sampled field at `iso`
/// (interior edges only, matching the interning maps).
pub fn crossing_count(mc: &MarchingCubes, iso: f32) -> usize {
    let g = mc.grid();
    let (nx, ny, nz) = (g.size_x(), g.size_y(), g.size_z());
    let shifted = |i: usize, j: usize, k: usize| {
        let v = g.get(i, j, k) - iso;
        if v.abs() < f32::EPSILON {
            f32::EPSILON
        } else {
            v
        }
    };
    let mut count = 0;
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let c0 = shifted(i, j, k) > 0.0;
                if i + 1 < nx && (shifted(i + 1, j, k) > 0.0) != c0 {
                    count += 1;
                }
                if j + 1 < ny && (shifted(i, j + 1, k) > 0.0) != c0 {
                    count += 1;
                }
                if k + 1 < nz && (shifted(i, j, k + 1) > 0.0) != c0 {
                    count += 1;
                }
            }
        }
    }
    count
}
