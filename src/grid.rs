//! Dense scalar grid storage and gradient estimation.
//!
//! Samples are addressed by `(i, j, k)` with `i` fastest. The grid owns the
//! raw field values; the extractor reads them through [`ScalarGrid::get`]
//! and estimates normals from central differences.
//!
//! Author: Moroya Sakamoto

use rayon::prelude::*;

/// Uniformly sampled 3D scalar field.
#[derive(Debug, Clone)]
pub struct ScalarGrid {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    data: Vec<f32>,
}

impl ScalarGrid {
    /// Allocate a grid of `nx * ny * nz` samples, all zero.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        ScalarGrid {
            size_x: nx,
            size_y: ny,
            size_z: nz,
            data: vec![0.0; nx * ny * nz],
        }
    }

    /// Grid extent along x.
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Grid extent along y.
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Grid extent along z.
    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Reallocate for new dimensions; all samples reset to zero.
    pub fn resize(&mut self, nx: usize, ny: usize, nz: usize) {
        self.size_x = nx;
        self.size_y = ny;
        self.size_z = nz;
        self.data.clear();
        self.data.resize(nx * ny * nz, 0.0);
    }

    /// Zero all samples, keeping the dimensions.
    pub fn reset(&mut self) {
        self.data.fill(0.0);
    }

    #[inline]
    pub(crate) fn index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.size_x * (j + self.size_y * k)
    }

    /// Read the sample at `(i, j, k)`. Indices must be in range.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f32 {
        self.data[self.index(i, j, k)]
    }

    /// Write the sample at `(i, j, k)`. Indices must be in range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f32) {
        let idx = self.index(i, j, k);
        self.data[idx] = value;
    }

    /// Evaluate `f(i, j, k)` over every sample in parallel.
    ///
    /// Rows along x are distributed over the rayon pool; the result is
    /// deterministic since every sample is written exactly once.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(usize, usize, usize) -> f32 + Sync,
    {
        let (nx, ny) = (self.size_x, self.size_y);
        self.data
            .par_chunks_mut(nx)
            .enumerate()
            .for_each(|(row, chunk)| {
                let j = row % ny;
                let k = row / ny;
                for (i, v) in chunk.iter_mut().enumerate() {
                    *v = f(i, j, k);
                }
            });
    }

    // Central differences, one-sided at the boundary. The y/z variants
    // mirror grad_x.

    pub(crate) fn grad_x(&self, i: usize, j: usize, k: usize) -> f32 {
        if i > 0 {
            if i < self.size_x - 1 {
                (self.get(i + 1, j, k) - self.get(i - 1, j, k)) / 2.0
            } else {
                self.get(i, j, k) - self.get(i - 1, j, k)
            }
        } else {
            self.get(i + 1, j, k) - self.get(i, j, k)
        }
    }

    pub(crate) fn grad_y(&self, i: usize, j: usize, k: usize) -> f32 {
        if j > 0 {
            if j < self.size_y - 1 {
                (self.get(i, j + 1, k) - self.get(i, j - 1, k)) / 2.0
            } else {
                self.get(i, j, k) - self.get(i, j - 1, k)
            }
        } else {
            self.get(i, j + 1, k) - self.get(i, j, k)
        }
    }

    pub(crate) fn grad_z(&self, i: usize, j: usize, k: usize) -> f32 {
        if k > 0 {
            if k < self.size_z - 1 {
                (self.get(i, j, k + 1) - self.get(i, j, k - 1)) / 2.0
            } else {
                self.get(i, j, k) - self.get(i, j, k - 1)
            }
        } else {
            self.get(i, j, k + 1) - self.get(i, j, k)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_roundtrip() {
        let mut g = ScalarGrid::new(4, 5, 6);
        g.set(3, 4, 5, 2.5);
        g.set(0, 0, 0, -1.0);
        assert_eq!(g.get(3, 4, 5), 2.5);
        assert_eq!(g.get(0, 0, 0), -1.0);
        assert_eq!(g.get(1, 2, 3), 0.0);
    }

    #[test]
    fn fill_with_matches_sequential() {
        let mut g = ScalarGrid::new(7, 5, 3);
        g.fill_with(|i, j, k| (i + 10 * j + 100 * k) as f32);
        for k in 0..3 {
            for j in 0..5 {
                for i in 0..7 {
                    assert_eq!(g.get(i, j, k), (i + 10 * j + 100 * k) as f32);
                }
            }
        }
    }

    #[test]
    fn gradient_of_linear_field() {
        let mut g = ScalarGrid::new(6, 6, 6);
        g.fill_with(|i, j, k| 2.0 * i as f32 - 3.0 * j as f32 + 0.5 * k as f32);
        // interior: exact for a linear field
        assert!((g.grad_x(2, 3, 3) - 2.0).abs() < 1e-6);
        assert!((g.grad_y(2, 3, 3) + 3.0).abs() < 1e-6);
        assert!((g.grad_z(2, 3, 3) - 0.5).abs() < 1e-6);
        // one-sided at the boundary, still exact for linear
        assert!((g.grad_x(0, 0, 0) - 2.0).abs() < 1e-6);
        assert!((g.grad_x(5, 5, 5) - 2.0).abs() < 1e-6);
        assert!((g.grad_z(3, 3, 0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn resize_clears() {
        let mut g = ScalarGrid::new(2, 2, 2);
        g.set(1, 1, 1, 9.0);
        g.resize(3, 3, 3);
        assert_eq!(g.size_x(), 3);
        assert_eq!(g.get(1, 1, 1), 0.0);
    }
}
