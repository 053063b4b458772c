//! Per-cell state and the ambiguity-resolving predicates.
//!
//! The face test decides which diagonal of an ambiguous face is joined by
//! the bilinear restriction of the field; the interior test decides whether
//! the trilinear interpolant carries a component through the cell interior.
//! Both operate on iso-shifted corner values that are never exactly zero
//! (see the epsilon discipline in [`super::MarchingCubes::run`]).
//!
//! Author: Moroya Sakamoto

use tracing::warn;

/// Corner cycles of the six faces, in face-test order.
const FACE_CORNERS: [[usize; 4]; 6] = [
    [0, 4, 5, 1],
    [1, 5, 6, 2],
    [2, 6, 7, 3],
    [3, 7, 4, 0],
    [0, 3, 2, 1],
    [4, 7, 6, 5],
];

/// Everything the subcase machinery needs to know about the cell being
/// processed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellContext {
    /// Lattice coordinates of the cell
    pub i: usize,
    /// Lattice coordinates of the cell
    pub j: usize,
    /// Lattice coordinates of the cell
    pub k: usize,
    /// Iso-shifted corner values, all non-zero
    pub cube: [f32; 8],
    /// Base case (0..=14)
    pub case: u8,
    /// Orientation within the base case
    pub config: u8,
    /// Subconfiguration selected by the face tests
    pub subconfig: u8,
}

/// Test a face of the cell.
///
/// `face` is a signed id in `+-1..=+-6`. With corners `(A, B, C, D)` along
/// the face cycle, the saddle of the bilinear restriction has the sign of
/// `A*C - B*D`; the test returns whether `face * A * (A*C - B*D) >= 0`,
/// i.e. whether the diagonal pair selected by the sign of `face` is joined
/// across the face. Near-degenerate saddles (`|A*C - B*D| < epsilon`)
/// resolve to the sign of `face`, which keeps the two cells sharing the
/// face in agreement.
#[inline]
pub(crate) fn test_face(cube: &[f32; 8], face: i8) -> bool {
    let c = &FACE_CORNERS[(face.unsigned_abs() as usize) - 1];
    let (a, b, cc, d) = (cube[c[0]], cube[c[1]], cube[c[2]], cube[c[3]]);
    let det = a * cc - b * d;
    if det.abs() < f32::EPSILON {
        return face >= 0;
    }
    face as f32 * a * det >= 0.0
}

/// Test the interior of the cell.
///
/// `s` is the tie-breaker sign (`+7` or `-7`) from the test tables; `edge`
/// is the reference edge of the triangulation for cases 6, 7, 12 and 13 and
/// unused for cases 4 and 10. The cross-section of the cube at the
/// reference parameter is examined corner by corner; patterns that cannot
/// host an interior component return `s > 0`.
pub(crate) fn test_interior(ctx: &CellContext, s: i8, edge: i8) -> bool {
    let c = &ctx.cube;
    let at;
    let bt;
    let ct;
    let dt;

    match ctx.case {
        4 | 10 => {
            // Extremum of the section determinant along the vertical sweep.
            let a = (c[4] - c[0]) * (c[6] - c[2]) - (c[7] - c[3]) * (c[5] - c[1]);
            let b = c[2] * (c[4] - c[0]) + c[0] * (c[6] - c[2])
                - c[1] * (c[7] - c[3])
                - c[3] * (c[5] - c[1]);
            let t = -b / (2.0 * a);
            if !(0.0..=1.0).contains(&t) {
                return s > 0;
            }
            at = c[0] + (c[4] - c[0]) * t;
            bt = c[3] + (c[7] - c[3]) * t;
            ct = c[2] + (c[6] - c[2]) * t;
            dt = c[1] + (c[5] - c[1]) * t;
        }
        6 | 7 | 12 | 13 => {
            // Cross-section through the crossing on the reference edge.
            at = 0.0;
            match edge {
                0 => {
                    let t = c[0] / (c[0] - c[1]);
                    bt = c[3] + (c[2] - c[3]) * t;
                    ct = c[7] + (c[6] - c[7]) * t;
                    dt = c[4] + (c[5] - c[4]) * t;
                }
                1 => {
                    let t = c[1] / (c[1] - c[2]);
                    bt = c[0] + (c[3] - c[0]) * t;
                    ct = c[4] + (c[7] - c[4]) * t;
                    dt = c[5] + (c[6] - c[5]) * t;
                }
                2 => {
                    let t = c[2] / (c[2] - c[3]);
                    bt = c[1] + (c[0] - c[1]) * t;
                    ct = c[5] + (c[4] - c[5]) * t;
                    dt = c[6] + (c[7] - c[6]) * t;
                }
                3 => {
                    let t = c[3] / (c[3] - c[0]);
                    bt = c[2] + (c[1] - c[2]) * t;
                    ct = c[6] + (c[5] - c[6]) * t;
                    dt = c[7] + (c[4] - c[7]) * t;
                }
                4 => {
                    let t = c[4] / (c[4] - c[5]);
                    bt = c[7] + (c[6] - c[7]) * t;
                    ct = c[3] + (c[2] - c[3]) * t;
                    dt = c[0] + (c[1] - c[0]) * t;
                }
                5 => {
                    let t = c[5] / (c[5] - c[6]);
                    bt = c[4] + (c[7] - c[4]) * t;
                    ct = c[0] + (c[3] - c[0]) * t;
                    dt = c[1] + (c[2] - c[1]) * t;
                }
                6 => {
                    let t = c[6] / (c[6] - c[7]);
                    bt = c[5] + (c[4] - c[5]) * t;
                    ct = c[1] + (c[0] - c[1]) * t;
                    dt = c[2] + (c[3] - c[2]) * t;
                }
                7 => {
                    let t = c[7] / (c[7] - c[4]);
                    bt = c[6] + (c[5] - c[6]) * t;
                    ct = c[2] + (c[1] - c[2]) * t;
                    dt = c[3] + (c[0] - c[3]) * t;
                }
                8 => {
                    let t = c[0] / (c[0] - c[4]);
                    bt = c[3] + (c[7] - c[3]) * t;
                    ct = c[2] + (c[6] - c[2]) * t;
                    dt = c[1] + (c[5] - c[1]) * t;
                }
                9 => {
                    let t = c[1] / (c[1] - c[5]);
                    bt = c[0] + (c[4] - c[0]) * t;
                    ct = c[3] + (c[7] - c[3]) * t;
                    dt = c[2] + (c[6] - c[2]) * t;
                }
                10 => {
                    let t = c[2] / (c[2] - c[6]);
                    bt = c[1] + (c[5] - c[1]) * t;
                    ct = c[0] + (c[4] - c[0]) * t;
                    dt = c[3] + (c[7] - c[3]) * t;
                }
                11 => {
                    let t = c[3] / (c[3] - c[7]);
                    bt = c[2] + (c[6] - c[2]) * t;
                    ct = c[1] + (c[5] - c[1]) * t;
                    dt = c[0] + (c[4] - c[0]) * t;
                }
                _ => {
                    warn!(edge, cube = ?ctx.cube, "invalid reference edge in interior test");
                    return s < 0;
                }
            }
        }
        _ => {
            warn!(case = ctx.case, cube = ?ctx.cube, "invalid ambiguous case in interior test");
            return s < 0;
        }
    }

    let mut test = 0u8;
    if at >= 0.0 {
        test += 1;
    }
    if bt >= 0.0 {
        test += 2;
    }
    if ct >= 0.0 {
        test += 4;
    }
    if dt >= 0.0 {
        test += 8;
    }
    match test {
        0 | 1 | 2 | 3 | 4 | 6 | 8 | 9 | 12 => s > 0,
        7 | 11 | 13 | 14 | 15 => s < 0,
        5 => {
            if at * ct - bt * dt < f32::EPSILON {
                s > 0
            } else {
                s < 0
            }
        }
        10 => {
            if at * ct - bt * dt >= f32::EPSILON {
                s > 0
            } else {
                s < 0
            }
        }
        _ => s < 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with(cube: [f32; 8], case: u8) -> CellContext {
        CellContext {
            i: 0,
            j: 0,
            k: 0,
            cube,
            case,
            config: 0,
            subconfig: 0,
        }
    }

    #[test]
    fn face_test_selects_joined_diagonal() {
        // Face 5 cycle is (0, 3, 2, 1); corners 0 and 2 strongly positive,
        // 1 and 3 weakly negative: saddle positive, diagonal joined.
        let mut cube = [-0.1f32; 8];
        cube[0] = 1.0;
        cube[2] = 1.0;
        assert!(test_face(&cube, 5));
        // Strong negatives flip the saddle sign.
        cube[1] = -2.0;
        cube[3] = -2.0;
        assert!(!test_face(&cube, 5));
    }

    #[test]
    fn face_test_degenerate_follows_sign() {
        // A*C == B*D exactly: fall back to the sign of the face id.
        let cube = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        assert!(test_face(&cube, 5));
        assert!(!test_face(&cube, -5));
    }

    #[test]
    fn interior_test_case4_separated() {
        // Two weak antipodal positives (corners 2 and 4): no interior
        // component, the test must report "empty" for s = +7.
        let cube = [-1.0, -1.0, 0.2, -1.0, 0.2, -1.0, -1.0, -1.0];
        assert!(test_interior(&ctx_with(cube, 4), 7, -1));
    }

    #[test]
    fn interior_test_case4_tunnel() {
        // Strong antipodal positives against weak negatives: the trilinear
        // interior connects, the test must report "not empty".
        let cube = [-0.05, -0.05, 4.0, -0.05, 4.0, -0.05, -0.05, -0.05];
        assert!(!test_interior(&ctx_with(cube, 4), 7, -1));
    }

    #[test]
    fn interior_test_invalid_edge_falls_through() {
        let cube = [1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0];
        assert!(!test_interior(&ctx_with(cube, 6), 7, 42));
        assert!(test_interior(&ctx_with(cube, 6), -7, 42));
    }

    #[test]
    fn interior_test_invalid_case_falls_through() {
        let cube = [1.0; 8];
        assert!(!test_interior(&ctx_with(cube, 5), 7, 0));
    }
}
