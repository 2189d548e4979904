//! The 24 proper rotations of the cube.

use std::sync::OnceLock;

use crate::polycube::Coord;

/// An orientation-preserving symmetry of the cube: a 3x3 integer matrix
/// with entries in {-1, 0, 1} and determinant +1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Rotation([[i32; 3]; 3]);

impl Rotation {
    pub const IDENTITY: Rotation = Rotation([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Quarter turn about the x axis.
    const X: Rotation = Rotation([[1, 0, 0], [0, 0, -1], [0, 1, 0]]);
    /// Quarter turn about the y axis.
    const Y: Rotation = Rotation([[0, 0, 1], [0, 1, 0], [-1, 0, 0]]);
    /// Quarter turn about the z axis.
    const Z: Rotation = Rotation([[0, -1, 0], [1, 0, 0], [0, 0, 1]]);

    /// Apply this rotation to a coordinate (matrix-vector product).
    pub fn apply(&self, c: Coord) -> Coord {
        let m = &self.0;
        [
            m[0][0] * c[0] + m[0][1] * c[1] + m[0][2] * c[2],
            m[1][0] * c[0] + m[1][1] * c[1] + m[1][2] * c[2],
            m[2][0] * c[0] + m[2][1] * c[1] + m[2][2] * c[2],
        ]
    }

    /// The rotation equivalent to applying `other` first, then `self`
    /// (matrix product).
    pub fn compose(&self, other: &Rotation) -> Rotation {
        let (a, b) = (&self.0, &other.0);
        let mut out = [[0; 3]; 3];

        for i in 0..3 {
            for j in 0..3 {
                out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }

        Rotation(out)
    }

    pub fn determinant(&self) -> i32 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    fn powers(&self) -> [Rotation; 4] {
        let mut out = [Rotation::IDENTITY; 4];
        for i in 1..4 {
            out[i] = out[i - 1].compose(self);
        }
        out
    }
}

/// All 24 rotations of the cube, in a fixed deterministic order.
///
/// Built exactly once, as the products of integer powers of the three axis
/// quarter turns. Exact integer matrices are required both for the
/// deduplication here and to keep rotated coordinates on the lattice.
pub fn rotations() -> &'static [Rotation] {
    static ROTATIONS: OnceLock<Vec<Rotation>> = OnceLock::new();

    ROTATIONS.get_or_init(|| {
        let mut set = hashbrown::HashSet::new();

        for a in Rotation::X.powers() {
            for b in Rotation::Y.powers() {
                for c in Rotation::Z.powers() {
                    set.insert(a.compose(&b).compose(&c));
                }
            }
        }

        let mut all: Vec<_> = set.into_iter().collect();
        all.sort();
        all
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_24_elements() {
        assert_eq!(rotations().len(), 24);
    }

    #[test]
    fn contains_identity() {
        assert!(rotations().contains(&Rotation::IDENTITY));
    }

    #[test]
    fn all_determinants_are_one() {
        for r in rotations() {
            assert_eq!(r.determinant(), 1, "{r:?}");
        }
    }

    #[test]
    fn closed_under_composition() {
        for a in rotations() {
            for b in rotations() {
                assert!(rotations().contains(&a.compose(b)), "{a:?} * {b:?}");
            }
        }
    }

    #[test]
    fn entries_are_signed_units() {
        for r in rotations() {
            for row in r.0 {
                assert_eq!(row.iter().map(|v| v * v).sum::<i32>(), 1);
                assert!(row.iter().all(|v| (-1..=1).contains(v)));
            }
        }
    }

    #[test]
    fn apply_matches_generators() {
        assert_eq!(Rotation::X.apply([0, 1, 0]), [0, 0, 1]);
        assert_eq!(Rotation::Y.apply([0, 0, 1]), [1, 0, 0]);
        assert_eq!(Rotation::Z.apply([1, 0, 0]), [0, 1, 0]);
    }
}
