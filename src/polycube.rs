//! Polycube representation, canonicalization, and growth.

use hashbrown::HashSet;

use crate::rotation::rotations;

/// A single cube position on the integer lattice.
pub type Coord = [i32; 3];

/// The 6 face-adjacency offsets.
const NEIGHBORS: [Coord; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

/// A polycube: a duplicate-free set of unit cube positions.
///
/// The coordinate list is always sorted, so two polycubes compare equal
/// exactly when they occupy the same cells. Face-connectivity is guaranteed
/// by construction (everything is grown from the unit cube) and never
/// validated; feeding a hand-built disconnected or empty shape into
/// [`canonical`](Self::canonical) or [`grow`](Self::grow) produces
/// degenerate but non-panicking output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolyCube {
    cubes: Vec<Coord>,
}

impl PolyCube {
    /// The single unit cube at the origin.
    pub fn unit() -> Self {
        Self {
            cubes: vec![[0, 0, 0]],
        }
    }

    /// Create a polycube from a list of cube positions.
    ///
    /// The list is sorted and deduplicated; connectivity is the caller's
    /// responsibility.
    pub fn from_cubes(mut cubes: Vec<Coord>) -> Self {
        cubes.sort_unstable();
        cubes.dedup();
        Self { cubes }
    }

    /// The cube positions, in sorted order.
    pub fn cubes(&self) -> &[Coord] {
        &self.cubes
    }

    /// The number of cubes in this polycube.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Returns whether the cell at `c` is occupied.
    pub fn contains(&self, c: &Coord) -> bool {
        self.cubes.binary_search(c).is_ok()
    }

    /// Grid dimensions `max(coord) + 1` per axis.
    ///
    /// Only meaningful for shapes flushed to non-negative coordinates, as
    /// produced by [`canonical`](Self::canonical) and
    /// [`stable`](crate::stability::stable).
    pub fn dims(&self) -> (usize, usize, usize) {
        let max = |axis: usize| {
            self.cubes
                .iter()
                .map(|c| c[axis] + 1)
                .max()
                .unwrap_or_default() as usize
        };

        (max(0), max(1), max(2))
    }

    /// Find the canonical form of this polycube.
    ///
    /// Of the 24 rotation images, each translated into canonical position,
    /// this returns the lexicographically smallest. The result is a pure
    /// function of the shape: equal for any two polycubes related by a
    /// rotation and/or translation, and idempotent.
    pub fn canonical(&self) -> Self {
        let mut best: Option<Vec<Coord>> = None;

        for r in rotations() {
            let mut view: Vec<Coord> = self.cubes.iter().map(|&c| r.apply(c)).collect();
            flush(&mut view);

            // Translate again so the lexicographically smallest cube is
            // the origin; ties between rotations then break identically.
            if let Some(&bound) = view.iter().min() {
                for c in view.iter_mut() {
                    for axis in 0..3 {
                        c[axis] -= bound[axis];
                    }
                }
            }

            view.sort_unstable();

            if best.as_ref().map_or(true, |b| view < *b) {
                best = Some(view);
            }
        }

        Self {
            cubes: best.unwrap_or_default(),
        }
    }

    /// All distinct shapes obtainable by adding one face-adjacent cube.
    ///
    /// Every grown candidate is canonicalized before insertion, so the
    /// returned set contains no rotated duplicates. Canonicalization is the
    /// sole deduplication mechanism.
    pub fn grow(&self) -> HashSet<PolyCube> {
        let mut out = HashSet::new();

        for &c in &self.cubes {
            for d in NEIGHBORS {
                let neighbor = [c[0] + d[0], c[1] + d[1], c[2] + d[2]];
                if self.contains(&neighbor) {
                    continue;
                }

                let mut cubes = self.cubes.clone();
                cubes.push(neighbor);
                out.insert(PolyCube { cubes }.canonical());
            }
        }

        out
    }

    /// Rotate by `r` and flush so the minimum coordinate per axis is 0.
    pub(crate) fn rotated_flushed(&self, r: &crate::rotation::Rotation) -> Vec<Coord> {
        let mut view: Vec<Coord> = self.cubes.iter().map(|&c| r.apply(c)).collect();
        flush(&mut view);
        view
    }

    /// Build a polycube from an already-sorted, duplicate-free list.
    pub(crate) fn from_sorted(cubes: Vec<Coord>) -> Self {
        debug_assert!(cubes.windows(2).all(|w| w[0] < w[1]));
        Self { cubes }
    }
}

/// Translate so the minimum coordinate along each axis is 0.
fn flush(view: &mut [Coord]) {
    let mut min = match view.first() {
        Some(&c) => c,
        None => return,
    };

    for c in view.iter() {
        for axis in 0..3 {
            min[axis] = min[axis].min(c[axis]);
        }
    }

    for c in view.iter_mut() {
        for axis in 0..3 {
            c[axis] -= min[axis];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::rotations;

    #[test]
    fn canonical_is_idempotent() {
        let p = PolyCube::from_cubes(vec![[0, 0, 0], [1, 0, 0], [1, 1, 0], [1, 1, 1]]);

        let once = p.canonical();
        assert_eq!(once.canonical(), once);
    }

    #[test]
    fn canonical_is_rotation_invariant() {
        let p = PolyCube::from_cubes(vec![[0, 0, 0], [1, 0, 0], [1, 1, 0], [2, 1, 0]]);
        let expected = p.canonical();

        for r in rotations() {
            let rotated = PolyCube::from_cubes(p.cubes().iter().map(|&c| r.apply(c)).collect());
            assert_eq!(rotated.canonical(), expected);
        }
    }

    #[test]
    fn canonical_is_translation_invariant() {
        let p = PolyCube::from_cubes(vec![[0, 0, 0], [0, 1, 0], [0, 2, 0]]);
        let moved = PolyCube::from_cubes(vec![[5, -3, 7], [5, -2, 7], [5, -1, 7]]);

        assert_eq!(p.canonical(), moved.canonical());
    }

    #[test]
    fn canonical_contains_origin() {
        let p = PolyCube::from_cubes(vec![[3, 1, 4], [3, 2, 4], [4, 2, 4], [4, 2, 5]]);

        assert!(p.canonical().contains(&[0, 0, 0]));
    }

    #[test]
    fn grow_unit_cube() {
        let grown = PolyCube::unit().grow();

        // All 6 neighbors of a single cube are the same domino.
        assert_eq!(grown.len(), 1);
        let domino = grown.into_iter().next().unwrap();
        assert_eq!(domino.len(), 2);
    }

    #[test]
    fn grow_does_not_refill_occupied_cells() {
        let domino = PolyCube::from_cubes(vec![[0, 0, 0], [0, 0, 1]]);

        for p in domino.grow() {
            assert_eq!(p.len(), 3);
        }
    }

    #[test]
    fn dims_of_flushed_shape() {
        let p = PolyCube::from_cubes(vec![[0, 0, 0], [1, 0, 0], [1, 2, 0]]);
        assert_eq!(p.dims(), (2, 3, 1));
    }
}
