//! Memoized enumeration of all polycubes of a given size.

use std::sync::Arc;

use hashbrown::HashSet;
use indicatif::ProgressBar;
use parking_lot::RwLock;

use crate::polycube::PolyCube;

/// Per-size memo of enumeration results. Append-only: a stored generation
/// is never recomputed or mutated, and lives for the rest of the process.
static CACHE: RwLock<std::collections::BTreeMap<usize, Arc<Vec<PolyCube>>>> =
    RwLock::new(std::collections::BTreeMap::new());

/// All distinct polycubes with `n` cubes, as canonical forms in sorted
/// order.
///
/// Shapes are identified up to rotation only; mirror images count
/// separately. The result for each `n` is computed once and memoized, so
/// repeated calls (and calls for larger sizes, which recurse through the
/// smaller ones) are cheap. Expect exponential growth in `n`.
///
/// `polycubes(0)` is an empty list.
pub fn polycubes(n: usize) -> Arc<Vec<PolyCube>> {
    if let Some(cached) = CACHE.read().get(&n) {
        return cached.clone();
    }

    let result = if n == 0 {
        Vec::new()
    } else if n == 1 {
        vec![PolyCube::unit()]
    } else {
        let mut set = HashSet::new();
        for p in polycubes(n - 1).iter() {
            set.extend(p.grow());
        }

        let mut all: Vec<_> = set.into_iter().collect();
        all.sort_unstable();
        all
    };

    // The computation ran outside the lock; if another thread got here
    // first, its result wins and ours is discarded.
    CACHE
        .write()
        .entry(n)
        .or_insert_with(|| Arc::new(result))
        .clone()
}

/// Seed the memo for size `n` with an already-enumerated generation, e.g.
/// one loaded from a cache file.
///
/// The shapes must be the complete canonical set for `n`; this is not
/// verified. A generation already present in the memo is left untouched.
pub fn prime(n: usize, mut shapes: Vec<PolyCube>) {
    shapes.sort_unstable();
    CACHE.write().entry(n).or_insert_with(|| Arc::new(shapes));
}

/// Grow every shape in `from_set` by one cube and collect the distinct
/// results, advancing `bar` once per seed shape.
pub fn unique_growths(bar: &ProgressBar, from_set: &[PolyCube]) -> Vec<PolyCube> {
    let mut next = HashSet::new();

    for p in from_set {
        next.extend(p.grow());
        bar.inc(1);
    }

    let mut all: Vec<_> = next.into_iter().collect();
    all.sort_unstable();
    all
}

/// Parallel version of [`unique_growths`].
///
/// The seed generation is split into one chunk per logical CPU and fanned
/// out with rayon; all chunks insert into a shared lock-guarded set. The
/// union over canonical forms is commutative, so chunk completion order
/// does not matter.
pub fn unique_growths_rayon(bar: &ProgressBar, from_set: &[PolyCube]) -> Vec<PolyCube> {
    use rayon::prelude::*;

    if from_set.is_empty() {
        return Vec::new();
    }

    let chunk_size = (from_set.len() / num_cpus::get()) + 1;

    let next = RwLock::new(HashSet::new());

    from_set.par_chunks(chunk_size).for_each(|chunk| {
        for p in chunk {
            let grown = p.grow();

            let mut set = next.write();
            for g in grown {
                set.insert(g);
            }
            drop(set);

            bar.inc(1);
        }
    });

    let mut all: Vec<_> = next.into_inner().into_iter().collect();
    all.sort_unstable();
    all
}
