use std::time::Instant;

use polycubes::{
    cache::{self, CacheFile},
    enumerate::{prime, unique_growths, unique_growths_rayon},
    polycube::PolyCube,
};

use crate::{finish_bar, make_bar, EnumerateOpts};

fn save_to_cache(compression: crate::Compression, n: usize, cubes: &[PolyCube]) {
    let name = cache::file_name(n);
    if std::fs::File::open(&name).is_ok() {
        println!("Cache file already exists for N = {n}. Not overwriting.");
        return;
    }

    println!("Saving {} cubes to cache file", cubes.len());
    if let Err(e) = CacheFile::write(&name, n, cubes, compression.into()) {
        println!("Failed to write cache file {name}. Error: {e}.");
    }
}

/// Load the largest usable cache file below `n`, or fall back to the
/// unit cube.
fn load_seeds(n: usize) -> (usize, Vec<PolyCube>) {
    if let Some(file) = cache::resume_from(n) {
        println!("Found cache for N = {}.", file.n());

        let start_n = file.n();
        let cubes = file.into_cubes();

        // Let in-process enumeration benefit from the cache too.
        prime(start_n, cubes.clone());

        (start_n, cubes)
    } else {
        println!(
            "No cache file found for size <= {}. Starting from N = 1",
            n.saturating_sub(1)
        );

        (1, vec![PolyCube::unit()])
    }
}

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;

    if n == 0 {
        println!("Unique polycubes found for N = 0: 0.");
        return;
    }

    let start = Instant::now();

    let (mut i, mut current) = if opts.no_cache {
        (1, vec![PolyCube::unit()])
    } else {
        load_seeds(n)
    };

    while i < n {
        let bar = make_bar(current.len() as u64);
        bar.set_message(format!("Expanding base polycubes of N = {i}..."));

        let level_start = Instant::now();

        let next = if opts.no_parallelism {
            unique_growths(&bar, &current)
        } else {
            unique_growths_rayon(&bar, &current)
        };

        finish_bar(&bar, level_start.elapsed(), next.len(), i + 1);

        i += 1;

        if !opts.no_cache {
            save_to_cache(opts.cache_compression, i, &next);
            prime(i, next.clone());
        }

        current = next;
    }

    let duration = start.elapsed();

    println!("Unique polycubes found for N = {n}: {}.", current.len());
    println!("Duration: {} ms", duration.as_millis());
}
