//! Plain-text cache files for enumerated generations.
//!
//! Growing a generation is exponential work, so the CLI persists every
//! completed size to `polycubes_{n}.pcs` and resumes from the largest one
//! available. The format is line-oriented: a magic line, an `n=.. count=..`
//! header, then one shape per line with its coordinates as `x,y,z` triples
//! joined by `;`. Files may optionally be gzip-compressed; the reader
//! detects this from the gzip magic bytes.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read, Seek, Write},
    path::Path,
};

mod compression;
pub use compression::Compression;
use compression::{Reader, Writer};

use crate::polycube::PolyCube;

const MAGIC: &str = "polycubes-cache";
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A fully-read cache file: the generation size and its shapes.
#[derive(Debug)]
pub struct CacheFile {
    n: usize,
    cubes: Vec<PolyCube>,
}

fn invalid(msg: impl Into<String>) -> std::io::Error {
    std::io::Error::new(ErrorKind::InvalidData, msg.into())
}

/// The cache file name for generation `n`, relative to the working
/// directory.
pub fn file_name(n: usize) -> String {
    format!("polycubes_{n}.pcs")
}

impl CacheFile {
    /// The generation size recorded in the header.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn into_cubes(self) -> Vec<PolyCube> {
        self.cubes
    }

    /// Read and parse a cache file, sniffing for gzip compression.
    pub fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 2];
        let compression = match file.read_exact(&mut magic) {
            Ok(()) if magic == GZIP_MAGIC => Compression::Gzip,
            _ => Compression::None,
        };
        file.rewind()?;

        Self::parse(Reader::new(compression, file))
    }

    fn parse(input: impl Read) -> std::io::Result<Self> {
        let mut lines = BufReader::new(input).lines();

        let mut next_line = || -> std::io::Result<String> {
            lines
                .next()
                .ok_or_else(|| invalid("unexpected end of cache file"))?
        };

        if next_line()? != MAGIC {
            return Err(invalid("not a polycube cache file"));
        }

        let header = next_line()?;
        let (n, count) = header
            .strip_prefix("n=")
            .and_then(|rest| rest.split_once(" count="))
            .and_then(|(n, count)| Some((n.parse().ok()?, count.parse().ok()?)))
            .ok_or_else(|| invalid(format!("malformed cache header: {header}")))?;

        let mut cubes = Vec::with_capacity(count);
        for _ in 0..count {
            cubes.push(parse_shape(&next_line()?, n)?);
        }

        Ok(Self { n, cubes })
    }

    /// Write the shapes of generation `n` to `path`.
    pub fn write(
        path: impl AsRef<Path>,
        n: usize,
        cubes: &[PolyCube],
        compression: Compression,
    ) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut out = Writer::new(compression, file);

        writeln!(out, "{MAGIC}")?;
        writeln!(out, "n={n} count={}", cubes.len())?;

        for cube in cubes {
            let coords: Vec<String> = cube
                .cubes()
                .iter()
                .map(|c| format!("{},{},{}", c[0], c[1], c[2]))
                .collect();
            writeln!(out, "{}", coords.join(";"))?;
        }

        out.finish()
    }
}

fn parse_shape(line: &str, n: usize) -> std::io::Result<PolyCube> {
    let mut cubes = Vec::with_capacity(n);

    for coord in line.split(';') {
        let mut parts = coord.split(',').map(|v| v.parse::<i32>());

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => cubes.push([x, y, z]),
            _ => return Err(invalid(format!("malformed coordinate triple in: {line}"))),
        }
    }

    let shape = PolyCube::from_cubes(cubes);
    if shape.len() != n {
        return Err(invalid(format!(
            "shape has {} cubes, expected {n}: {line}",
            shape.len()
        )));
    }

    Ok(shape)
}

/// Find the largest cache file for a generation below `n`.
///
/// Unreadable or malformed files are skipped.
pub fn resume_from(n: usize) -> Option<CacheFile> {
    (2..n)
        .rev()
        .find_map(|m| CacheFile::read(file_name(m)).ok())
}
