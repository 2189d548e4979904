use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

mod enumerate;
use enumerate::enumerate;
mod pieces;
use pieces::{pieces, rows};

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template = format!(
        "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}"
    );

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

pub fn finish_bar(bar: &ProgressBar, duration: Duration, found: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Found {found} unique polycubes (N = {n}) in {secs}.{micros} s"
    ));
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Enumerate polycubes with a specific amount of cubes present
    Enumerate(EnumerateOpts),
    /// Print the 3D-printable piece description of every polycube's
    /// stable orientation
    Pieces(PiecesOpts),
    /// Print the board and piece table handed to the exact-cover solver
    Rows,
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N value for which to calculate all unique polycubes.
    pub n: usize,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,

    /// Don't use cache files
    #[clap(long, short = 'c')]
    pub no_cache: bool,

    /// Compress written cache files
    #[clap(long, short = 'z', value_enum, default_value = "none")]
    pub cache_compression: Compression,
}

#[derive(Clone, Args)]
pub struct PiecesOpts {
    /// Emit pieces for all polycubes of 1 up to this many cubes.
    pub max_n: usize,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Compression {
    None,
    Gzip,
}

impl From<Compression> for polycubes::cache::Compression {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => polycubes::cache::Compression::None,
            Compression::Gzip => polycubes::cache::Compression::Gzip,
        }
    }
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(e) => enumerate(&e),
        Opts::Pieces(p) => pieces(&p),
        Opts::Rows => rows(),
    }
}
