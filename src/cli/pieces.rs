use rayon::prelude::*;

use polycubes::{
    burr::burr_piece_stmt,
    cover::CoverProblem,
    polycube::PolyCube,
    polycubes,
    stability::stable,
};

use crate::{make_bar, PiecesOpts};

fn piece_line(p: &PolyCube) -> String {
    match stable(p) {
        Some(rested) => burr_piece_stmt(&rested),
        // Defensive: a connected polycube always has a resting pose.
        None => format!("// no stable orientation for {:?}", p.cubes()),
    }
}

/// Print the `burr_piece` statement for the stable orientation of every
/// polycube with 1 to `max_n` cubes.
pub fn pieces(opts: &PiecesOpts) {
    for n in 1..=opts.max_n {
        let shapes = polycubes(n);

        let bar = make_bar(shapes.len() as u64);
        bar.set_message(format!("Orienting polycubes of N = {n}..."));

        let lines: Vec<String> = if opts.no_parallelism {
            shapes
                .iter()
                .map(|p| {
                    let line = piece_line(p);
                    bar.inc(1);
                    line
                })
                .collect()
        } else {
            shapes
                .par_iter()
                .map(|p| {
                    let line = piece_line(p);
                    bar.inc(1);
                    line
                })
                .collect()
        };

        bar.finish_and_clear();

        for line in lines {
            println!("{line}");
        }
    }
}

/// Print the inputs handed to the external exact-cover solver: the board
/// cells and the piece table.
pub fn rows() {
    let problem = CoverProblem::soma();

    println!("board {}", problem.board.len());
    for c in &problem.board {
        print!("({},{},{})", c[0], c[1], c[2]);
    }
    println!();

    println!("pieces {}", problem.pieces.len());
    for (id, piece) in &problem.pieces {
        let cells: Vec<String> = piece
            .cubes()
            .iter()
            .map(|c| format!("({},{},{})", c[0], c[1], c[2]))
            .collect();
        println!("{id} [{}]", cells.join(","));
    }
}
