//! Call contract with the external exact-cover (dancing links) solver.
//!
//! The solver itself lives outside this crate; this module only defines
//! what it is handed and what it hands back, plus the plain-text rows file
//! consumed by the packing tool.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::enumerate::polycubes;
use crate::polycube::{Coord, PolyCube};

/// The inputs the solver consumes: a target board and the piece set.
///
/// The 24-element rotation group is the third input; the solver takes it
/// from [`crate::rotation::rotations`] directly.
#[derive(Clone, Debug)]
pub struct CoverProblem {
    /// The cells to fill.
    pub board: Vec<Coord>,
    /// Piece id to canonical shape.
    pub pieces: BTreeMap<usize, PolyCube>,
}

impl CoverProblem {
    /// The Soma-cube-like puzzle from the original driver: a 3x3x3 board
    /// and every distinct polycube with 1 to 6 cubes as a piece.
    pub fn soma() -> Self {
        let mut board = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    board.push([x, y, z]);
                }
            }
        }

        let mut pieces = BTreeMap::new();
        for n in 1..=6 {
            for p in polycubes(n).iter() {
                pieces.insert(pieces.len(), p.clone());
            }
        }

        Self { board, pieces }
    }
}

/// One named row of the cover matrix: a piece placed on specific board
/// cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementRow {
    pub piece: usize,
    pub cells: Vec<Coord>,
}

/// What the solver returns: the sparse cover matrix as (row, column)
/// pairs, the optional ("at most one") columns, and the named rows.
#[derive(Clone, Debug, Default)]
pub struct Cover {
    pub pairs: Vec<(usize, usize)>,
    pub optional: Vec<usize>,
    pub rows: Vec<PlacementRow>,
}

/// The external solver. Implementations build all valid placements of
/// each piece in the board under rotation and solve the resulting exact
/// cover.
pub trait CoverSolver {
    fn cover(&self, problem: &CoverProblem) -> Cover;
}

/// Write the rows file: the row count, then one `piece cells` line per
/// row with the cell list stringified without whitespace.
pub fn write_rows(w: &mut impl Write, rows: &[PlacementRow]) -> io::Result<()> {
    writeln!(w, "{}", rows.len())?;

    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|c| format!("({},{},{})", c[0], c[1], c[2]))
            .collect();
        writeln!(w, "{} [{}]", row.piece, cells.join(","))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soma_problem_shape() {
        let problem = CoverProblem::soma();

        assert_eq!(problem.board.len(), 27);
        // 1 + 1 + 2 + 8 + 29 + 166 distinct pieces of sizes 1..=6.
        assert_eq!(problem.pieces.len(), 207);

        for (n, count) in [(1, 1), (2, 2), (3, 4), (4, 12), (5, 41), (6, 207)] {
            let with_size = problem.pieces.values().filter(|p| p.len() <= n).count();
            assert_eq!(with_size, count);
        }
    }

    #[test]
    fn rows_file_format() {
        let rows = vec![
            PlacementRow {
                piece: 0,
                cells: vec![[0, 0, 0]],
            },
            PlacementRow {
                piece: 3,
                cells: vec![[0, 0, 0], [1, 0, 0]],
            },
        ];

        let mut out = Vec::new();
        write_rows(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "2\n0 [(0,0,0)]\n3 [(0,0,0),(1,0,0)]\n");
    }
}
