//! Layered-grid piece descriptions for 3D-printable puzzle pieces.

use crate::polycube::PolyCube;

/// Render `polycube` as one grid string per z layer.
///
/// Each layer holds one row of 'x'/'.' cells per y, rows joined by '|',
/// with grid dimensions `max(coord) + 1` per axis. The shape must already
/// be flushed to non-negative coordinates, as `stable` and `canonical`
/// guarantee; stray negative coordinates would simply fall outside the
/// grid.
pub fn burr_piece(polycube: &PolyCube) -> Vec<String> {
    let (cols, rows, layers) = polycube.dims();

    (0..layers as i32)
        .map(|z| {
            (0..rows as i32)
                .map(|y| {
                    (0..cols as i32)
                        .map(|x| {
                            if polycube.contains(&[x, y, z]) {
                                'x'
                            } else {
                                '.'
                            }
                        })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}

/// The full `burr_piece(["..", ...]);` statement consumed by the
/// downstream modeling script.
pub fn burr_piece_stmt(polycube: &PolyCube) -> String {
    let layers: Vec<String> = burr_piece(polycube)
        .into_iter()
        .map(|layer| format!("\"{layer}\""))
        .collect();

    format!("burr_piece([{}]);", layers.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polycube::PolyCube;

    #[test]
    fn domino_is_two_cells() {
        let domino = PolyCube::from_cubes(vec![[0, 0, 0], [1, 0, 0]]);

        assert_eq!(burr_piece(&domino), vec!["xx".to_string()]);
    }

    #[test]
    fn bent_tromino_leaves_a_gap() {
        let bent = PolyCube::from_cubes(vec![[0, 0, 0], [1, 0, 0], [1, 1, 0]]);

        assert_eq!(burr_piece(&bent), vec!["xx|.x".to_string()]);
    }

    #[test]
    fn layers_stack_along_z() {
        let tower = PolyCube::from_cubes(vec![[0, 0, 0], [0, 0, 1], [1, 0, 0]]);

        assert_eq!(burr_piece(&tower), vec!["xx".to_string(), "x.".to_string()]);
    }

    #[test]
    fn statement_format() {
        let domino = PolyCube::from_cubes(vec![[0, 0, 0], [1, 0, 0]]);

        assert_eq!(burr_piece_stmt(&domino), r#"burr_piece(["xx"]);"#);
    }
}
