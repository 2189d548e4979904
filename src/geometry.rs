//! Exact 2D geometry: cross products, convex hulls, and point-in-polygon
//! tests.
//!
//! Everything here is integer arithmetic with no tolerances. The stability
//! analyzer depends on boundary cases being classified exactly; a single
//! rounded float comparison could flip a resting orientation.

/// A 2D point on the integer lattice (possibly pre-scaled by a caller).
pub type Point2 = [i64; 2];

/// Twice the signed area of the triangle `p`, `q`, `r`.
///
/// Positive if `r` lies to the left of the directed line from `p` to `q`,
/// zero if collinear, negative if to the right.
pub fn cross(p: Point2, q: Point2, r: Point2) -> i64 {
    (q[0] - p[0]) * (r[1] - p[1]) - (r[0] - p[0]) * (q[1] - p[1])
}

/// Push `p` onto a monotone-chain hull stack, popping vertices that no
/// longer make a strict left turn. Collinear points pop too, so no three
/// consecutive hull vertices are collinear.
fn add_hull(hull: &mut Vec<Point2>, p: Point2) {
    while hull.len() > 1 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
        hull.pop();
    }
    hull.push(p);
}

/// The convex hull of `points`, in counterclockwise order.
///
/// Duplicate input points are ignored. Fewer than 2 distinct points yield
/// a degenerate (possibly empty) result.
pub fn convex_hull(points: impl IntoIterator<Item = Point2>) -> Vec<Point2> {
    let mut points: Vec<Point2> = points.into_iter().collect();
    points.sort_unstable();
    points.dedup();

    let mut lower = Vec::new();
    for &p in &points {
        add_hull(&mut lower, p);
    }
    lower.pop();

    let mut upper = Vec::new();
    for &p in points.iter().rev() {
        add_hull(&mut upper, p);
    }
    upper.pop();

    lower.extend(upper);
    lower
}

/// Where a point lies relative to a polygon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Containment {
    Outside,
    /// Exactly on an edge or vertex of the polygon.
    OnBoundary,
    /// Strictly inside, with the accumulated (nonzero) winding number.
    Inside(i64),
}

impl Containment {
    /// Inside or on the boundary. This is the containment rule the
    /// stability test uses: a center of gravity exactly over the edge of
    /// the support counts as supported.
    pub fn is_contained(&self) -> bool {
        !matches!(self, Containment::Outside)
    }
}

/// Classify point `p` against `polygon` by exact winding number.
///
/// The polygon's edges are walked cyclically; upward edges crossing the
/// horizontal ray through `p` add to the winding number and downward edges
/// subtract, with [`cross`] deciding on which side the crossing happens.
/// Any edge found to pass exactly through `p` short-circuits to
/// [`Containment::OnBoundary`].
pub fn in_polygon(p: Point2, polygon: &[Point2]) -> Containment {
    let mut winding = 0i64;

    for (i, &v) in polygon.iter().enumerate() {
        let w = polygon[(i + 1) % polygon.len()];

        if v[1] <= p[1] {
            if w[1] > p[1] {
                // Upward crossing.
                let a = cross(v, w, p);
                if a > 0 {
                    winding += 1;
                } else if a == 0 {
                    return Containment::OnBoundary;
                }
            } else if v[1] == p[1]
                && (v[0] == p[0] || (p[1] == w[1] && v[0] <= p[0] && p[0] <= w[0]))
            {
                // On a vertex, or on a horizontal edge at p's height.
                return Containment::OnBoundary;
            }
        } else if w[1] <= p[1] {
            // Downward crossing.
            let a = cross(v, w, p);
            if a < 0 {
                winding -= 1;
            } else if a == 0 {
                return Containment::OnBoundary;
            }
        }
    }

    if winding == 0 {
        Containment::Outside
    } else {
        Containment::Inside(winding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        convex_hull([[0, 0], [1, 0], [0, 1], [1, 1]])
    }

    #[test]
    fn cross_signs() {
        assert!(cross([0, 0], [1, 0], [0, 1]) > 0);
        assert!(cross([0, 0], [1, 0], [0, -1]) < 0);
        assert_eq!(cross([0, 0], [1, 0], [2, 0]), 0);
    }

    #[test]
    fn hull_of_unit_square_is_ccw() {
        assert_eq!(unit_square(), vec![[0, 0], [1, 0], [1, 1], [0, 1]]);
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let hull = convex_hull([
            [0, 0],
            [4, 0],
            [2, 0], // collinear on the bottom edge
            [4, 4],
            [0, 4],
            [1, 1], // interior
            [2, 0], // duplicate
        ]);

        assert_eq!(hull, vec![[0, 0], [4, 0], [4, 4], [0, 4]]);
    }

    #[test]
    fn interior_point_has_nonzero_winding() {
        let hull: Vec<Point2> = unit_square().iter().map(|p| [p[0] * 2, p[1] * 2]).collect();

        assert_eq!(in_polygon([1, 1], &hull), Containment::Inside(1));
    }

    #[test]
    fn boundary_points_are_on_boundary() {
        let hull: Vec<Point2> = unit_square().iter().map(|p| [p[0] * 4, p[1] * 4]).collect();

        // Vertex, vertical edge, horizontal edge.
        assert_eq!(in_polygon([0, 0], &hull), Containment::OnBoundary);
        assert_eq!(in_polygon([4, 2], &hull), Containment::OnBoundary);
        assert_eq!(in_polygon([2, 0], &hull), Containment::OnBoundary);
    }

    #[test]
    fn outside_points_are_outside() {
        let hull = unit_square();

        assert_eq!(in_polygon([2, 0], &hull), Containment::Outside);
        assert_eq!(in_polygon([-1, 0], &hull), Containment::Outside);
        assert_eq!(in_polygon([0, 2], &hull), Containment::Outside);
    }

    #[test]
    fn containment_rule() {
        assert!(Containment::OnBoundary.is_contained());
        assert!(Containment::Inside(1).is_contained());
        assert!(!Containment::Outside.is_contained());
    }
}
