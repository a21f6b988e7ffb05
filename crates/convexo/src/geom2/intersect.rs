//! Intersection of two convex polygons.
//!
//! Method
//! - Candidates are every edge/edge crossing plus every vertex of one polygon
//!   that lies inside the other. For convex inputs this set is exactly the
//!   vertex set of the intersection.
//! - Exact duplicates are dropped and the rest is ordered by angle around the
//!   centroid, which gives a simple counter-clockwise boundary for a convex set.
//!
//! Limits
//! - Inputs are assumed convex and are not checked; concave inputs give an
//!   unspecified polygon.
//! - Deduplication is exact, so two candidates that differ by rounding both
//!   survive and show up as a redundant vertex.
//!
//! Code cross-refs: `segment::segment_intersection`, `contains::point_in_polygon`,
//! `util::order_ccw`

use nalgebra::Vector2;

use super::contains::point_in_polygon;
use super::segment::segment_intersection;
use super::types::{edges_of, Poly2};
use super::util::order_ccw;

/// Unordered candidate set (edge crossings, then contained vertices of `p1`,
/// then contained vertices of `p2`), duplicates included.
///
/// Each row of the edge-pair matrix is collected into its own list and the rows
/// are concatenated afterwards; the later angular sort makes the merge order
/// irrelevant.
pub fn candidate_points(p1: &[Vector2<f64>], p2: &[Vector2<f64>], tol: f64) -> Vec<Vector2<f64>> {
    let rows: Vec<Vec<Vector2<f64>>> = edges_of(p1)
        .map(|e1| {
            edges_of(p2)
                .filter_map(|e2| segment_intersection(e1, e2, tol))
                .collect()
        })
        .collect();
    let mut out = rows.concat();
    out.extend(p1.iter().copied().filter(|&v| point_in_polygon(p2, v)));
    out.extend(p2.iter().copied().filter(|&v| point_in_polygon(p1, v)));
    out
}

/// Intersection of two convex polygons as a new polygon tagged with `style`.
///
/// Returns `None` when fewer than 3 distinct candidate points remain (disjoint,
/// touching, or degenerate inputs). The result is counter-clockwise and owns
/// its vertices.
pub fn intersect_convex<S>(
    p1: &[Vector2<f64>],
    p2: &[Vector2<f64>],
    tol: f64,
    style: S,
) -> Option<Poly2<S>> {
    if p1.len() < 3 || p2.len() < 3 {
        return None;
    }
    let pts = order_ccw(&candidate_points(p1, p2, tol));
    if pts.len() < 3 {
        return None;
    }
    Some(Poly2::with_style(pts, style))
}

impl<S> Poly2<S> {
    /// `intersect_convex(self, other, tol, style)`.
    #[inline]
    pub fn intersect_convex<T, U>(&self, other: &Poly2<T>, tol: f64, style: U) -> Option<Poly2<U>> {
        intersect_convex(&self.vs, &other.vs, tol, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{is_convex, DEFAULT_TOL};
    use nalgebra::vector;

    fn square(x0: f64, y0: f64, side: f64) -> Poly2 {
        Poly2::new(vec![
            vector![x0, y0],
            vector![x0 + side, y0],
            vector![x0 + side, y0 + side],
            vector![x0, y0 + side],
        ])
    }

    #[test]
    fn half_offset_squares_give_quarter() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let r = a.intersect_convex(&b, DEFAULT_TOL, "red").expect("overlap");
        assert_eq!(r.len(), 4);
        assert!((r.area() - a.area() / 4.0).abs() < 1e-9);
        assert!(r.signed_area() > 0.0);
        assert_eq!(r.style, "red");
        for v in [
            vector![5.0, 5.0],
            vector![10.0, 5.0],
            vector![10.0, 10.0],
            vector![5.0, 10.0],
        ] {
            assert!(r.vs.iter().any(|w| (w - v).norm() < 1e-12));
        }
    }

    #[test]
    fn disjoint_is_none() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(20.0, 20.0, 5.0);
        assert!(a.intersect_convex(&b, DEFAULT_TOL, ()).is_none());
        assert!(candidate_points(&a.vs, &b.vs, DEFAULT_TOL).is_empty());
    }

    #[test]
    fn nested_returns_inner() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 3.0, 4.0);
        let r = intersect_convex(&outer.vs, &inner.vs, DEFAULT_TOL, ()).unwrap();
        assert_eq!(r.len(), 4);
        assert!((r.area() - 16.0).abs() < 1e-9);
        assert!(is_convex(&r.vs));
    }

    #[test]
    fn triangle_over_square() {
        let sq = square(0.0, 0.0, 10.0);
        let tri = Poly2::new(vec![vector![5.0, 5.0], vector![15.0, 5.0], vector![5.0, 15.0]]);
        let r = sq.intersect_convex(&tri, DEFAULT_TOL, ()).unwrap();
        // The hypotenuse only touches the square at (10,10), found twice by
        // crossings and merged by the exact dedup.
        assert_eq!(r.len(), 4);
        assert!((r.area() - 25.0).abs() < 1e-9);
        assert!(r.is_convex());
    }

    #[test]
    fn degenerate_inputs_are_none() {
        let sq = square(0.0, 0.0, 10.0);
        let seg = Poly2::new(vec![vector![1.0, 1.0], vector![9.0, 9.0]]);
        assert!(sq.intersect_convex(&seg, DEFAULT_TOL, ()).is_none());
        assert!(seg.intersect_convex(&sq, DEFAULT_TOL, ()).is_none());
        assert!(intersect_convex(&[], &sq.vs, DEFAULT_TOL, ()).is_none());
    }

    #[test]
    fn inputs_are_not_aliased() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        let before = (a.clone(), b.clone());
        let mut r = a.intersect_convex(&b, DEFAULT_TOL, ()).unwrap();
        r.vs[0] = vector![-100.0, -100.0];
        assert_eq!((a, b), before);
    }
}
