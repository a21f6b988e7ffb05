use nalgebra::Vector2;

use super::types::Seg2;

/// Intersection point of two finite segments, if any.
///
/// Each segment is turned into its implicit line `A x + B y = C` and the pair is
/// solved by Cramer's rule. `|det| < tol` counts as parallel and yields `None`;
/// this includes collinear segments that overlap, which are not reported.
/// The solved point must fall inside both segments' bounding boxes grown by
/// `tol` on each axis.
pub fn segment_intersection(s1: Seg2, s2: Seg2, tol: f64) -> Option<Vector2<f64>> {
    let (a1, b1, c1) = s1.line_coeffs();
    let (a2, b2, c2) = s2.line_coeffs();
    let det = a1 * b2 - a2 * b1;
    if det.abs() < tol {
        return None;
    }
    let x = (b2 * c1 - b1 * c2) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    let p = Vector2::new(x, y);
    (s1.bbox_contains_eps(p, tol) && s2.bbox_contains_eps(p, tol)).then_some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::DEFAULT_TOL;
    use nalgebra::vector;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Seg2 {
        Seg2::new(vector![ax, ay], vector![bx, by])
    }

    #[test]
    fn crossing_diagonals() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        let p = segment_intersection(a, b, DEFAULT_TOL).expect("diagonals cross");
        assert!((p - vector![5.0, 5.0]).norm() < 1e-12);
    }

    #[test]
    fn lines_cross_outside_segments() {
        // Lines meet at (5, 5) but the second segment stops at x = 4.
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 4.0, 6.0);
        assert!(segment_intersection(a, b, DEFAULT_TOL).is_none());
    }

    #[test]
    fn parallel_and_collinear_are_none() {
        let base = seg(0.0, 0.0, 10.0, 0.0);
        assert!(segment_intersection(base, seg(0.0, 1.0, 10.0, 1.0), DEFAULT_TOL).is_none());
        // Overlapping collinear segments are not reported.
        assert!(segment_intersection(base, seg(5.0, 0.0, 15.0, 0.0), DEFAULT_TOL).is_none());
    }

    #[test]
    fn shared_endpoint_is_found() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        let p = segment_intersection(a, b, DEFAULT_TOL).expect("touching at a corner");
        assert_eq!(p, vector![10.0, 0.0]);
    }

    #[test]
    fn tolerance_grows_the_boxes() {
        // Vertical segment ends just short of the horizontal one.
        let h = seg(0.0, 0.0, 10.0, 0.0);
        let v = seg(5.0, 1e-10, 5.0, 10.0);
        assert!(segment_intersection(h, v, 1e-9).is_some());
        assert!(segment_intersection(h, v, 1e-11).is_none());
    }

    #[test]
    fn symmetric_in_argument_order() {
        let s1 = seg(0.3, -1.2, 7.1, 4.4);
        let s2 = seg(-2.0, 3.0, 6.5, -0.5);
        let p = segment_intersection(s1, s2, DEFAULT_TOL).unwrap();
        let q = segment_intersection(s2, s1, DEFAULT_TOL).unwrap();
        assert_eq!(p, q);
    }
}
