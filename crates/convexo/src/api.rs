//! Curated surface for callers that only hand over vertex lists.
//!
//! The rendering side owns windows, colours and animation; it calls in with raw
//! vertices and gets back booleans or new vertex loops. Styles are passed
//! through untouched.

pub use crate::geom2::rand::{
    draw_polygon_radial, RadialCfg, ReplayToken as PolyReplay, VertexCount,
};
pub use crate::geom2::shapes::{line_points, regular_polygon, star};
pub use crate::geom2::{
    candidate_points, convex_hull, cross, intersect_convex, is_convex, order_ccw, orientation,
    point_in_polygon, segment_intersection, Aff2, GeomCfg, InputError, Orientation, Poly2, Seg2,
    DEFAULT_TOL,
};

/// Intersection of two convex polygons using the default tolerance, keeping
/// the caller's style token.
pub fn intersect_convex_default<A, B, S>(
    p1: &Poly2<A>,
    p2: &Poly2<B>,
    style: S,
) -> Option<Poly2<S>> {
    intersect_convex(&p1.vs, &p2.vs, GeomCfg::default().tol, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn default_tolerance_entry_point() {
        let a = regular_polygon(8, 10.0);
        let b = a.translated(vector![5.0, 0.0]).restyle("blue");
        let r = intersect_convex_default(&a, &b, "red").expect("overlap");
        assert_eq!(r.style, "red");
        assert_eq!(b.style, "blue");
        assert!(is_convex(&r.vs));
    }
}
