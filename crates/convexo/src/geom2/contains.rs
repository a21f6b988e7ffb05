use nalgebra::Vector2;

use super::types::{edges_of, Poly2};

/// Even-odd (ray casting) containment for a simple polygon.
///
/// A horizontal ray is cast from `p` towards +x; each edge that straddles the
/// line `y = p.y` (exactly one endpoint strictly above it) and crosses it to the
/// right of `p` toggles the result.
///
/// Horizontal edges never straddle, so the interpolation below never divides
/// by zero. Points exactly on an edge may land on either side; callers must not
/// rely on boundary inclusion.
pub fn point_in_polygon(vs: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let mut inside = false;
    for e in edges_of(vs) {
        let (p1, p2) = (e.a, e.b);
        if (p1.y > p.y) != (p2.y > p.y) {
            let x_cross = p1.x + (p.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

impl<S> Poly2<S> {
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_polygon(&self.vs, p)
    }
}
