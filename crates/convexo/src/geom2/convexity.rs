use nalgebra::Vector2;

use super::types::Poly2;
use super::util::{orientation, Orientation};

/// Convexity of a closed vertex loop.
///
/// For every consecutive triple `(v[i], v[i+1], v[i+2])` (indices mod n) the
/// cross product of the two edge vectors is taken. The sign of the first
/// nonzero one is recorded; any later nonzero cross product of the other sign
/// means a reflex turn and the loop is not convex. Exactly-zero cross products
/// (collinear triples) are skipped.
///
/// Edge cases
/// - Fewer than 3 vertices: `false`.
/// - Every triple collinear (e.g. `(0,0),(1,0),(2,0)`): `true`, since no sign
///   change is ever observed.
/// - Either winding is accepted.
pub fn is_convex(vs: &[Vector2<f64>]) -> bool {
    let n = vs.len();
    if n < 3 {
        return false;
    }
    let mut first: Option<Orientation> = None;
    for i in 0..n {
        // Zero slack: only an exactly-zero cross product counts as collinear.
        let turn = orientation(vs[i], vs[(i + 1) % n], vs[(i + 2) % n], 0.0);
        if turn == Orientation::Collinear {
            continue;
        }
        match first {
            None => first = Some(turn),
            Some(f) if f != turn => return false,
            Some(_) => {}
        }
    }
    true
}

impl<S> Poly2<S> {
    #[inline]
    pub fn is_convex(&self) -> bool {
        is_convex(&self.vs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_both_windings() {
        let ccw = vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ];
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!(is_convex(&ccw));
        assert!(is_convex(&cw));
    }

    #[test]
    fn reflex_vertex_is_not_convex() {
        let quad = vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![5.0, -1.0],
            vector![5.0, 10.0],
        ];
        assert!(!is_convex(&quad));

        let dart = vec![
            vector![0.0, 0.0],
            vector![5.0, 2.0],
            vector![10.0, 0.0],
            vector![5.0, 10.0],
        ];
        assert!(!is_convex(&dart));
    }

    #[test]
    fn degenerate_loops() {
        assert!(!is_convex(&[]));
        assert!(!is_convex(&[vector![0.0, 0.0], vector![1.0, 0.0]]));
        // All collinear: no sign is ever seen, reported convex.
        assert!(is_convex(&[
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0]
        ]));
    }

    #[test]
    fn collinear_vertex_on_edge_is_skipped() {
        let p = Poly2::new(vec![
            vector![0.0, 0.0],
            vector![5.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ]);
        assert!(p.is_convex());
    }
}
