use std::cmp::Ordering;

use nalgebra::Vector2;

/// z-component of `a × b`; positive when `b` turns counter-clockwise from `a`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Turn direction of the path `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Ccw,
    Cw,
    Collinear,
}

/// Orientation of `a → b → c`; `|cross| <= eps` counts as collinear.
#[inline]
pub fn orientation(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    eps: f64,
) -> Orientation {
    let z = cross(b - a, c - b);
    if z > eps {
        Orientation::Ccw
    } else if z < -eps {
        Orientation::Cw
    } else {
        Orientation::Collinear
    }
}

#[inline]
pub(crate) fn angle_of(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

#[inline]
fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Arithmetic mean of the points; `None` for an empty slice.
pub fn centroid_of(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Drop coordinate-wise identical points (exact `==`, no tolerance).
///
/// Signed zeros are merged: `-0.0` is rewritten to `0.0` before sorting, so
/// `(-0, y)` and `(0, y)` collapse to one point as `==` says they should.
/// Near-duplicates from independent computations survive; callers that need
/// merging within a tolerance must do it themselves.
pub fn dedup_exact(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    // `total_cmp` orders -0.0 before 0.0; adding +0.0 maps -0.0 to 0.0.
    let mut pts: Vec<Vector2<f64>> = points.iter().map(|p| p.map(|c| c + 0.0)).collect();
    pts.sort_by(lex_cmp);
    pts.dedup_by(|a, b| a == b);
    pts
}

/// Order a point cloud into a boundary loop around its centroid.
///
/// Exact duplicates are removed first, then points are sorted by ascending
/// `atan2` about the centroid (counter-clockwise, starting at angle -π). For the
/// vertex set of a convex polygon this is a valid simple boundary.
pub fn order_ccw(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts = dedup_exact(points);
    let Some(c) = centroid_of(&pts) else {
        return pts;
    };
    pts.sort_by(|a, b| angle_of(a - c).total_cmp(&angle_of(b - c)));
    pts
}

/// Andrew's monotone chain convex hull (CCW, collinear points dropped).
///
/// Returns `None` for fewer than 3 distinct points or a fully collinear cloud.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    let pts = dedup_exact(points);
    if pts.len() < 3 {
        return None;
    }
    let turn = |o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>| cross(a - o, b - o);
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    (hull.len() >= 3).then_some(hull)
}
