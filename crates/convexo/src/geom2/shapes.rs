//! Deterministic shape generators: regular polygons, stars, sampled lines.
//!
//! All shapes are centred on the origin; move them with `Poly2::translated`.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;

use super::types::Poly2;

#[inline]
fn polar(r: f64, theta: f64) -> Vector2<f64> {
    Vector2::new(r * theta.cos(), r * theta.sin())
}

/// Regular `n`-gon inscribed in a circle of `radius`; vertex `k` sits at angle
/// `2πk/n`, so the loop is counter-clockwise. `n == 0` gives an empty polygon.
pub fn regular_polygon(n: usize, radius: f64) -> Poly2 {
    let vs = (0..n)
        .map(|k| polar(radius, TAU * k as f64 / n as f64))
        .collect();
    Poly2::new(vs)
}

/// Star with `n_points` tips, alternating outer and inner vertices.
///
/// The first tip points straight up (angle π/2); each inner vertex lies halfway
/// between its neighbouring tips, at angle offset `π / n_points`.
pub fn star(r_outer: f64, r_inner: f64, n_points: usize) -> Poly2 {
    let half_step = std::f64::consts::PI / n_points as f64;
    let mut vs = Vec::with_capacity(2 * n_points);
    for k in 0..n_points {
        let theta = TAU * k as f64 / n_points as f64 + FRAC_PI_2;
        vs.push(polar(r_outer, theta));
        vs.push(polar(r_inner, theta + half_step));
    }
    Poly2::new(vs)
}

/// `n` evenly spaced points from `start` to `end`, both ends included.
///
/// `n == 1` yields just `start`; `n == 0` yields nothing.
pub fn line_points(start: Vector2<f64>, end: Vector2<f64>, n: usize) -> Vec<Vector2<f64>> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n)
            .map(|k| {
                let t = k as f64 / (n - 1) as f64;
                start * (1.0 - t) + end * t
            })
            .collect(),
    }
}
