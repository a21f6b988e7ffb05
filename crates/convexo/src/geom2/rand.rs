//! Random convex polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Feed property tests and benchmarks with reproducible convex inputs.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, then shift to `center`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Poly2`, `util::convex_hull`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::InputError;
use super::types::Poly2;
use super::util::convex_hull;

/// How many vertices a draw starts from, before the hull drops any.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range; both ends are raised to at least 3.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn pick<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

/// Shape of a radial draw: vertices sit near a circle of `base_radius`
/// around `center`.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angle wobble per vertex, as a share of the even spacing `2π/n`.
    /// Values above 0.49 are clamped so neighbours cannot swap.
    pub angle_jitter_frac: f64,
    /// Relative radius wobble: each vertex lands at
    /// `base_radius * (1 ± radial_jitter)`. Clamped to `[0, 0.99]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Rotate the whole draw by a random angle instead of starting at 0.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// `(seed, index)` pair naming one draw; the same token always yields the
/// same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        // splitmix64 finaliser
        fn scramble(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }
        let idx = scramble(self.index.wrapping_add(0x9e37_79b9_7f4a_7c15));
        StdRng::seed_from_u64(scramble(self.seed ^ idx))
    }
}

/// Draw a random convex polygon (counter-clockwise, collinear vertices removed).
///
/// The hull may have fewer vertices than requested when jitter pushes a point
/// inside its neighbours' chord.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<Poly2, InputError> {
    if !(cfg.base_radius.is_finite() && cfg.base_radius > 0.0) {
        return Err(InputError::invalid(format!(
            "base_radius must be finite and positive, got {}",
            cfg.base_radius
        )));
    }
    if !(cfg.center.x.is_finite() && cfg.center.y.is_finite()) {
        return Err(InputError::invalid("center must be finite"));
    }
    let mut rng = tok.rng();
    let n = cfg.vertex_count.pick(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let wobble = rng.gen_range(-1.0f64..=1.0) * aj * delta;
            let th = phase + (k as f64) * delta + wobble;
            let r = (1.0 + rng.gen_range(-1.0f64..=1.0) * rj) * cfg.base_radius;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let hull = convex_hull(&pts)
        .ok_or_else(|| InputError::degenerate(format!("hull of {n} points collapsed")))?;
    Ok(Poly2::new(hull))
}
