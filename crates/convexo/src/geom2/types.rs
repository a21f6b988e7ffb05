//! Basic 2D types and the tolerance used by the tolerant predicates.
//!
//! - `GeomCfg`: carries the tolerance by value into every call that needs it.
//! - `Seg2`: finite segment; the on-demand form of a polygon edge.
//! - `Poly2`: owned vertex loop with an opaque style token.
//! - `Aff2`: 2D affine map backing the pure transforms.
//!
//! Code cross-refs: `segment::segment_intersection`, `intersect::intersect_convex`

use nalgebra::{Matrix2, Rotation2, Vector2};

use super::error::InputError;

/// Default tolerance for near-parallel and near-boundary decisions.
pub const DEFAULT_TOL: f64 = 1e-9;

/// Geometry configuration (tolerance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub tol: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { tol: DEFAULT_TOL }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_tol(tol: f64) -> Self {
        Self { tol }
    }
}

/// Finite segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Seg2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    /// Implicit line `A x + B y = C` through both endpoints.
    #[inline]
    pub fn line_coeffs(&self) -> (f64, f64, f64) {
        let a = self.b.y - self.a.y;
        let b = self.a.x - self.b.x;
        let c = a * self.a.x + b * self.a.y;
        (a, b, c)
    }

    /// Bounding box of the segment grown by `eps` on both axes.
    #[inline]
    pub fn bbox_contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.a.x.min(self.b.x) - eps <= p.x
            && p.x <= self.a.x.max(self.b.x) + eps
            && self.a.y.min(self.b.y) - eps <= p.y
            && p.y <= self.a.y.max(self.b.y) + eps
    }
}

/// Edges of a closed loop: vertex `i` connects to vertex `(i + 1) % n`.
pub fn edges_of(vs: &[Vector2<f64>]) -> impl Iterator<Item = Seg2> + '_ {
    let n = vs.len();
    (0..n).map(move |i| Seg2::new(vs[i], vs[(i + 1) % n]))
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aff2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Aff2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }
    /// Counter-clockwise rotation by `theta` radians about the origin.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        Self {
            m: *Rotation2::new(theta).matrix(),
            t: Vector2::zeros(),
        }
    }
    /// Conjugate `self` by a translation so that it acts about `center`.
    #[inline]
    pub fn about(&self, center: Vector2<f64>) -> Self {
        Aff2::translation(center)
            .compose(self)
            .compose(&Aff2::translation(-center))
    }
    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
}

/// Closed polygon as an ordered vertex loop.
///
/// Invariants:
/// - Vertex `i` connects to vertex `(i + 1) % n`; edges are derived, never stored.
/// - Fewer than 3 vertices is degenerate (not convex, no intersection).
/// - `style` is carried for the caller and never read by geometry code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poly2<S = ()> {
    pub vs: Vec<Vector2<f64>>,
    pub style: S,
}

impl Poly2 {
    #[inline]
    pub fn new(vs: Vec<Vector2<f64>>) -> Self {
        Self { vs, style: () }
    }

    /// Build from raw `[x, y]` pairs; rejects NaN and infinite coordinates.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self, InputError> {
        let mut vs = Vec::with_capacity(coords.len());
        for (index, &[x, y]) in coords.iter().enumerate() {
            if !(x.is_finite() && y.is_finite()) {
                return Err(InputError::NonFinite { index });
            }
            vs.push(Vector2::new(x, y));
        }
        Ok(Self::new(vs))
    }
}

impl<S> Poly2<S> {
    #[inline]
    pub fn with_style(vs: Vec<Vector2<f64>>, style: S) -> Self {
        Self { vs, style }
    }

    /// Same vertices, different style token.
    #[inline]
    pub fn restyle<T>(self, style: T) -> Poly2<T> {
        Poly2 { vs: self.vs, style }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vs
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vs.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vs.is_empty()
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vs.len() < 3
    }

    /// The `i`-th edge (wrapping last → first); `None` when `i` is out of range.
    #[inline]
    pub fn edge(&self, i: usize) -> Option<Seg2> {
        let n = self.vs.len();
        (i < n).then(|| Seg2::new(self.vs[i], self.vs[(i + 1) % n]))
    }
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = Seg2> + '_ {
        edges_of(&self.vs)
    }

    /// Arithmetic mean of the vertices.
    #[inline]
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        super::util::centroid_of(&self.vs)
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        if self.vs.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self
            .edges()
            .map(|e| super::util::cross(e.a, e.b))
            .sum();
        0.5 * twice
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl<S: Clone> Poly2<S> {
    /// Image under an affine map; the input is left untouched.
    pub fn mapped(&self, f: &Aff2) -> Poly2<S> {
        Poly2 {
            vs: self.vs.iter().map(|&p| f.apply(p)).collect(),
            style: self.style.clone(),
        }
    }
    #[inline]
    pub fn translated(&self, d: Vector2<f64>) -> Poly2<S> {
        self.mapped(&Aff2::translation(d))
    }
    #[inline]
    pub fn scaled(&self, sx: f64, sy: f64) -> Poly2<S> {
        self.mapped(&Aff2::scaling(sx, sy))
    }
    #[inline]
    pub fn rotated(&self, theta: f64) -> Poly2<S> {
        self.mapped(&Aff2::rotation(theta))
    }
    /// Scale about the vertex centroid (identity copy for an empty loop).
    pub fn scaled_about_centroid(&self, sx: f64, sy: f64) -> Poly2<S> {
        match self.centroid() {
            Some(c) => self.mapped(&Aff2::scaling(sx, sy).about(c)),
            None => self.clone(),
        }
    }
    /// Rotate about the vertex centroid (identity copy for an empty loop).
    pub fn rotated_about_centroid(&self, theta: f64) -> Poly2<S> {
        match self.centroid() {
            Some(c) => self.mapped(&Aff2::rotation(theta).about(c)),
            None => self.clone(),
        }
    }
}
