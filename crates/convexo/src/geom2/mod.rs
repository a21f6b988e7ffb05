//! 2D polygon geometry over owned vertex loops.
//!
//! Purpose
//! - Decide convexity, test point containment (even-odd rule), intersect finite
//!   segments, and intersect two convex polygons into a new convex polygon.
//! - Keep every operation pure: inputs are borrowed, results are fresh values.
//!
//! Conventions
//! - Points and vectors are `Vector2<f64>`; y grows upward, so ascending `atan2`
//!   order is counter-clockwise.
//! - A loop with fewer than 3 vertices is degenerate: not convex, never part of
//!   an intersection.
//! - Tolerances are explicit arguments (`GeomCfg::tol`, default `1e-9`).
//!
//! Code cross-refs: `Poly2`, `Seg2`, `Aff2`, `GeomCfg`, `intersect_convex`

mod contains;
mod convexity;
mod error;
mod intersect;
pub mod rand;
mod segment;
pub mod shapes;
mod types;
mod util;

pub use contains::point_in_polygon;
pub use convexity::is_convex;
pub use error::InputError;
pub use intersect::{candidate_points, intersect_convex};
pub use segment::segment_intersection;
pub use types::{edges_of, Aff2, GeomCfg, Poly2, Seg2, DEFAULT_TOL};
pub use util::{centroid_of, convex_hull, cross, dedup_exact, order_ccw, orientation, Orientation};
