//! Convex polygon geometry in 2D.
//!
//! - `geom2`: convexity check, even-odd containment, tolerant segment
//!   intersection, and convex/convex polygon intersection, plus the shape
//!   generators and random convex polygons used by tests and benches.
//! - `api`: curated re-exports for callers (rendering layers, the CLI).
//!
//! Everything here is a pure function of its inputs: no I/O, no global state,
//! no mutation of input polygons.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Aff2, GeomCfg, Poly2, Seg2};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::shapes::{line_points, regular_polygon, star};
    pub use crate::geom2::{
        intersect_convex, is_convex, point_in_polygon, segment_intersection, Aff2, GeomCfg,
        InputError, Poly2, Seg2, DEFAULT_TOL,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
