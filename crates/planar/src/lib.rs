//! Minimal 2D computational-geometry kernel.
//!
//! Scope
//! - Points (`Vec2`), finite segments, and simple polygons, with the queries a
//!   simulation/editor host needs: segment-segment intersection, point-in-polygon
//!   containment, polygon-polygon intersection, and shape distances.
//! - Rendering, color selection, and randomized sampling are external
//!   collaborators: they consume `points()`/`segments()` but contribute nothing
//!   to the kernel and are not depended on here.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes are
//!   fine when they improve quality.

pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export: points are plain 2-vectors.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::kernel::{
        self, angle, cross, distance, lerp, magnitude, midpoint, normalize,
        segment_intersection, Intersection,
    };
    pub use crate::geom::{GeomCfg, GeomError, Polygon, Segment};
    pub use nalgebra::Vector2 as Vec2;
}
