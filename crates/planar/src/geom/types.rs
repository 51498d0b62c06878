//! Tolerance configuration shared by the geometry predicates.

/// Geometry configuration (tolerances).
///
/// Centralizes the two knobs the kernel and polygon queries depend on, so
/// callers that need different numerics pass one value instead of threading
/// raw floats everywhere.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Threshold on the intersection denominator below which two segments are
    /// treated as parallel (no intersection). Deliberately coarse: rejecting
    /// near-parallel pairs avoids catastrophic cancellation from near-zero
    /// division.
    pub eps_parallel: f64,
    /// Margin added beyond a polygon's bounding box when deriving a
    /// known-outside ray origin for containment tests.
    pub ray_margin: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-3,
            ray_margin: 1.0,
        }
    }
}
