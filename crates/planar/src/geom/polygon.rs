//! Simple polygons: closed loops of segments over an ordered vertex list.
//!
//! Purpose
//! - Turn a point set into a closed, non-crossing boundary (angular sort about
//!   the centroid, valid for star-shaped configurations) and answer
//!   containment, intersection, and distance queries over that boundary.
//!
//! Why this design
//! - Segments are derived once at construction and never recomputed, so the
//!   loop invariant `segments[i] = (points[i], points[(i+1) % n])` holds for
//!   the lifetime of the polygon and queries stay read-only.
//! - Every query reduces to the single eps-gated intersection primitive or to
//!   finite-segment distance; there is no second numerical policy to keep in
//!   sync.

use nalgebra::Vector2;
use thiserror::Error;

use super::kernel;
use super::segment::Segment;
use super::types::GeomCfg;

/// Construction failure for geometric shapes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    /// Fewer points than a non-degenerate shape requires.
    #[error("insufficient points: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },
}

/// Simple (non-self-intersecting) polygon.
///
/// Invariants:
/// - `segments.len() == points.len()`.
/// - `segments[i]` joins `points[i]` to `points[(i+1) % n]`: one closed loop
///   visiting the points in stored order.
/// - With [`Polygon::from_scattered`], points are additionally ordered by
///   angle about the centroid (ascending, stable), which yields a simple
///   boundary for star-shaped point sets. Not guaranteed for arbitrary sets.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Vector2<f64>>,
    segments: Vec<Segment>,
}

impl Polygon {
    /// Build a polygon from points already in boundary order.
    ///
    /// Degeneracy policy: fewer than 3 points is rejected. A 2-point "loop"
    /// would be two coincident segments with zero interior.
    pub fn new(points: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        if points.len() < 3 {
            return Err(GeomError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }
        let segments = close_loop(&points);
        Ok(Self { points, segments })
    }

    /// Build a polygon from a scattered point set by sorting the points by
    /// angle about their centroid (ascending) before closing the loop.
    ///
    /// The sort key is computed into a separate keyed array; the points
    /// themselves are never annotated or mutated. The sort is stable, so
    /// points at equal angles keep their input order.
    pub fn from_scattered(points: Vec<Vector2<f64>>) -> Result<Self, GeomError> {
        if points.len() < 3 {
            return Err(GeomError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }
        let c = mean_point(&points);
        let mut keyed: Vec<(f64, Vector2<f64>)> = points
            .into_iter()
            .map(|p| (kernel::angle(p - c), p))
            .collect();
        // Vec::sort_by is stable; no secondary key is defined.
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let points: Vec<Vector2<f64>> = keyed.into_iter().map(|(_, p)| p).collect();
        let segments = close_loop(&points);
        Ok(Self { points, segments })
    }

    /// Vertices in boundary order (read-only; for renderers and hosts).
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    /// Boundary segments in loop order (read-only; for renderers and hosts).
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of vertices (equals the number of segments).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vector2<f64> {
        mean_point(&self.points)
    }

    /// Axis-aligned bounding box `(min, max)` of the vertices.
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Shortest distance from `p` to the polygon boundary.
    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        self.segments
            .iter()
            .map(|s| s.distance_to_point(p))
            .fold(f64::INFINITY, f64::min)
    }

    /// Directional distance to another polygon: the minimum, over this
    /// polygon's vertices, of the distance to `other`'s boundary.
    ///
    /// This is a cheap vertex-sampling metric and is asymmetric by design:
    /// `a.distance_to_poly(&b)` need not equal `b.distance_to_poly(&a)`, and
    /// edge-to-edge proximity between vertices is not seen. Callers that need
    /// a symmetric bound can take the min of both directions.
    pub fn distance_to_poly(&self, other: &Polygon) -> f64 {
        self.points
            .iter()
            .map(|&p| other.distance_to_point(p))
            .fold(f64::INFINITY, f64::min)
    }

    /// True iff any boundary segment of `self` intersects any boundary
    /// segment of `other`. O(n·m), short-circuits on the first hit.
    pub fn intersects(&self, other: &Polygon) -> bool {
        self.segments
            .iter()
            .any(|s1| other.segments.iter().any(|s2| s1.intersects(s2)))
    }

    /// Every intersecting `(self segment, other segment)` pair. Same pairwise
    /// scan as [`Polygon::intersects`] but exhaustive; empty when the
    /// boundaries are disjoint.
    pub fn intersecting_segments(&self, other: &Polygon) -> Vec<(Segment, Segment)> {
        let mut out = Vec::new();
        for s1 in &self.segments {
            for s2 in &other.segments {
                if s1.intersects(s2) {
                    out.push((*s1, *s2));
                }
            }
        }
        out
    }

    /// True iff the midpoint of `seg` lies inside this polygon.
    pub fn contains_segment(&self, seg: &Segment) -> bool {
        self.contains_point(seg.midpoint())
    }

    /// Ray-casting parity test with a ray origin derived from this polygon's
    /// bounding box minus [`GeomCfg::ray_margin`], which is outside the
    /// polygon by construction.
    ///
    /// Known limitation: rays grazing a vertex or running collinear with an
    /// edge are governed by the kernel's parallel tolerance and may report
    /// either parity; boundary points are not specially handled.
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        let (min, _) = self.bounds();
        let margin = GeomCfg::default().ray_margin;
        // Offsets differ per axis: an equal-offset origin puts the ray on the
        // diagonal of axis-aligned data, where it grazes vertices exactly.
        self.contains_point_from(Vector2::new(min.x - margin, min.y - 2.0 * margin), p)
    }

    /// Ray-casting parity test with an explicit known-outside ray origin, for
    /// hosts that manage a global coordinate space. The caller must ensure
    /// `outside` lies outside this polygon; parity is meaningless otherwise.
    pub fn contains_point_from(&self, outside: Vector2<f64>, p: Vector2<f64>) -> bool {
        let crossings = self
            .segments
            .iter()
            .filter(|s| kernel::segment_intersection(outside, p, s.p1, s.p2).is_some())
            .count();
        crossings % 2 == 1
    }
}

/// Closed segment loop over `points` in stored order.
fn close_loop(points: &[Vector2<f64>]) -> Vec<Segment> {
    let n = points.len();
    (0..n)
        .map(|i| Segment::new(points[i], points[(i + 1) % n]))
        .collect()
}

/// Arithmetic mean of a point set (the angular-sort centroid).
fn mean_point(points: &[Vector2<f64>]) -> Vector2<f64> {
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + *p);
    sum / points.len() as f64
}
