//! Finite line segments.

use nalgebra::Vector2;

use super::kernel::{self, Intersection};

/// Finite segment between two points.
///
/// Storage is directed (`p1` → `p2`) but intersection and distance treat the
/// segment as an undirected geometric object. Segments own no polygon; a
/// `Polygon` derives its segments at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        kernel::distance(self.p1, self.p2)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        kernel::midpoint(self.p1, self.p2)
    }

    /// Shortest distance from `p` to the finite segment (not the infinite
    /// line): the projection parameter is clamped to `[0, 1]` before
    /// measuring. A zero-length segment degrades to endpoint distance.
    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        let dir = self.p2 - self.p1;
        let len_sq = dir.dot(&dir);
        if len_sq <= 0.0 {
            return kernel::distance(p, self.p1);
        }
        let t = ((p - self.p1).dot(&dir) / len_sq).clamp(0.0, 1.0);
        kernel::distance(p, kernel::lerp2(self.p1, self.p2, t))
    }

    /// Intersection with another segment (default parallel tolerance).
    #[inline]
    pub fn intersection(&self, other: &Segment) -> Option<Intersection> {
        kernel::segment_intersection(self.p1, self.p2, other.p1, other.p2)
    }

    /// Intersection with another segment under an explicit tolerance.
    #[inline]
    pub fn intersection_eps(&self, other: &Segment, eps: f64) -> Option<Intersection> {
        kernel::segment_intersection_eps(self.p1, self.p2, other.p1, other.p2, eps)
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn distance_clamps_to_the_finite_segment() {
        let s = Segment::new(vector![0.0, 0.0], vector![10.0, 0.0]);
        // Interior projection.
        assert!((s.distance_to_point(vector![5.0, 3.0]) - 3.0).abs() < 1e-12);
        // Past p2: distance to the endpoint, not the infinite line (which
        // would give 4.0 here).
        assert!((s.distance_to_point(vector![13.0, 4.0]) - 5.0).abs() < 1e-12);
        // Past p1, symmetric case.
        assert!((s.distance_to_point(vector![-3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_segment_measures_endpoint_distance() {
        let s = Segment::new(vector![1.0, 1.0], vector![1.0, 1.0]);
        assert!((s.distance_to_point(vector![4.0, 5.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_intersection_delegates_to_kernel() {
        let a = Segment::new(vector![0.0, 0.0], vector![10.0, 10.0]);
        let c = Segment::new(vector![0.0, 10.0], vector![10.0, 0.0]);
        let hit = a.intersection(&c).expect("diagonals cross");
        assert!((hit.point - vector![5.0, 5.0]).norm() < 1e-12);
        assert!(a.intersects(&c) && c.intersects(&a));
    }
}
