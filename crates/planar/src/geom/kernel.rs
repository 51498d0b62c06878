//! Pure geometry primitives over `Vec2`.
//!
//! Purpose
//! - Free functions for 2-vector algebra plus the one non-trivial primitive:
//!   the parametric segment-segment intersection test. Everything here is
//!   pure, deterministic, and allocation-free.
//!
//! Conventions
//! - Distances use the `hypot` formulation (robust against overflow/underflow
//!   of the naive `sqrt(dx²+dy²)`).
//! - Intersection predicates are eps-gated: `|denominator| <= eps` is treated
//!   as "parallel, no intersection". Default eps comes from
//!   `GeomCfg::default().eps_parallel`.
//!
//! Code cross-refs: `Intersection`, `super::types::GeomCfg`

use nalgebra::Vector2;

use super::types::GeomCfg;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Arithmetic mean of two points (midpoint of the segment joining them).
#[inline]
pub fn midpoint(p: Vector2<f64>, q: Vector2<f64>) -> Vector2<f64> {
    Vector2::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Dot product, treating points as 2-vectors.
#[inline]
pub fn dot(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.dot(&q)
}

/// Component-wise sum.
#[inline]
pub fn add(p: Vector2<f64>, q: Vector2<f64>) -> Vector2<f64> {
    p + q
}

/// Component-wise difference.
#[inline]
pub fn subtract(p: Vector2<f64>, q: Vector2<f64>) -> Vector2<f64> {
    p - q
}

/// Scalar multiple.
#[inline]
pub fn scale(p: Vector2<f64>, k: f64) -> Vector2<f64> {
    p * k
}

/// Distance to the origin (`hypot` formulation).
#[inline]
pub fn magnitude(p: Vector2<f64>) -> f64 {
    p.x.hypot(p.y)
}

/// Unit vector in the direction of `p`, or `None` for the zero vector (and
/// non-finite inputs). Returning `None` instead of propagating NaN makes the
/// zero-vector contract explicit at the call site.
#[inline]
pub fn normalize(p: Vector2<f64>) -> Option<Vector2<f64>> {
    let m = magnitude(p);
    if !m.is_finite() || m <= 0.0 {
        return None;
    }
    Some(p / m)
}

/// 2D cross product: signed area of the parallelogram spanned by `p` and `q`.
/// Positive for p→q counterclockwise, zero iff the vectors are parallel.
#[inline]
pub fn cross(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.x * q.y - p.y * q.x
}

/// Polar angle of `p`, i.e. `atan2(y, x)` in `(-π, π]`.
#[inline]
pub fn angle(p: Vector2<f64>) -> f64 {
    p.y.atan2(p.x)
}

/// Linear interpolation between scalars.
///
/// Uses the `(1-t)*a + t*b` form rather than `a + (b-a)*t`: the latter drifts
/// for `t` near 1 and need not reproduce `b` exactly at `t = 1`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Component-wise `lerp` between points.
#[inline]
pub fn lerp2(p: Vector2<f64>, q: Vector2<f64>, t: f64) -> Vector2<f64> {
    Vector2::new(lerp(p.x, q.x, t), lerp(p.y, q.y, t))
}

/// Successful segment-segment intersection.
///
/// `t` is the parametric offset along the first segment (0 at `a`, 1 at `b`);
/// `denom` is the 2×2 system denominator. Both are kept for caller
/// diagnostics (e.g. picking the nearest of several hits by `t`).
#[derive(Clone, Copy, Debug)]
pub struct Intersection {
    pub point: Vector2<f64>,
    pub t: f64,
    pub denom: f64,
}

/// Intersection of segments `ab` and `cd` with the default parallel tolerance.
#[inline]
pub fn segment_intersection(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> Option<Intersection> {
    segment_intersection_eps(a, b, c, d, GeomCfg::default().eps_parallel)
}

/// Intersection of segments `ab` and `cd`, endpoint-inclusive.
///
/// Solves `a + t(b-a) = c + u(d-c)` for the parametric offsets `t` (along
/// `ab`) and `u` (along `cd`). The denominator is `cross(b-a, d-c)`; pairs
/// with `|denom| <= eps` are reported as non-intersecting, which treats
/// near-parallel segments as disjoint rather than dividing by a near-zero
/// value. The hit point is evaluated by `lerp2` along `ab` at `t`, which is
/// more precise than back-substituting into the raw algebra.
pub fn segment_intersection_eps(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    eps: f64,
) -> Option<Intersection> {
    let t_top = cross(d - c, a - c);
    let u_top = cross(a - b, c - a);
    let denom = cross(b - a, d - c);

    if denom.abs() <= eps {
        return None;
    }
    let t = t_top / denom;
    let u = u_top / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Intersection {
            point: lerp2(a, b, t),
            t,
            denom,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn crossing_diagonals_meet_in_the_middle() {
        // A=(0,0)→(10,10) and C=(0,10)→(10,0) cross at (5,5) with t=u=0.5.
        let hit = segment_intersection(
            vector![0.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
            vector![10.0, 0.0],
        )
        .expect("diagonals cross");
        assert!((hit.point - vector![5.0, 5.0]).norm() < 1e-12);
        assert!((hit.t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let hit = segment_intersection(
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![0.0, 1.0],
            vector![10.0, 1.0],
        );
        assert!(hit.is_none());
        // Near-parallel within eps is also rejected.
        let near = segment_intersection(
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![0.0, 1.0],
            vector![10.0, 1.0 + 1e-5],
        );
        assert!(near.is_none());
    }

    #[test]
    fn shared_endpoint_counts_as_intersection() {
        // Endpoint-inclusive: t or u landing exactly on 0/1 is a hit.
        let hit = segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
        )
        .expect("shared endpoint");
        assert!((hit.t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_collinear_extensions_miss() {
        // Lines cross but outside both parameter ranges.
        let hit = segment_intersection(
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![3.0, 0.0],
            vector![4.0, -1.0],
        );
        assert!(hit.is_none());
    }

    #[test]
    fn cross_is_antisymmetric_and_zero_for_parallel() {
        assert_eq!(cross(vector![1.0, 0.0], vector![0.0, 1.0]), 1.0);
        assert_eq!(cross(vector![0.0, 1.0], vector![1.0, 0.0]), -1.0);
        // Parallel vectors span no area; this is what gates the intersection
        // denominator.
        assert_eq!(cross(vector![2.0, 3.0], vector![4.0, 6.0]), 0.0);
    }

    #[test]
    fn lerp_is_exact_at_both_ends() {
        assert_eq!(lerp(2.0, 7.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 7.0, 1.0), 7.0);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-15);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(normalize(vector![0.0, 0.0]).is_none());
        let n = normalize(vector![3.0, 4.0]).unwrap();
        assert!((magnitude(n) - 1.0).abs() < 1e-12);
        assert!((n - vector![0.6, 0.8]).norm() < 1e-12);
    }

    #[test]
    fn stable_distance_survives_extreme_scales() {
        // Naive sqrt(dx²+dy²) overflows here; hypot must not.
        let d = distance(vector![1e200, 0.0], vector![0.0, 1e200]);
        assert!(d.is_finite());
        assert!((d - 1e200 * std::f64::consts::SQRT_2).abs() / d < 1e-12);
    }
}
