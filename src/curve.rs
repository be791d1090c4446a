//! Chordal Catmull-Rom spline through four control points.
//!
//! The band ribbon is rebuilt from this curve every frame: control point 0
//! is the card, 3 is the anchor, and 1/2 are the smoothed middle links.
//! Chordal parameterization spaces the knots by actual chord length, which
//! keeps sample spacing honest when the chain is stretched unevenly.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Number of control points in a band curve.
pub const CONTROL_POINTS: usize = 4;

const SEGMENTS: usize = CONTROL_POINTS - 1;

/// A Catmull-Rom spline with chordal knot spacing over exactly four
/// ordered control points.
///
/// Nothing is cached between evaluations; callers overwrite the control
/// points and resample every frame.
#[derive(Clone, Debug)]
pub struct CatmullRom<F: Float> {
    points: [Vec3<F>; CONTROL_POINTS],
}

impl<F: Float> CatmullRom<F> {
    pub fn new(points: [Vec3<F>; CONTROL_POINTS]) -> Self {
        CatmullRom { points }
    }

    /// Replace all four control points.
    pub fn set_points(&mut self, points: [Vec3<F>; CONTROL_POINTS]) {
        self.points = points;
    }

    pub fn points(&self) -> &[Vec3<F>; CONTROL_POINTS] {
        &self.points
    }

    /// Evaluate the curve at `u` in [0, 1] across all three segments.
    ///
    /// Coincident adjacent control points would make the chordal knot
    /// interval zero; such segments degrade to linear interpolation
    /// instead of dividing by zero.
    pub fn point(&self, u: F) -> Vec3<F> {
        let u = u.clamp(F::zero(), F::one());
        let scaled = u * F::from_f32(SEGMENTS as f32);

        // Map u to a segment index and a local parameter in [0, 1].
        let mut seg = 0;
        let mut local = scaled;
        while seg < SEGMENTS - 1 && local > F::one() {
            local = local - F::one();
            seg += 1;
        }
        let local = local.clamp(F::zero(), F::one());

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        // Phantom neighbors: endpoints are duplicated.
        let p0 = if seg == 0 { p1 } else { self.points[seg - 1] };
        let p3 = if seg + 2 >= CONTROL_POINTS { p2 } else { self.points[seg + 2] };

        eval_segment(p0, p1, p2, p3, local)
    }

    /// Lazy sequence of `count` evenly-parameterized samples, including
    /// both endpoints. Restartable: each call walks the curve afresh.
    pub fn sample(&self, count: usize) -> impl Iterator<Item = Vec3<F>> + '_ {
        let denom = F::from_f32(count.saturating_sub(1).max(1) as f32);
        (0..count).map(move |i| self.point(F::from_f32(i as f32) / denom))
    }

    /// Resample the curve into `out`, replacing its contents.
    pub fn sample_into(&self, count: usize, out: &mut AllocVec<Vec3<F>>) {
        out.clear();
        out.extend(self.sample(count));
    }
}

impl<F: Float> Default for CatmullRom<F> {
    fn default() -> Self {
        CatmullRom::new([Vec3::zero(); CONTROL_POINTS])
    }
}

/// One chordal Catmull-Rom segment between `p1` and `p2` with neighbors
/// `p0` and `p3`, evaluated at local parameter `t` in [0, 1].
fn eval_segment<F: Float>(p0: Vec3<F>, p1: Vec3<F>, p2: Vec3<F>, p3: Vec3<F>, t: F) -> Vec3<F> {
    let eps = F::from_f32(1e-6);

    let dt1 = p1.distance(p2);
    if dt1.is_near_zero(eps) {
        // Degenerate chord: the segment collapses to a point; lerp keeps
        // the output finite without special-casing callers.
        return p1.lerp(p2, t);
    }
    let mut dt0 = p0.distance(p1);
    let mut dt2 = p2.distance(p3);
    if dt0.is_near_zero(eps) {
        dt0 = dt1;
    }
    if dt2.is_near_zero(eps) {
        dt2 = dt1;
    }

    // Non-uniform Catmull-Rom tangents, rescaled to the [0, 1] local
    // parameter of this segment.
    let m1 = ((p1 - p0).scale(F::one() / dt0) - (p2 - p0).scale(F::one() / (dt0 + dt1))
        + (p2 - p1).scale(F::one() / dt1))
    .scale(dt1);
    let m2 = ((p2 - p1).scale(F::one() / dt1) - (p3 - p1).scale(F::one() / (dt1 + dt2))
        + (p3 - p2).scale(F::one() / dt2))
    .scale(dt1);

    let t2 = t * t;
    let t3 = t2 * t;
    let one = F::one();
    let two = F::two();
    let three = two + one;

    let h00 = two * t3 - three * t2 + one;
    let h10 = t3 - two * t2 + t;
    let h01 = -two * t3 + three * t2;
    let h11 = t3 - t2;

    p1.scale(h00) + m1.scale(h10) + p2.scale(h01) + m2.scale(h11)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_points() -> [Vec3<f32>; 4] {
        [
            Vec3::new(2.0, -1.0, 0.3),
            Vec3::new(1.5, 0.2, 0.0),
            Vec3::new(0.5, 0.1, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        ]
    }

    #[test]
    fn passes_through_endpoints() {
        let curve = CatmullRom::new(band_points());
        let start = curve.point(0.0);
        let end = curve.point(1.0);
        assert!(start.distance(band_points()[0]) < 1e-5);
        assert!(end.distance(band_points()[3]) < 1e-5);
    }

    #[test]
    fn sample_count_and_endpoints() {
        let curve = CatmullRom::new(band_points());
        let pts: alloc::vec::Vec<_> = curve.sample(32).collect();
        assert_eq!(pts.len(), 32);
        assert!(pts[0].distance(band_points()[0]) < 1e-5);
        assert!(pts[31].distance(band_points()[3]) < 1e-5);
    }

    #[test]
    fn coincident_middle_points_stay_finite() {
        let p = Vec3::new(1.0f32, 1.0, 1.0);
        let curve = CatmullRom::new([Vec3::new(0.0, 0.0, 0.0), p, p, Vec3::new(2.0, 0.0, 0.0)]);
        for v in curve.sample(32) {
            assert!(v.is_finite(), "sample not finite: {:?}", v);
        }
    }

    #[test]
    fn all_points_coincident_stay_finite() {
        let p = Vec3::new(3.0f32, -2.0, 1.0);
        let curve = CatmullRom::new([p; 4]);
        for v in curve.sample(16) {
            assert!(v.is_finite());
            assert!(v.distance(p) < 1e-5);
        }
    }
}
