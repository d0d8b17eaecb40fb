//! Point set transforms: simplification, deduplication, normalization,
//! and radius cutting.
//!
//! The filtering transforms build a wholesale replacement set and keep
//! the relative order of surviving points; `normalize` is the only
//! in-place operation. `simplify` and `dedupe` always compare each
//! point against the original, unmodified input set, never against the
//! partially built output, so results do not depend on scan order.

use super::geometry::distance_between;
use super::points::PointSet;

/// Drops every point that lies too close to another point.
///
/// A point survives iff its distance to every *other* point in the
/// input is at least `min_distance` (the drop test is strict `<`).
/// Two mutually close points both fail the test and both are dropped;
/// nothing is merged. With a `min_distance` of 0.0 nothing is ever
/// dropped, including exact duplicates, since their distance of 0.0 is
/// not strictly below the threshold.
///
/// Runs a full pairwise scan, O(n^2) in the point count.
pub fn simplify(points: &PointSet, min_distance: f32) -> PointSet {
    let mut kept = PointSet::with_capacity(points.len());

    for i in 0..points.len() {
        let has_near_neighbor = (0..points.len()).any(|j| {
            j != i
                && distance_between(
                    points.radii[i],
                    points.angles[i],
                    points.radii[j],
                    points.angles[j],
                ) < min_distance
        });

        if !has_near_neighbor {
            kept.push(points.radii[i], points.angles[i]);
        }
    }

    kept
}

/// Drops every point that exactly duplicates another point.
///
/// Equality is exact numeric equality of both radius and angle, no
/// epsilon. Every member of a duplicate group is dropped: if three
/// points share one `(radius, angle)`, none of the three survives.
pub fn dedupe(points: &PointSet) -> PointSet {
    let mut kept = PointSet::with_capacity(points.len());

    for i in 0..points.len() {
        let has_twin = (0..points.len()).any(|j| {
            j != i && points.radii[j] == points.radii[i] && points.angles[j] == points.angles[i]
        });

        if !has_twin {
            kept.push(points.radii[i], points.angles[i]);
        }
    }

    kept
}

/// Rounds every radius to two decimal places and wraps every angle into
/// `[0, 360)` degrees, in place.
///
/// Radius rounding is half away from zero. Angle wrapping is a single
/// `% 360` followed by one `+ 360` shift for negative remainders, so an
/// angle of -30 becomes 330 and 725 becomes 5.
pub fn normalize(points: &mut PointSet) {
    for radius in points.radii.iter_mut() {
        *radius = (*radius * 100.0).round() / 100.0;
    }

    for angle in points.angles.iter_mut() {
        let mut wrapped = *angle % 360.0;
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        *angle = wrapped;
    }
}

/// Keeps only points that fit the target surface: radius at most
/// `max_radius` and not exactly zero.
///
/// The upper bound is inclusive. Zero-radius points are degenerate
/// (every angle maps to the origin) and are always dropped.
pub fn cut_to_size(points: &PointSet, max_radius: f32) -> PointSet {
    let mut kept = PointSet::with_capacity(points.len());

    for (radius, angle) in points.pairs() {
        if radius <= max_radius && radius != 0.0 {
            kept.push(radius, angle);
        }
    }

    kept
}
