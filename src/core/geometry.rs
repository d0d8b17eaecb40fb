//! Polar geometry helpers.

/// Computes the straight-line distance between two polar points.
///
/// Angles are in degrees. Both points are projected to Cartesian
/// coordinates (`x = r * cos(a)`, `y = r * sin(a)`) and the Euclidean
/// distance between the projections is returned. NaN in any input
/// propagates to a NaN result.
pub fn distance_between(radius_1: f32, angle_1: f32, radius_2: f32, angle_2: f32) -> f32 {
    let (x1, y1) = to_cartesian(radius_1, angle_1);
    let (x2, y2) = to_cartesian(radius_2, angle_2);
    (x2 - x1).hypot(y2 - y1)
}

/// Projects a polar point (angle in degrees) to Cartesian coordinates.
fn to_cartesian(radius: f32, angle: f32) -> (f32, f32) {
    let angle_rad = angle.to_radians();
    (radius * angle_rad.cos(), radius * angle_rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_between(5.0, 45.0, 5.0, 45.0), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let d1 = distance_between(3.0, 10.0, 7.0, 200.0);
        let d2 = distance_between(7.0, 200.0, 3.0, 10.0);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_right_triangle_distance() {
        // (3, 0deg) -> (3, 0); (4, 90deg) -> (0, 4); hypotenuse is 5
        let d = distance_between(3.0, 0.0, 4.0, 90.0);
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_opposite_points_distance() {
        let d = distance_between(1.0, 0.0, 1.0, 180.0);
        assert!((d - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(distance_between(f32::NAN, 0.0, 1.0, 0.0).is_nan());
    }
}
