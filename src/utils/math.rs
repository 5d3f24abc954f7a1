//! # Game Mathematics
//!
//! Angle and distance helpers for the raycasting geometry.

use std::f64::consts::TAU;

/// Tolerance below which a trigonometric term is treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Wraps an angle in radians into `[0, 2π)`.
///
/// Non-finite input maps to `0.0` so that a corrupted angle can never leak
/// NaN into the ray caster.
///
/// # Examples
///
/// ```
/// use tilecaster::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-9);
/// assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-9);
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use tilecaster::distance_between_points;
///
/// assert_eq!(distance_between_points(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
pub fn distance_between_points(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Smallest absolute difference between two angles, in `[0, π]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = normalize_angle(a - b);
    diff.min(TAU - diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        let a1 = normalize_angle(-PI / 2.0);
        assert!((0.0..TAU).contains(&a1));
        assert!((a1 - 1.5 * PI).abs() < 1e-9);

        let a2 = normalize_angle(3.0 * PI);
        assert!((a2 - PI).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_angle_edge_values() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert_eq!(normalize_angle(-1e-20), 0.0);
        assert_eq!(normalize_angle(f64::NAN), 0.0);
        assert_eq!(normalize_angle(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_distance_between_points() {
        assert!((distance_between_points(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-12);
        assert!((distance_between_points(-1.0, -1.0, -4.0, -5.0) - 5.0).abs() < 1e-12);
        assert_eq!(distance_between_points(2.5, 7.0, 2.5, 7.0), 0.0);
    }

    #[test]
    fn test_angle_difference_wraps() {
        assert!((angle_difference(0.1, TAU - 0.1) - 0.2).abs() < 1e-9);
        assert!((angle_difference(PI, 0.0) - PI).abs() < 1e-9);
    }
}
