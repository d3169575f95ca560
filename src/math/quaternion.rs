//! Quaternion construction and interpolation.

use crate::error::{OrientationError, Result};
use crate::math::Degrees;
use glamx::{Quat, Vec3};

/// Above this (sign-corrected) cosine, [`slerp`] falls back to a normalized lerp.
///
/// The spherical formula divides by `sin(θ)`, which vanishes as the inputs
/// converge.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Builds the quaternion rotating by `angle` around `axis`.
///
/// The axis is used as given: it is *not* normalized, so a non-unit axis
/// produces a non-unit quaternion. Normalize it first, or go through
/// [`axis_angle_matrix`](crate::math::axis_angle_matrix) which does.
///
/// # Errors
/// Returns [`OrientationError::InvalidArgument`] if `axis` is zero or has a
/// non-finite component.
///
/// # Example
/// ```
/// # use rotaviz::math::{axis_angle_to_quat, Degrees};
/// # use rotaviz::glamx::{Quat, Vec3};
/// let q = axis_angle_to_quat(Vec3::Y, Degrees(90.0)).unwrap();
/// let h = std::f32::consts::FRAC_1_SQRT_2;
/// assert!(q.abs_diff_eq(Quat::from_xyzw(0.0, h, 0.0, h), 1.0e-6));
/// ```
pub fn axis_angle_to_quat(axis: Vec3, angle: Degrees) -> Result<Quat> {
    if !axis.is_finite() {
        return Err(OrientationError::InvalidArgument(
            "rotation axis has a non-finite component",
        ));
    }

    if axis == Vec3::ZERO {
        return Err(OrientationError::InvalidArgument(
            "rotation axis must be non-zero",
        ));
    }

    let half = angle.to_radians() * 0.5;
    let (s, c) = half.sin_cos();
    let v = axis * s;

    Ok(Quat::from_xyzw(v.x, v.y, v.z, c))
}

/// Spherical linear interpolation between two unit quaternions.
///
/// Always follows the shorter of the two arcs joining `q1` and `q2`: when
/// their dot product is negative, `q2` is flipped first. `t` is not clamped,
/// so values outside `[0, 1]` extrapolate along the same great circle.
///
/// The result is renormalized.
pub fn slerp(q1: Quat, q2: Quat, t: f32) -> Quat {
    let mut cos_theta = q1.dot(q2);
    let mut end = q2;

    if cos_theta < 0.0 {
        cos_theta = -cos_theta;
        end = -q2;
    }

    if cos_theta > SLERP_LINEAR_THRESHOLD {
        return (q1 * (1.0 - t) + end * t).normalize();
    }

    let theta = cos_theta.min(1.0).acos();
    let inv_sin_theta = 1.0 / theta.sin();
    let w1 = ((1.0 - t) * theta).sin() * inv_sin_theta;
    let w2 = (t * theta).sin() * inv_sin_theta;

    (q1 * w1 + end * w2).normalize()
}

/// Simplified spherical quadrangle interpolation across four orientations.
///
/// Computes `slerp(slerp(q1, q2, t), slerp(q3, q4, t), 2t(1 - t))`. The outer
/// weight vanishes at both ends, hence `squad(.., 0) == q1` and
/// `squad(.., 1) == q2`: the curve leaves from `q1`, bends towards the
/// `q3 -> q4` arc in the middle, and lands back on `q2`.
pub fn squad(q1: Quat, q2: Quat, q3: Quat, q4: Quat, t: f32) -> Quat {
    let a = slerp(q1, q2, t);
    let b = slerp(q3, q4, t);
    slerp(a, b, 2.0 * t * (1.0 - t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_1_SQRT_2;

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.abs_diff_eq(b, 1.0e-5) || a.abs_diff_eq(-b, 1.0e-5)
    }

    fn q(axis: Vec3, deg: f32) -> Quat {
        axis_angle_to_quat(axis.normalize(), Degrees(deg)).unwrap()
    }

    #[test]
    fn zero_angle_is_identity() {
        for axis in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, -2.0, 0.5)] {
            let r = axis_angle_to_quat(axis, Degrees::ZERO).unwrap();
            assert!(r.abs_diff_eq(Quat::IDENTITY, 1.0e-7));
        }
    }

    #[test]
    fn quarter_turn_about_y() {
        let r = axis_angle_to_quat(Vec3::Y, Degrees(90.0)).unwrap();
        let [x, y, z, w] = r.to_array();
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_relative_eq!(z, 0.0);
        assert_relative_eq!(w, FRAC_1_SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn matches_glam_axis_angle() {
        let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
        let r = axis_angle_to_quat(axis, Degrees(37.0)).unwrap();
        let expected = Quat::from_axis_angle(axis, 37.0f32.to_radians());
        assert!(r.abs_diff_eq(expected, 1.0e-6));
    }

    #[test]
    fn axis_is_not_normalized() {
        let r = axis_angle_to_quat(Vec3::new(0.0, 2.0, 0.0), Degrees(90.0)).unwrap();
        assert_relative_eq!(r.y, 2.0 * FRAC_1_SQRT_2, epsilon = 1e-6);
        assert!(r.length() > 1.1);
    }

    #[test]
    fn rejects_degenerate_axes() {
        assert!(matches!(
            axis_angle_to_quat(Vec3::ZERO, Degrees(45.0)),
            Err(OrientationError::InvalidArgument(_))
        ));
        assert!(matches!(
            axis_angle_to_quat(Vec3::new(f32::NAN, 0.0, 1.0), Degrees(45.0)),
            Err(OrientationError::InvalidArgument(_))
        ));
        assert!(axis_angle_to_quat(Vec3::new(0.0, f32::INFINITY, 0.0), Degrees(1.0)).is_err());
    }

    #[test]
    fn slerp_endpoints() {
        let a = q(Vec3::X, 20.0);
        let b = q(Vec3::new(0.0, 1.0, 1.0), 140.0);
        assert!(same_rotation(slerp(a, b, 0.0), a));
        assert!(same_rotation(slerp(a, b, 1.0), b));
    }

    #[test]
    fn slerp_of_identical_inputs_is_constant() {
        let a = q(Vec3::new(0.3, -0.2, 0.9), 75.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(same_rotation(slerp(a, a, t), a));
        }
    }

    #[test]
    fn slerp_midpoint_halves_the_angle() {
        let mid = slerp(Quat::IDENTITY, q(Vec3::Z, 90.0), 0.5);
        assert!(same_rotation(mid, q(Vec3::Z, 45.0)));
    }

    #[test]
    fn slerp_takes_the_short_way() {
        // -q encodes the same orientation as q. Without the sign flip the
        // midpoint would land on the far side of the hypersphere.
        let a = q(Vec3::Y, 10.0);
        let b = -q(Vec3::Y, 50.0);
        assert!(a.dot(b) < 0.0);

        let mid = slerp(a, b, 0.5);
        assert!(same_rotation(mid, q(Vec3::Y, 30.0)));
    }

    #[test]
    fn slerp_near_identical_inputs_stays_finite() {
        let a = q(Vec3::X, 10.0);
        let b = q(Vec3::X, 10.001);
        let mid = slerp(a, b, 0.5);
        assert!(mid.is_finite());
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-6);
        assert!(same_rotation(mid, a));
    }

    #[test]
    fn slerp_extrapolates() {
        let b = q(Vec3::X, 40.0);
        assert!(same_rotation(slerp(Quat::IDENTITY, b, 1.5), q(Vec3::X, 60.0)));
        assert!(same_rotation(slerp(Quat::IDENTITY, b, -0.5), q(Vec3::X, -20.0)));
    }

    #[test]
    fn squad_endpoints() {
        let q1 = q(Vec3::X, 0.0);
        let q2 = q(Vec3::X, 90.0);
        let q3 = q(Vec3::Y, 45.0);
        let q4 = q(Vec3::Z, 120.0);

        assert!(same_rotation(squad(q1, q2, q3, q4, 0.0), q1));
        // Lands on q2, not q4.
        assert!(same_rotation(squad(q1, q2, q3, q4, 1.0), q2));
        assert!(!same_rotation(squad(q1, q2, q3, q4, 1.0), q4));
    }

    #[test]
    fn squad_midpoint_is_halfway_between_inner_slerps() {
        let (q1, q2, q3, q4) = (
            Quat::IDENTITY,
            q(Vec3::X, 90.0),
            q(Vec3::Y, 30.0),
            q(Vec3::Y, 90.0),
        );
        let a = slerp(q1, q2, 0.5);
        let b = slerp(q3, q4, 0.5);
        assert!(same_rotation(squad(q1, q2, q3, q4, 0.5), slerp(a, b, 0.5)));
    }
}
