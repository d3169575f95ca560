//! Rotation matrix builders: Euler composition and Rodrigues' formula.

use crate::math::Degrees;
use glamx::{Mat3, Quat, Vec3};

/// Axes shorter than this (squared length) count as zero in [`axis_angle_matrix`].
pub const AXIS_EPSILON_SQUARED: f32 = 1.0e-12;

/// Composes rotations about the fixed X, Y and Z axes as `Rz · Ry · Rx`.
///
/// Applied to a column vector, the X rotation acts first, then Y, then Z.
pub fn euler_matrix(rx: Degrees, ry: Degrees, rz: Degrees) -> Mat3 {
    Mat3::from_rotation_z(rz.to_radians())
        * Mat3::from_rotation_y(ry.to_radians())
        * Mat3::from_rotation_x(rx.to_radians())
}

/// Same rotation as [`euler_matrix`], as a unit quaternion.
pub fn euler_quat(rx: Degrees, ry: Degrees, rz: Degrees) -> Quat {
    Quat::from_rotation_z(rz.to_radians())
        * Quat::from_rotation_y(ry.to_radians())
        * Quat::from_rotation_x(rx.to_radians())
}

/// Rotation of `angle` about `axis`, built with Rodrigues' formula.
///
/// Unlike [`axis_angle_to_quat`](crate::math::axis_angle_to_quat), the axis is
/// normalized first. A zero-length (or non-finite) axis has no direction to
/// rotate about and yields `None`: callers keep their previous orientation.
pub fn axis_angle_matrix(axis: Vec3, angle: Degrees) -> Option<Mat3> {
    if !axis.is_finite() || axis.length_squared() < AXIS_EPSILON_SQUARED {
        return None;
    }

    let k = axis.normalize();
    let (s, c) = angle.to_radians().sin_cos();
    let t = 1.0 - c;

    // R = c·I + s·[k]x + (1 - c)·k·kᵀ, written column by column.
    Some(Mat3::from_cols(
        Vec3::new(c + k.x * k.x * t, k.y * k.x * t + k.z * s, k.z * k.x * t - k.y * s),
        Vec3::new(k.x * k.y * t - k.z * s, c + k.y * k.y * t, k.z * k.y * t + k.x * s),
        Vec3::new(k.x * k.z * t + k.y * s, k.y * k.z * t - k.x * s, c + k.z * k.z * t),
    ))
}
