use crate::error::Result;
use crate::math::{axis_angle_to_quat, Degrees};
use glamx::{Quat, Vec3};

/// An orientation given as a rotation axis and an angle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    /// Rotation axis. Normalized on construction, zero if degenerate.
    pub axis: Vec3,
    /// Rotation angle.
    pub angle: Degrees,
}

impl Keyframe {
    /// A keyframe rotating by `angle` about the direction of `axis`.
    pub fn new(axis: Vec3, angle: Degrees) -> Self {
        Self {
            axis: axis.normalize_or_zero(),
            angle,
        }
    }

    /// The unit quaternion of this keyframe.
    ///
    /// Fails if the axis is zero.
    pub fn to_quat(&self) -> Result<Quat> {
        axis_angle_to_quat(self.axis, self.angle)
    }
}
