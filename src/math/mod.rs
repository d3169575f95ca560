//! Orientation math: axis-angle construction, SLERP/SQUAD and rotation matrices.
//!
//! Everything here is a pure function over [`glamx`] value types. Angles
//! cross the API as [`Degrees`].

pub use self::angle::Degrees;
pub use self::quaternion::{axis_angle_to_quat, slerp, squad, SLERP_LINEAR_THRESHOLD};
pub use self::rotation::{axis_angle_matrix, euler_matrix, euler_quat, AXIS_EPSILON_SQUARED};

mod angle;
mod quaternion;
mod rotation;
