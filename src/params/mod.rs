//! Per-frame control values and the sliders that produce them.

pub use self::slider::{Slider, SliderPanel};
pub use self::snapshot::{ParamSnapshot, ParamSource};

mod slider;
mod snapshot;

/// Names of the parameters read by the built-in controllers.
pub mod names {
    /// Euler angle about X, in degrees.
    pub const RX: &str = "rx";
    /// Euler angle about Y, in degrees.
    pub const RY: &str = "ry";
    /// Euler angle about Z, in degrees.
    pub const RZ: &str = "rz";
    /// X component of a rotation axis.
    pub const AX: &str = "ax";
    /// Y component of a rotation axis.
    pub const AY: &str = "ay";
    /// Z component of a rotation axis.
    pub const AZ: &str = "az";
    /// Rotation angle about the axis, in degrees.
    pub const ANGLE: &str = "angle";
    /// Interpolation parameter.
    pub const T: &str = "t";
}
