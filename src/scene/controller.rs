//! Per-scene orientation controllers.

use crate::error::Result;
use crate::math::{axis_angle_matrix, euler_matrix, slerp, squad, Degrees};
use crate::params::{names, ParamSnapshot};
use crate::scene::{Keyframe, SceneState};
use glamx::{Quat, Vec3};

/// Turns a frame's parameters into a mesh orientation.
///
/// A controller is attached to exactly one scene. Its driver calls
/// [`setup`](Self::setup) once, when the scene is registered, and then
/// [`update`](Self::update) once per frame with a fresh snapshot.
pub trait OrientationController {
    /// Called once before the first frame.
    fn setup(&mut self, _state: &mut SceneState) {}

    /// Called once per frame.
    fn update(&mut self, state: &mut SceneState, params: &ParamSnapshot);
}

/// Continuous tumbling about X and Y, ignoring every parameter.
///
/// Both angles grow by the same step each frame and compose as `Rx · Ry`
/// (an XYZ Euler triple with no Z term), unlike [`EulerSliders`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    step: Degrees,
    rx: Degrees,
    ry: Degrees,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(Degrees::from_radians(0.01))
    }
}

impl Spin {
    /// A spin adding `step` to both the X and Y angles every frame.
    pub fn new(step: Degrees) -> Self {
        Self {
            step,
            rx: Degrees::ZERO,
            ry: Degrees::ZERO,
        }
    }

    /// Accumulated `(x, y)` angles.
    pub fn angles(&self) -> (Degrees, Degrees) {
        (self.rx, self.ry)
    }

    /// Intrinsic X-then-Y orientation of the accumulated angles, `Rx · Ry`.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.rx.to_radians()) * Quat::from_rotation_y(self.ry.to_radians())
    }
}

impl OrientationController for Spin {
    fn setup(&mut self, state: &mut SceneState) {
        state.set_rotation(self.rotation());
    }

    fn update(&mut self, state: &mut SceneState, _: &ParamSnapshot) {
        self.rx = self.rx + self.step;
        self.ry = self.ry + self.step;
        state.set_rotation(self.rotation());
    }
}

/// Orientation from three Euler angles read from `rx`, `ry` and `rz`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerSliders;

impl OrientationController for EulerSliders {
    fn update(&mut self, state: &mut SceneState, params: &ParamSnapshot) {
        let rx = Degrees(params.get_or(names::RX, 0.0));
        let ry = Degrees(params.get_or(names::RY, 0.0));
        let rz = Degrees(params.get_or(names::RZ, 0.0));
        state.set_rotation_matrix(euler_matrix(rx, ry, rz));
    }
}

/// Orientation from an axis (`ax`, `ay`, `az`) and an `angle`.
///
/// A zero axis leaves the previous orientation in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisAngleSliders;

impl OrientationController for AxisAngleSliders {
    fn update(&mut self, state: &mut SceneState, params: &ParamSnapshot) {
        let axis = Vec3::new(
            params.get_or(names::AX, 0.0),
            params.get_or(names::AY, 1.0),
            params.get_or(names::AZ, 0.0),
        );
        let angle = Degrees(params.get_or(names::ANGLE, 0.0));

        match axis_angle_matrix(axis, angle) {
            Some(m) => state.set_rotation_matrix(m),
            None => log::debug!(
                "{}: zero rotation axis, keeping the previous orientation",
                state.label()
            ),
        }
    }
}

/// Slerps between two keyframes according to `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlerpSliders {
    from: Quat,
    to: Quat,
}

impl SlerpSliders {
    /// Interpolates from `from` (at `t = 0`) to `to` (at `t = 1`).
    pub fn new(from: Keyframe, to: Keyframe) -> Result<Self> {
        Ok(Self::from_quats(from.to_quat()?, to.to_quat()?))
    }

    /// Same as [`new`](Self::new) with the keyframes already converted.
    pub fn from_quats(from: Quat, to: Quat) -> Self {
        Self { from, to }
    }
}

impl OrientationController for SlerpSliders {
    fn setup(&mut self, state: &mut SceneState) {
        state.set_rotation(self.from);
    }

    fn update(&mut self, state: &mut SceneState, params: &ParamSnapshot) {
        let t = params.get_or(names::T, 0.0);
        state.set_rotation(slerp(self.from, self.to, t));
    }
}

/// Squads across four keyframes according to `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquadSliders {
    keys: [Quat; 4],
}

impl SquadSliders {
    /// Interpolates across `keys`, starting at `keys[0]` and ending at `keys[1]`.
    pub fn new(keys: [Keyframe; 4]) -> Result<Self> {
        Ok(Self::from_quats([
            keys[0].to_quat()?,
            keys[1].to_quat()?,
            keys[2].to_quat()?,
            keys[3].to_quat()?,
        ]))
    }

    /// Same as [`new`](Self::new) with the keyframes already converted.
    pub fn from_quats(keys: [Quat; 4]) -> Self {
        Self { keys }
    }
}

impl OrientationController for SquadSliders {
    fn setup(&mut self, state: &mut SceneState) {
        state.set_rotation(self.keys[0]);
    }

    fn update(&mut self, state: &mut SceneState, params: &ParamSnapshot) {
        let [q1, q2, q3, q4] = self.keys;
        let t = params.get_or(names::T, 0.0);
        state.set_rotation(squad(q1, q2, q3, q4, t));
    }
}
