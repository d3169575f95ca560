//! Per-scene state and the controllers that orient a scene's mesh.

pub use self::controller::{
    AxisAngleSliders, EulerSliders, OrientationController, SlerpSliders, Spin, SquadSliders,
};
pub use self::keyframe::Keyframe;
pub use self::scene_state::SceneState;

mod controller;
mod keyframe;
mod scene_state;
