//! The demo page's scenes, ready to be registered with a [`SceneDriver`].
//!
//! The two spinning scenes take no input. The slider scenes come with a
//! shared [`SliderPanel`] that the UI writes to and the driver reads from.

use crate::driver::{SceneDriver, SceneSlot};
use crate::error::Result;
use crate::math::Degrees;
use crate::params::{names, Slider, SliderPanel};
use crate::scene::{
    AxisAngleSliders, EulerSliders, Keyframe, SceneState, SlerpSliders, Spin, SquadSliders,
};
use glamx::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

/// A slider-driven scene and the panel controlling it.
pub struct PresetScene {
    /// The scene, its controller and its input.
    pub slot: SceneSlot,
    /// The controls read by the slot every frame.
    pub panel: Rc<RefCell<SliderPanel>>,
}

impl PresetScene {
    fn new<C: crate::scene::OrientationController + 'static>(
        label: &str,
        controller: C,
        panel: SliderPanel,
    ) -> Self {
        let panel = Rc::new(RefCell::new(panel));
        Self {
            slot: SceneSlot::new(SceneState::new(label), controller, panel.clone()),
            panel,
        }
    }

    /// Registers the scene with `driver` and returns its panel.
    pub fn install(self, driver: &mut SceneDriver) -> Rc<RefCell<SliderPanel>> {
        let _ = driver.add_scene(self.slot);
        self.panel
    }
}

/// The tumbling cube, rendered to the `three1` canvas.
pub fn cube() -> SceneSlot {
    SceneSlot::without_input(SceneState::new("three1"), Spin::default())
}

/// The tumbling torus, rendered to the `three2` canvas.
pub fn torus() -> SceneSlot {
    SceneSlot::without_input(SceneState::new("three2"), Spin::default())
}

fn angle_slider(name: &str, min: f32, max: f32) -> Slider {
    Slider::new(name, min, max).with_step(1.0).with_value(0.0)
}

fn axis_slider(name: &str, value: f32) -> Slider {
    Slider::new(name, -1.0, 1.0).with_step(0.01).with_value(value)
}

fn t_slider() -> Slider {
    Slider::new(names::T, 0.0, 1.0).with_step(0.01)
}

/// Euler angles `rx`, `ry`, `rz` in `[-180, 180]`.
pub fn euler() -> PresetScene {
    let panel = SliderPanel::new()
        .with_slider(angle_slider(names::RX, -180.0, 180.0))
        .with_slider(angle_slider(names::RY, -180.0, 180.0))
        .with_slider(angle_slider(names::RZ, -180.0, 180.0));
    PresetScene::new("euler", EulerSliders, panel)
}

/// Axis `ax`, `ay`, `az` in `[-1, 1]` (starting at +Y) and `angle` in `[0, 360]`.
pub fn axis_angle() -> PresetScene {
    let panel = SliderPanel::new()
        .with_slider(axis_slider(names::AX, 0.0))
        .with_slider(axis_slider(names::AY, 1.0))
        .with_slider(axis_slider(names::AZ, 0.0))
        .with_slider(angle_slider(names::ANGLE, 0.0, 360.0));
    PresetScene::new("axis-angle", AxisAngleSliders, panel)
}

/// Slerp from the rest pose to a 120° turn about the XY diagonal.
pub fn slerp() -> Result<PresetScene> {
    let controller = SlerpSliders::new(
        Keyframe::new(Vec3::Y, Degrees::ZERO),
        Keyframe::new(Vec3::new(1.0, 1.0, 0.0), Degrees(120.0)),
    )?;
    let panel = SliderPanel::new().with_slider(t_slider());
    Ok(PresetScene::new("slerp", controller, panel))
}

/// Squad across quarter turns about X, Y and Z.
pub fn squad() -> Result<PresetScene> {
    let controller = SquadSliders::new([
        Keyframe::new(Vec3::X, Degrees::ZERO),
        Keyframe::new(Vec3::X, Degrees(90.0)),
        Keyframe::new(Vec3::Y, Degrees(90.0)),
        Keyframe::new(Vec3::Z, Degrees(90.0)),
    ])?;
    let panel = SliderPanel::new().with_slider(t_slider());
    Ok(PresetScene::new("squad", controller, panel))
}

/// Registers every demo scene with `driver`.
///
/// Returns the slider panels, labelled by scene.
pub fn install_all(driver: &mut SceneDriver) -> Result<Vec<(&'static str, Rc<RefCell<SliderPanel>>)>> {
    let _ = driver.add_scene(cube());
    let _ = driver.add_scene(torus());

    Ok(vec![
        ("euler", euler().install(driver)),
        ("axis-angle", axis_angle().install(driver)),
        ("slerp", slerp()?.install(driver)),
        ("squad", squad()?.install(driver)),
    ])
}
