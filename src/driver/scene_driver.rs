use crate::driver::{FrameScheduler, FrameSink};
use crate::params::{ParamSnapshot, ParamSource};
use crate::scene::{OrientationController, SceneState};

/// A scene together with its controller and its control inputs.
pub struct SceneSlot {
    state: SceneState,
    controller: Box<dyn OrientationController>,
    input: Box<dyn ParamSource>,
}

impl SceneSlot {
    /// Bundles a scene, the controller orienting it and the source of its parameters.
    pub fn new<C, P>(state: SceneState, controller: C, input: P) -> Self
    where
        C: OrientationController + 'static,
        P: ParamSource + 'static,
    {
        Self {
            state,
            controller: Box::new(controller),
            input: Box::new(input),
        }
    }

    /// A slot whose controller reads no parameter.
    pub fn without_input<C>(state: SceneState, controller: C) -> Self
    where
        C: OrientationController + 'static,
    {
        Self::new(state, controller, ParamSnapshot::new())
    }

    /// The scene state.
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Replaces the source of this scene's parameters.
    pub fn set_input<P: ParamSource + 'static>(&mut self, input: P) {
        self.input = Box::new(input);
    }

    fn step(&mut self, sink: &mut dyn FrameSink) {
        let params = self.input.snapshot();
        self.controller.update(&mut self.state, &params);
        self.state.advance_frame();
        sink.present(&self.state);
    }
}

/// Advances a set of independent scenes in lockstep.
///
/// Every frame, each scene reads its parameters once, lets its controller
/// update the orientation, and is handed to the [`FrameSink`].
///
/// # Example
/// ```
/// # use rotaviz::prelude::*;
/// let mut driver = SceneDriver::new();
/// driver.add_scene(SceneSlot::without_input(SceneState::new("three1"), Spin::default()));
///
/// let mut sink = UniformSink::new();
/// let frames = driver.run(&mut FrameLimit::new(10), &mut sink);
/// assert_eq!(frames, 10);
/// assert_eq!(driver.scene("three1").unwrap().frame(), 10);
/// ```
#[derive(Default)]
pub struct SceneDriver {
    slots: Vec<SceneSlot>,
    frames: u64,
}

impl SceneDriver {
    /// A driver without any scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a scene and runs its controller's setup hook.
    ///
    /// Returns the scene index.
    pub fn add_scene(&mut self, mut slot: SceneSlot) -> usize {
        slot.controller.setup(&mut slot.state);
        log::debug!("scene `{}` registered", slot.state.label());
        self.slots.push(slot);
        self.slots.len() - 1
    }

    /// The state of the scene labelled `label`.
    pub fn scene(&self, label: &str) -> Option<&SceneState> {
        self.slot(label).map(SceneSlot::state)
    }

    /// The slot of the scene labelled `label`.
    pub fn slot(&self, label: &str) -> Option<&SceneSlot> {
        self.slots.iter().find(|s| s.state.label() == label)
    }

    /// Mutable access to the slot of the scene labelled `label`.
    pub fn slot_mut(&mut self, label: &str) -> Option<&mut SceneSlot> {
        self.slots.iter_mut().find(|s| s.state.label() == label)
    }

    /// All registered scenes, in registration order.
    pub fn scenes(&self) -> impl Iterator<Item = &SceneState> {
        self.slots.iter().map(SceneSlot::state)
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no scene is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances every scene by one frame.
    pub fn frame(&mut self, sink: &mut dyn FrameSink) {
        for slot in &mut self.slots {
            slot.step(sink);
        }
        self.frames += 1;
    }

    /// Runs frames until `scheduler` stops. Returns the number of frames run.
    pub fn run(&mut self, scheduler: &mut dyn FrameScheduler, sink: &mut dyn FrameSink) -> u64 {
        let first = self.frames;
        while scheduler.next_frame() {
            self.frame(sink);
        }

        let ran = self.frames - first;
        log::info!("ran {} frames over {} scenes", ran, self.slots.len());
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::FrameLimit;
    use crate::params::{names, Slider, SliderPanel};
    use crate::scene::{AxisAngleSliders, EulerSliders, Spin};
    use glamx::Quat;

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.abs_diff_eq(b, 1.0e-5) || a.abs_diff_eq(-b, 1.0e-5)
    }

    #[derive(Default)]
    struct Recorder {
        presented: Vec<(String, u64)>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, scene: &SceneState) {
            self.presented.push((scene.label().to_string(), scene.frame()));
        }
    }

    #[test]
    fn every_scene_is_presented_every_frame() {
        let mut driver = SceneDriver::new();
        let _ = driver.add_scene(SceneSlot::without_input(SceneState::new("a"), Spin::default()));
        let _ = driver.add_scene(SceneSlot::without_input(SceneState::new("b"), EulerSliders));

        let mut sink = Recorder::default();
        assert_eq!(driver.run(&mut FrameLimit::new(3), &mut sink), 3);
        assert_eq!(
            sink.presented,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 1),
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("a".to_string(), 3),
                ("b".to_string(), 3),
            ]
        );
        assert_eq!(driver.frames(), 3);
    }

    #[test]
    fn scenes_are_independent() {
        let mut driver = SceneDriver::new();
        let panel = SliderPanel::new().with_slider(Slider::new(names::RZ, -180.0, 180.0).with_value(90.0));
        let _ = driver.add_scene(SceneSlot::new(SceneState::new("euler"), EulerSliders, panel));
        let _ = driver.add_scene(SceneSlot::without_input(SceneState::new("still"), EulerSliders));

        driver.frame(&mut Recorder::default());

        let euler = driver.scene("euler").unwrap().rotation();
        assert!(same_rotation(euler, Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)));
        assert!(same_rotation(driver.scene("still").unwrap().rotation(), Quat::IDENTITY));
    }

    #[test]
    fn input_is_read_once_per_frame() {
        let mut driver = SceneDriver::new();
        let _ = driver.add_scene(SceneSlot::new(
            SceneState::new("axis-angle"),
            AxisAngleSliders,
            ParamSnapshot::new().with(names::ANGLE, 30.0),
        ));
        driver.frame(&mut Recorder::default());
        let before = driver.scene("axis-angle").unwrap().rotation();

        driver
            .slot_mut("axis-angle")
            .unwrap()
            .set_input(ParamSnapshot::new().with(names::ANGLE, 60.0));
        driver.frame(&mut Recorder::default());
        let after = driver.scene("axis-angle").unwrap().rotation();

        assert!(same_rotation(before, Quat::from_rotation_y(30f32.to_radians())));
        assert!(same_rotation(after, Quat::from_rotation_y(60f32.to_radians())));
    }

    #[test]
    fn empty_driver_still_counts_frames() {
        let mut driver = SceneDriver::new();
        assert!(driver.is_empty());
        assert_eq!(driver.run(&mut FrameLimit::new(5), &mut Recorder::default()), 5);
        assert!(driver.scene("missing").is_none());
    }
}
