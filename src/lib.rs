/*!
# Rotaviz

Orientation math and frame drivers for small interactive rotation demos.

A demo page shows a few independent scenes, each made of a single mesh whose
orientation follows a handful of range sliders: Euler angles, an axis and an
angle, or an interpolation parameter between keyframe orientations. This
crate holds everything such a page needs besides the renderer itself:

* the math: axis-angle to quaternion, SLERP, SQUAD, Euler composition and
  Rodrigues' rotation matrix, all working on [`glamx`] types;
* the parameters: sliders and the per-frame [`ParamSnapshot`](params::ParamSnapshot)
  they produce;
* the scenes: an explicit [`SceneState`](scene::SceneState) per scene and an
  [`OrientationController`](scene::OrientationController) deciding its orientation;
* the driver: a [`SceneDriver`](driver::SceneDriver) advancing every scene once
  per frame, paced by a [`FrameScheduler`](driver::FrameScheduler) and
  presenting to a [`FrameSink`](driver::FrameSink), which is where a renderer plugs in.

Nothing in here opens a window or touches a GPU.

```
use rotaviz::prelude::*;

let mut driver = SceneDriver::new();
let panels = rotaviz::presets::install_all(&mut driver).unwrap();

// The UI moves a slider...
let (_, slerp_panel) = panels.iter().find(|(label, _)| *label == "slerp").unwrap();
slerp_panel.borrow_mut().set("t", 0.5).unwrap();

// ...and the next frame picks it up.
let mut sink = UniformSink::new();
driver.run(&mut FrameLimit::new(1), &mut sink);
assert!(sink.get("slerp").is_some());
```

Angles are given in degrees everywhere in the public API, see [`Degrees`](math::Degrees).
*/

pub use glamx;

pub mod driver;
pub mod error;
pub mod math;
pub mod params;
pub mod presets;
pub mod scene;

pub use crate::error::{OrientationError, Result};

pub mod prelude {
    pub use crate::driver::*;
    pub use crate::error::OrientationError;
    pub use crate::math::*;
    pub use crate::params::*;
    pub use crate::scene::*;
    pub use glamx::{Mat3, Mat4, Pose3, Quat, Vec3};
    pub use std::cell::RefCell;
    pub use std::rc::Rc;
}
