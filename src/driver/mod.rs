//! Frame driving: the scheduler, the rendering boundary and the scene driver.

pub use self::scene_driver::{SceneDriver, SceneSlot};
pub use self::scheduler::{FrameClock, FrameLimit, FrameScheduler};
pub use self::sink::{FrameSink, ModelUniform, UniformSink};

mod scene_driver;
mod scheduler;
mod sink;
