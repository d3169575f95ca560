//! Runs the demo page headless: the sliders sweep on their own and every
//! scene's model matrix is logged once per second of frames.
//!
//! `RUST_LOG=info cargo run --example slider_demo`

use rotaviz::prelude::*;
use rotaviz::presets;

const FPS: u64 = 60;

struct LogSink;

impl FrameSink for LogSink {
    fn present(&mut self, scene: &SceneState) {
        if scene.frame() % FPS == 0 {
            let (axis, angle) = scene.rotation().to_axis_angle();
            log::info!(
                "{:>10} frame {:>4}: {:.1}° about [{:.2}, {:.2}, {:.2}]",
                scene.label(),
                scene.frame(),
                angle.to_degrees(),
                axis.x,
                axis.y,
                axis.z
            );
        }
    }
}

fn main() -> Result<(), OrientationError> {
    env_logger::init();

    let mut driver = SceneDriver::new();
    let panels = presets::install_all(&mut driver)?;
    let mut clock = FrameClock::new();
    clock.set_framerate_limit(Some(FPS));

    for frame in 0..5 * FPS {
        if !clock.next_frame() {
            break;
        }

        // A triangle wave in [0, 1] with a two-second period.
        let phase = (frame % (2 * FPS)) as f32 / FPS as f32;
        let t = if phase <= 1.0 { phase } else { 2.0 - phase };

        for (label, panel) in &panels {
            let mut panel = panel.borrow_mut();
            let _ = match *label {
                "euler" => panel.set(names::RZ, 360.0 * t - 180.0)?,
                "axis-angle" => panel.set(names::ANGLE, 360.0 * t)?,
                _ => panel.set(names::T, t)?,
            };
        }

        driver.frame(&mut LogSink);
    }

    log::info!("done after {:?}", clock.elapsed());
    Ok(())
}
