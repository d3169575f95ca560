use std::time::Duration;
use web_time::Instant;

/// Decides whether the driver should run another frame.
///
/// This stands in for the display's refresh callback: a windowing backend
/// implements it by waiting for its next vsync, a test by counting.
pub trait FrameScheduler {
    /// Returns `false` once no frame should run anymore.
    fn next_frame(&mut self) -> bool;
}

/// Runs a fixed number of frames, then stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLimit {
    remaining: u64,
}

impl FrameLimit {
    /// A scheduler allowing exactly `frames` frames.
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    /// Frames still allowed.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for FrameLimit {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        true
    }
}

/// A wall-clock scheduler that tracks frame timings.
///
/// Runs forever unless given a frame budget. With a framerate limit, native
/// targets sleep off the rest of each frame's time slot; on wasm the browser
/// already paces frames, so the limit is ignored.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    curr_time: Instant,
    delta: Duration,
    frames: u64,
    max_frames: Option<u64>,
    min_dur_per_frame: Option<Duration>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// An unbounded, unthrottled clock starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            curr_time: now,
            delta: Duration::ZERO,
            frames: 0,
            max_frames: None,
            min_dur_per_frame: None,
        }
    }

    /// Stops after `frames` frames.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Sets the maximum number of frames per second. `None` or `Some(0)` means there is no limit.
    pub fn set_framerate_limit(&mut self, fps: Option<u64>) {
        self.min_dur_per_frame = fps
            .filter(|f| *f != 0)
            .map(|f| Duration::from_millis(1000 / f))
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time between the two most recent frames.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Frames started so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameScheduler for FrameClock {
    fn next_frame(&mut self) -> bool {
        if self.max_frames.is_some_and(|max| self.frames >= max) {
            return false;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(dur) = self.min_dur_per_frame {
                let elapsed = self.curr_time.elapsed();
                if elapsed < dur {
                    std::thread::sleep(dur - elapsed);
                }
            }
        }

        let now = Instant::now();
        self.delta = now.duration_since(self.curr_time);
        self.curr_time = now;
        self.frames += 1;
        log::trace!("frame {} after {:?}", self.frames, self.delta);
        true
    }
}
