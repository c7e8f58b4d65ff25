//! Frame clock that turns host frame times into animation ticks.
//!
//! The scene's rates are expressed per tick, so the host scales each frame's
//! duration by the configured tick rate. Long frames are clamped so a stall
//! does not fling every body half a turn in one step.

use tracing::warn;

/// Maximum frame time honored in one step (250 ms, i.e. a 4 FPS floor).
/// Tick rates below 4 per second raise the limit to one tick.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Converts elapsed seconds into `dt` values for [`orbis_scene::Scene::tick`].
pub struct FrameClock {
    ticks_per_second: f64,
    total_ticks: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock for the given tick rate.
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            ticks_per_second,
            total_ticks: 0.0,
            frame_count: 0,
        }
    }

    /// Convert an explicit frame time in seconds into ticks.
    ///
    /// Negative or non-finite frame times yield `0.0`, which the scene treats
    /// as a no-op.
    pub fn advance(&mut self, frame_time: f64) -> f64 {
        self.frame_count += 1;
        if !frame_time.is_finite() || frame_time <= 0.0 {
            return 0.0;
        }
        let max_frame_time = self.max_frame_time();
        let clamped = if frame_time > max_frame_time {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                max_frame_time * 1000.0
            );
            max_frame_time
        } else {
            frame_time
        };
        let dt = clamped * self.ticks_per_second;
        self.total_ticks += dt;
        dt
    }

    /// Seconds of one tick at the configured rate.
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.ticks_per_second
    }

    /// Longest frame honored in one step: [`MAX_FRAME_TIME`], but never less
    /// than one tick.
    pub fn max_frame_time(&self) -> f64 {
        MAX_FRAME_TIME.max(self.tick_duration())
    }

    /// Frames seen so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Sum of all ticks handed out.
    pub fn total_ticks(&self) -> f64 {
        self.total_ticks
    }
}
