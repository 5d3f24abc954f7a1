//! # Frame Timing
//!
//! Fixed-budget frame pacing. A frame that finishes early idles for the rest
//! of its budget; a frame that overruns proceeds immediately with no
//! catch-up and no skipped frames.

use std::time::{Duration, Instant};

/// Tracks frame boundaries against a fixed per-frame budget.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FramePacer {
    /// Creates a pacer targeting `target_fps` frames per second.
    ///
    /// A target of zero disables idling.
    pub fn new(target_fps: u32) -> Self {
        let frame_budget = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self {
            frame_budget,
            last_tick: Instant::now(),
        }
    }

    /// The configured per-frame budget.
    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the budget after `spent` of work, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilecaster::FramePacer;
    /// use std::time::Duration;
    ///
    /// let pacer = FramePacer::new(50);
    /// assert_eq!(pacer.remaining(Duration::from_millis(5)), Some(Duration::from_millis(15)));
    /// assert_eq!(pacer.remaining(Duration::from_millis(40)), None);
    /// ```
    pub fn remaining(&self, spent: Duration) -> Option<Duration> {
        self.frame_budget
            .checked_sub(spent)
            .filter(|left| !left.is_zero())
    }

    /// Marks the start of a new frame and returns the seconds elapsed since
    /// the previous one. This is the integrator's time step.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed.as_secs_f64()
    }

    /// Resets the frame boundary to now without reporting a time step.
    ///
    /// Call once right before the first frame so setup time is not fed to
    /// the integrator.
    pub fn restart(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Seconds of work done since the last [`FramePacer::tick`].
    pub fn spent(&self) -> Duration {
        self.last_tick.elapsed()
    }

    /// Sleeps for whatever is left of the current frame budget.
    ///
    /// Returns the time slept; zero when the frame overran.
    pub fn idle(&self) -> Duration {
        match self.remaining(self.spent()) {
            Some(left) => {
                std::thread::sleep(left);
                left
            }
            None => Duration::ZERO,
        }
    }
}
