//! # User Interface Elements
//!
//! On-screen text drawn over the presented frame: the frame-rate readout
//! and a one-line controls hint.

use macroquad::prelude::*;

/// Weight of the newest sample in the smoothed frame time.
const SMOOTHING: f64 = 0.1;

/// Exponentially smoothed frames-per-second counter.
///
/// # Examples
///
/// ```
/// use tilecaster::FpsCounter;
///
/// let mut fps = FpsCounter::new();
/// fps.record(1.0 / 30.0);
/// assert!((fps.fps() - 30.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FpsCounter {
    average_frame_time: Option<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one frame time sample, in seconds. Non-positive or non-finite
    /// samples are ignored.
    pub fn record(&mut self, frame_seconds: f64) {
        if !(frame_seconds.is_finite() && frame_seconds > 0.0) {
            return;
        }
        self.average_frame_time = Some(match self.average_frame_time {
            Some(average) => average + (frame_seconds - average) * SMOOTHING,
            None => frame_seconds,
        });
    }

    /// Smoothed frames per second, `0.0` before the first sample.
    pub fn fps(&self) -> f64 {
        self.average_frame_time.map_or(0.0, |average| 1.0 / average)
    }

    /// Text shown in the corner of the window.
    pub fn label(&self) -> String {
        format!("FPS: {:.0}", self.fps())
    }
}

/// Draws the HUD text in window coordinates.
pub fn draw_hud(fps: &FpsCounter, show_controls: bool) {
    let label = fps.label();
    let size = measure_text(&label, None, 20, 1.0);
    let x = screen_width() - size.width - 10.0;
    draw_text(&label, x, 24.0, 20.0, YELLOW);

    if show_controls {
        draw_text(
            "Arrows/WASD: move   M: minimap   Esc: quit",
            10.0,
            screen_height() - 10.0,
            16.0,
            WHITE,
        );
    }
}
