//! Frame counting and FPS sampling for the window loop.
//!
//! The physics never reads time; this only feeds the window title and logs.

use std::time::{Duration, Instant};

/// Counts frames and measures the frame rate over a fixed sampling window.
#[derive(Debug)]
pub struct FrameTimer {
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameTimer {
    pub fn new(fps_update_interval: Duration) -> Self {
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval,
        }
    }

    /// Count a frame. Returns the fresh FPS figure when a sampling window closed.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed < self.fps_update_interval {
            return None;
        }
        let frames_since = self.frame_count - self.fps_frame_count;
        self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        Some(self.fps)
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_new() {
        let timer = FrameTimer::default();
        assert_eq!(timer.frame(), 0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn test_fps_reported_after_interval() {
        let mut timer = FrameTimer::new(Duration::from_secs(1));
        let start = timer.fps_update_time;

        for i in 1..30 {
            assert_eq!(timer.tick_at(start + Duration::from_millis(i * 10)), None);
        }
        let fps = timer.tick_at(start + Duration::from_secs(1)).unwrap();

        assert_eq!(timer.frame(), 30);
        assert!((fps - 30.0).abs() < 1e-3);
    }
}
