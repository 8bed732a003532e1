//! Frame timing.

use std::{
    fmt,
    time::{Duration, Instant},
};

/// Measures the time between consecutive frames.
///
/// The first tick has no previous frame to measure against and reports 0 seconds.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a new frame and returns the seconds elapsed since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Like [`FrameClock::tick`], but with an explicit timestamp.
    ///
    /// A timestamp earlier than the previous one counts as 0 seconds.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        elapsed
    }

    /// Forgets the previous frame, so that the next tick reports 0 seconds again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Logs frames per second, once per second.
pub struct FpsCounter {
    name: String,
    frames: u32,
    window_start: Instant,
}

impl FpsCounter {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            frames: 0,
            window_start: Instant::now(),
        }
    }

    /// Counts a frame, and logs the frame rate if a second has passed since the last report.
    pub fn tick(&mut self) {
        self.tick_with(format_args!(""));
    }

    /// Like [`FpsCounter::tick`], but appends `extra` to the logged message.
    pub fn tick_with(&mut self, extra: impl fmt::Display) {
        if let Some(fps) = self.count(Instant::now()) {
            log::debug!("{}: {} FPS{}", self.name, fps, extra);
        }
    }

    /// Counts a frame at `now` and returns the number of frames in the window that just ended,
    /// if one did.
    fn count(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.saturating_duration_since(self.window_start) < Duration::from_secs(1) {
            return None;
        }
        let frames = self.frames;
        self.frames = 0;
        self.window_start = now;
        Some(frames)
    }
}
