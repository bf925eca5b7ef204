use std::time::Duration;

use crate::core::clock::TimeSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: Duration,
    pub delta: Duration,
}

impl FrameInfo {
    pub fn new(number: u64, time: Duration, delta: Duration) -> Self {
        Self { number, time, delta }
    }
}

/// Produces one `FrameInfo` per rendered frame from a time source.
///
/// Animation code derives its progress from `time`, never from `number`,
/// so dropped or uneven frames do not change where an animation ends up.
pub struct FrameScheduler<T: TimeSource> {
    clock: T,
    frame_number: u64,
    last_frame_time: Option<Duration>,
}

impl<T: TimeSource> FrameScheduler<T> {
    pub fn new(clock: T) -> Self {
        Self {
            clock,
            frame_number: 0,
            last_frame_time: None,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Current time without advancing the frame counter
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn tick(&mut self) -> FrameInfo {
        let time = self.clock.now();
        let delta = self
            .last_frame_time
            .map_or(Duration::ZERO, |last| time.saturating_sub(last));

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = Some(time);

        info
    }
}

impl<T: TimeSource> Iterator for FrameScheduler<T> {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        Some(self.tick())
    }
}
