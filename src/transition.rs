//! Animated camera repositioning.
//!
//! A [`CameraTransitionController`] moves the primary camera from wherever it is
//! to a requested [`Viewpoint`] over a fixed duration with an ease-out cubic
//! curve. Progress comes from timestamps, not frame counts.

use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{ease_out_cubic, lerp};
use crate::rig::CameraRig;
use crate::viewpoint::Viewpoint;

pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    pub duration_ms: u64,
}

impl TransitionSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_DURATION.as_millis() as u64,
        }
    }
}

/// One in-flight transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    pub start_position: Vec3,
    pub start_target: Vec3,
    pub end_position: Vec3,
    pub end_target: Vec3,
    pub start_time: Duration,
    pub duration: Duration,
}

impl TransitionState {
    /// Linear progress in [0, 1]; a zero duration is immediately complete
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        now.saturating_sub(self.start_time) >= self.duration
    }

    /// Interpolated (position, target) at `now`; exactly the end pose once complete
    pub fn sample(&self, now: Duration) -> (Vec3, Vec3) {
        if self.is_complete(now) {
            return (self.end_position, self.end_target);
        }
        let eased = ease_out_cubic(self.progress(now));
        (
            lerp(self.start_position, self.end_position, eased),
            lerp(self.start_target, self.end_target, eased),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Transitioning,
}

/// What a call to [`CameraTransitionController::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionUpdate {
    /// Nothing in flight, the camera was not written
    Idle,
    /// Camera moved to an intermediate pose
    InProgress,
    /// Camera placed exactly at the end pose; orbit control is back in charge
    Completed,
}

#[derive(Debug, Clone)]
pub struct CameraTransitionController {
    duration: Duration,
    state: Option<TransitionState>,
}

impl CameraTransitionController {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            state: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn phase(&self) -> TransitionPhase {
        match self.state {
            Some(_) => TransitionPhase::Transitioning,
            None => TransitionPhase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&TransitionState> {
        self.state.as_ref()
    }

    /// Start moving towards `viewpoint` from the rig's pose at this instant.
    /// A transition already in flight is replaced and restarts from where the
    /// camera currently is, so the path has no jump.
    pub fn begin(&mut self, viewpoint: Viewpoint, rig: &CameraRig, now: Duration) {
        if self.state.is_some() {
            log::debug!("transition redirected to {:?}", viewpoint.position());
        } else {
            log::debug!("transition started to {:?}", viewpoint.position());
        }
        if viewpoint.is_degenerate() {
            log::debug!("viewpoint target equals its position, look direction is undefined");
        }

        self.state = Some(TransitionState {
            start_position: rig.position(),
            start_target: rig.target(),
            end_position: viewpoint.position(),
            end_target: viewpoint.target(),
            start_time: now,
            duration: self.duration,
        });
    }

    /// Advance the camera for this frame. Only writes the rig while a transition is active.
    pub fn update(&mut self, now: Duration, rig: &mut CameraRig) -> TransitionUpdate {
        let Some(state) = self.state else {
            return TransitionUpdate::Idle;
        };

        let (position, target) = state.sample(now);
        rig.camera.position = position;
        rig.camera.look_at(target);
        rig.orbit.sync(&rig.camera);

        if state.is_complete(now) {
            self.state = None;
            log::debug!("transition completed at {:?}", position);
            TransitionUpdate::Completed
        } else {
            TransitionUpdate::InProgress
        }
    }

    /// Drop any in-flight transition without touching the camera
    pub fn cancel(&mut self) {
        self.state = None;
    }
}

impl Default for CameraTransitionController {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_DURATION)
    }
}
