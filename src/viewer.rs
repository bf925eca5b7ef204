use std::time::Duration;

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::ViewerConfig;
use crate::navigation::{CanvasRect, NavigationWidget};
use crate::rig::CameraRig;
use crate::transition::{CameraTransitionController, TransitionUpdate};
use crate::viewpoint::Viewpoint;

/// Which component wrote the primary camera pose during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseWriter {
    None,
    Orbit,
    Transition,
}

/// Navigation widget, primary camera rig and transition controller wired together.
///
/// The rig has exactly one writer per frame: the transition controller while a
/// transition is in flight, the orbit controller otherwise. Pointer input that
/// arrives during a transition is dropped rather than queued.
pub struct Viewer {
    widget: NavigationWidget,
    rig: CameraRig,
    transition: CameraTransitionController,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        let mut camera = PerspectiveCamera::new(
            config.camera.position,
            config.camera.fov_degrees,
            config.camera.near,
            config.camera.far,
        );
        camera.look_at(Vec3::ZERO);

        Self {
            widget: NavigationWidget::new(&config.navigation),
            rig: CameraRig::new(camera, config.orbit),
            transition: CameraTransitionController::new(config.transition.duration()),
        }
    }

    pub fn widget(&self) -> &NavigationWidget {
        &self.widget
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.rig.camera
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn transition(&self) -> &CameraTransitionController {
        &self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    /// Click inside the navigation widget. A struck face starts a transition.
    pub fn click_widget(
        &mut self,
        pointer_x: f32,
        pointer_y: f32,
        rect: &CanvasRect,
        now: Duration,
    ) -> Option<Viewpoint> {
        let viewpoint = self.widget.handle_click(pointer_x, pointer_y, rect)?;
        self.request_view(viewpoint, now);
        Some(viewpoint)
    }

    pub fn request_view(&mut self, viewpoint: Viewpoint, now: Duration) {
        self.transition.begin(viewpoint, &self.rig, now);
    }

    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if self.accepts_input() {
            self.rig.orbit.rotate(dx, dy, viewport_height);
        }
    }

    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if self.accepts_input() {
            let camera = self.rig.camera;
            self.rig.orbit.pan(dx, dy, viewport_height, &camera);
        }
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        if self.accepts_input() {
            self.rig.orbit.zoom(wheel_delta);
        }
    }

    /// Per-frame update. Returns which component wrote the camera.
    pub fn frame(&mut self, now: Duration) -> PoseWriter {
        match self.transition.update(now, &mut self.rig) {
            TransitionUpdate::InProgress | TransitionUpdate::Completed => PoseWriter::Transition,
            TransitionUpdate::Idle => {
                if self.rig.orbit.update(&mut self.rig.camera) {
                    PoseWriter::Orbit
                } else {
                    PoseWriter::None
                }
            }
        }
    }

    /// Cancel any transition and place the camera at a fresh pose
    pub fn reset(&mut self, position: Vec3, target: Vec3) {
        self.transition.cancel();
        self.rig.set_pose(position, target);
    }

    fn accepts_input(&self) -> bool {
        if self.transition.is_active() {
            log::trace!("pointer input dropped during camera transition");
            return false;
        }
        true
    }
}
