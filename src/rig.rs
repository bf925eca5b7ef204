use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::orbit::{OrbitController, OrbitSettings};

/// The primary camera together with the orbit controller that drives it.
///
/// Both the orbit controller and the transition controller write the camera
/// pose, but never in the same frame; see [`Viewer::frame`](crate::viewer::Viewer::frame).
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub camera: PerspectiveCamera,
    pub orbit: OrbitController,
}

impl CameraRig {
    pub fn new(camera: PerspectiveCamera, orbit_settings: OrbitSettings) -> Self {
        let orbit = OrbitController::new(orbit_settings, camera.target);
        Self { camera, orbit }
    }

    pub fn position(&self) -> Vec3 {
        self.camera.position
    }

    /// Orbit pivot, which is also the point the camera looks at
    pub fn target(&self) -> Vec3 {
        self.orbit.target
    }

    /// Write a pose from outside the orbit controller and resynchronize it
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.camera.position = position;
        self.camera.look_at(target);
        self.orbit.sync(&self.camera);
    }
}
