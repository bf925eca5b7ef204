use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{stable_up_vector, PerspectiveCamera};

/// Keeps the polar angle off the poles so the orbit basis never degenerates
const POLAR_EPSILON: f32 = 1e-6;
/// Per-unit-of-wheel zoom factor
const ZOOM_STEP: f32 = 0.95;
/// Residual motion below this is treated as settled
const SETTLE_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.5,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 1.0,
            max_distance: 50.0,
        }
    }
}

/// Interactive orbit around a target point.
///
/// Pointer input is accumulated and applied by `update`, once per frame.
/// The orbit itself is re-derived from the camera every update, so external
/// writes to the camera pose are picked up as long as `sync` is called to drop
/// momentum that was built up against the old pose.
#[derive(Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    settings: OrbitSettings,
    azimuth_delta: f32,
    polar_delta: f32,
    pan_offset: Vec3,
    zoom_scale: f32,
}

impl OrbitController {
    pub fn new(settings: OrbitSettings, target: Vec3) -> Self {
        Self {
            target,
            settings,
            azimuth_delta: 0.0,
            polar_delta: 0.0,
            pan_offset: Vec3::ZERO,
            zoom_scale: 1.0,
        }
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    /// Drag by a pointer delta in pixels; a full viewport height is one turn
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.azimuth_delta -= TAU * dx / viewport_height * self.settings.rotate_speed;
        self.polar_delta -= TAU * dy / viewport_height * self.settings.rotate_speed;
    }

    /// Screen-space pan; the point under the cursor follows the pointer at the target's depth
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32, camera: &PerspectiveCamera) {
        if viewport_height <= 0.0 {
            return;
        }
        let forward = (self.target - camera.position).normalize_or_zero();
        let up = stable_up_vector(camera.position, self.target, camera.up);
        let right = forward.cross(up).normalize_or_zero();
        let screen_up = right.cross(forward);

        let half_height = camera.position.distance(self.target)
            * (camera.fov_y_degrees.to_radians() * 0.5).tan();
        let units_per_pixel = 2.0 * half_height / viewport_height * self.settings.pan_speed;

        self.pan_offset += -right * dx * units_per_pixel + screen_up * dy * units_per_pixel;
    }

    /// Positive deltas (wheel up) move closer
    pub fn zoom(&mut self, wheel_delta: f32) {
        self.zoom_scale *= ZOOM_STEP.powf(self.settings.zoom_speed * wheel_delta);
    }

    pub fn has_pending_motion(&self) -> bool {
        self.azimuth_delta.abs() > SETTLE_EPSILON
            || self.polar_delta.abs() > SETTLE_EPSILON
            || self.pan_offset.length_squared() > SETTLE_EPSILON * SETTLE_EPSILON
            || (self.zoom_scale - 1.0).abs() > SETTLE_EPSILON
    }

    /// Apply pending motion to the camera. Returns false, without touching the
    /// camera, when there is nothing to apply.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if !self.has_pending_motion() {
            self.clear_motion();
            return false;
        }

        let step = if self.settings.enable_damping {
            self.settings.damping_factor
        } else {
            1.0
        };

        let (radius, azimuth, polar) = to_spherical(camera.position - self.target);
        let azimuth = azimuth + self.azimuth_delta * step;
        let polar = (polar + self.polar_delta * step).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        let radius = (radius * self.zoom_scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);

        self.target += self.pan_offset * step;
        camera.position = self.target + from_spherical(radius, azimuth, polar);
        camera.look_at(self.target);

        if self.settings.enable_damping {
            let decay = 1.0 - step;
            self.azimuth_delta *= decay;
            self.polar_delta *= decay;
            self.pan_offset *= decay;
        } else {
            self.azimuth_delta = 0.0;
            self.polar_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.zoom_scale = 1.0;

        true
    }

    /// Adopt the camera's current look-at point and drop any pending or residual motion
    pub fn sync(&mut self, camera: &PerspectiveCamera) {
        self.target = camera.target;
        self.clear_motion();
    }

    fn clear_motion(&mut self) {
        self.azimuth_delta = 0.0;
        self.polar_delta = 0.0;
        self.pan_offset = Vec3::ZERO;
        self.zoom_scale = 1.0;
    }
}

/// (radius, azimuth about +Y measured from +Z, polar angle from +Y)
fn to_spherical(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let azimuth = offset.x.atan2(offset.z);
    let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
    (radius, azimuth, polar)
}

fn from_spherical(radius: f32, azimuth: f32, polar: f32) -> Vec3 {
    let sin_polar = polar.sin();
    Vec3::new(
        radius * sin_polar * azimuth.sin(),
        radius * polar.cos(),
        radius * sin_polar * azimuth.cos(),
    )
}
