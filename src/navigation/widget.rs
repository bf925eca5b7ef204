use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::cube::{CubeFace, NavigationCube};
use crate::camera::PerspectiveCamera;
use crate::math::Ray;
use crate::viewpoint::Viewpoint;

/// Bounding rectangle of the widget's canvas, in the same pixel space as pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    /// Pointer position to normalized device coordinates, y flipped to point up.
    /// None for a pointer outside the rect or an empty rect.
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 || !self.contains(x, y) {
            return None;
        }
        Some(Vec2::new(
            (x - self.left) / self.width * 2.0 - 1.0,
            -((y - self.top) / self.height) * 2.0 + 1.0,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Distance from the origin at which canonical views place the camera
    pub standoff_distance: f32,
    /// Side of the square widget canvas in logical pixels
    pub widget_size_px: f32,
    pub camera_position: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub cube_size: f32,
    pub label_offset: f32,
    pub label_scale: f32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            standoff_distance: 10.0,
            widget_size_px: 120.0,
            camera_position: Vec3::new(3.0, 3.0, 3.0),
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            cube_size: 1.8,
            label_offset: 1.0,
            label_scale: 0.8,
        }
    }
}

/// Miniature scene holding the navigation cube and its fixed camera.
/// Turns clicks on the cube into canonical viewpoint requests.
#[derive(Debug, Clone)]
pub struct NavigationWidget {
    camera: PerspectiveCamera,
    cube: NavigationCube,
    standoff_distance: f32,
    size_px: f32,
}

impl NavigationWidget {
    /// The widget canvas is square
    pub const ASPECT: f32 = 1.0;

    pub fn new(settings: &NavigationSettings) -> Self {
        let mut camera = PerspectiveCamera::new(
            settings.camera_position,
            settings.fov_degrees,
            settings.near,
            settings.far,
        );
        camera.look_at(Vec3::ZERO);

        Self {
            camera,
            cube: NavigationCube::new(
                settings.cube_size,
                settings.label_offset,
                settings.label_scale,
            ),
            standoff_distance: settings.standoff_distance,
            size_px: settings.widget_size_px,
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn cube(&self) -> &NavigationCube {
        &self.cube
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub fn standoff_distance(&self) -> f32 {
        self.standoff_distance
    }

    /// Click at `(pointer_x, pointer_y)` inside `rect`. Emits a viewpoint when the
    /// cube is struck; clicks on empty canvas emit nothing.
    pub fn handle_click(&self, pointer_x: f32, pointer_y: f32, rect: &CanvasRect) -> Option<Viewpoint> {
        let ndc = rect.to_ndc(pointer_x, pointer_y)?;
        let ray = self.camera.ray_through_ndc(ndc, Self::ASPECT);
        self.pick(&ray)
    }

    /// Viewpoint for the nearest face struck by `ray`
    pub fn pick(&self, ray: &Ray) -> Option<Viewpoint> {
        let hit = self.cube.intersect(ray)?;
        log::debug!("navigation cube: {:?} face picked at t={:.3}", hit.face, hit.t);
        Some(Viewpoint::new(hit.normal * self.standoff_distance, Vec3::ZERO))
    }

    /// Canonical viewpoint for a face without going through picking
    pub fn viewpoint_for(&self, face: CubeFace) -> Viewpoint {
        Viewpoint::new(face.normal() * self.standoff_distance, Vec3::ZERO)
    }
}
