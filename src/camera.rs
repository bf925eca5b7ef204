use glam::{Mat4, Vec2, Vec3};

use crate::math::Ray;

/// Perspective camera looking from `position` at `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees,
            near,
            far,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit view direction, or zero when position and target coincide
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let up = stable_up_vector(self.position, self.target, self.up);
        Mat4::look_at_rh(self.position, self.target, up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Pick ray from the eye through a point in normalized device coordinates
    /// (x right, y up, both in [-1, 1])
    pub fn ray_through_ndc(&self, ndc: Vec2, aspect: f32) -> Ray {
        let inverse = self.view_projection(aspect).inverse();
        let on_far_plane = inverse.project_point3(ndc.extend(1.0));
        Ray::new(self.position, on_far_plane - self.position)
    }

    /// World point to NDC; None when the point is behind the eye
    pub fn project_to_ndc(&self, point: Vec3, aspect: f32) -> Option<Vec3> {
        let clip = self.view_projection(aspect) * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

/// Up vector that stays usable when looking straight up or down.
/// Near the poles a horizontal axis replaces `up` so the view basis never collapses.
pub fn stable_up_vector(eye: Vec3, target: Vec3, up: Vec3) -> Vec3 {
    let dir = (target - eye).normalize_or_zero();
    if dir.cross(up).length_squared() > 1e-6 {
        return up;
    }
    if dir.y > 0.0 {
        Vec3::Z
    } else {
        Vec3::NEG_Z
    }
}
