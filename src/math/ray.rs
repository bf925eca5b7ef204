use glam::Vec3;

use super::AABB;

/// Half-line used for picking
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized on construction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Slab test result: distance along the ray and the normal of the face crossed
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AabbHit {
    pub t: f32,
    pub normal: Vec3,
}

pub fn intersect_aabb(ray: &Ray, aabb: &AABB) -> Option<AabbHit> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components are clamped so the slab bounds go to +-infinity instead of NaN
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray.direction.x), inv(ray.direction.y), inv(ray.direction.z));

    let t_min = (aabb.min - ray.origin) * inv_dir;
    let t_max = (aabb.max - ray.origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near >= 0.0 {
        let axis = largest_axis(t1);
        let normal = -axis_unit(axis) * ray.direction[axis].signum();
        Some(AabbHit { t: t_near, normal })
    } else if t_far > 0.001 {
        // Started inside: report the exit face
        let axis = smallest_axis(t2);
        let normal = axis_unit(axis) * ray.direction[axis].signum();
        Some(AabbHit { t: t_far, normal })
    } else {
        None
    }
}

fn largest_axis(v: Vec3) -> usize {
    if v.x >= v.y && v.x >= v.z {
        0
    } else if v.y >= v.z {
        1
    } else {
        2
    }
}

fn smallest_axis(v: Vec3) -> usize {
    if v.x <= v.y && v.x <= v.z {
        0
    } else if v.y <= v.z {
        1
    } else {
        2
    }
}

fn axis_unit(axis: usize) -> Vec3 {
    match axis {
        0 => Vec3::X,
        1 => Vec3::Y,
        _ => Vec3::Z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> AABB {
        AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_ray_new_normalizes() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.at(5.0) - Vec3::new(0.0, 3.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_intersect_aabb_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let aabb = AABB::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let hit = intersect_aabb(&ray, &aabb).unwrap();
        assert!((hit.t - 5.0).abs() < 0.01);
        assert_eq!(hit.normal, Vec3::NEG_X);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let aabb = AABB::new(Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0));
        assert!(intersect_aabb(&ray, &aabb).is_none());
    }

    #[test]
    fn test_intersect_aabb_top_face_normal() {
        let ray = Ray::new(Vec3::new(0.2, 5.0, -0.3), Vec3::NEG_Y);
        let hit = intersect_aabb(&ray, &unit_box()).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_intersect_aabb_inside_reports_exit_face() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = intersect_aabb(&ray, &unit_box()).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_intersect_aabb_pointing_away() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(intersect_aabb(&ray, &unit_box()).is_none());
    }
}
