use glam::Vec3;

use crate::math::Ray;

/// Triangle as three world-space corners, counter-clockwise seen from the front
pub type Triangle = [Vec3; 3];

/// Result of triangle intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleIntersection {
    pub t: f32,       // Distance along ray
    pub u: f32,       // Barycentric coordinate u
    pub v: f32,       // Barycentric coordinate v
    pub normal: Vec3, // Geometric normal (counter-clockwise winding)
}

impl TriangleIntersection {
    /// Get barycentric coordinates (u, v, w) where w = 1 - u - v
    pub fn barycentric(&self) -> (f32, f32, f32) {
        (self.u, self.v, 1.0 - self.u - self.v)
    }
}

/// Möller-Trumbore ray-triangle intersection. Both sides of the triangle are hit.
pub fn moller_trumbore_intersect(ray: &Ray, triangle: &Triangle) -> Option<TriangleIntersection> {
    const EPSILON: f32 = 1e-6;

    let [v0, v1, v2] = *triangle;
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    // Behind origin
    if t < EPSILON {
        return None;
    }

    let normal = edge1.cross(edge2).normalize();

    Some(TriangleIntersection { t, u, v, normal })
}

/// Closest hit over a triangle list. On equal distance the earlier triangle wins.
pub fn nearest_hit(ray: &Ray, triangles: &[Triangle]) -> Option<(usize, TriangleIntersection)> {
    let mut closest: Option<(usize, TriangleIntersection)> = None;

    for (idx, triangle) in triangles.iter().enumerate() {
        if let Some(hit) = moller_trumbore_intersect(ray, triangle) {
            match closest {
                Some((_, best)) if best.t <= hit.t => {}
                _ => closest = Some((idx, hit)),
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle(z: f32) -> Triangle {
        [
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
        ]
    }

    #[test]
    fn test_hit_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = moller_trumbore_intersect(&ray, &xy_triangle(0.0)).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-6);
        let (u, v, w) = hit.barycentric();
        assert!((u + v + w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hit_back_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(moller_trumbore_intersect(&ray, &xy_triangle(0.0)).is_some());
    }

    #[test]
    fn test_miss_outside() {
        let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(moller_trumbore_intersect(&ray, &xy_triangle(0.0)).is_none());
    }

    #[test]
    fn test_miss_parallel() {
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
        assert!(moller_trumbore_intersect(&ray, &xy_triangle(0.0)).is_none());
    }

    #[test]
    fn test_miss_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(moller_trumbore_intersect(&ray, &xy_triangle(0.0)).is_none());
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let triangles = [xy_triangle(-2.0), xy_triangle(1.0), xy_triangle(0.0)];
        let (idx, hit) = nearest_hit(&ray, &triangles).unwrap();
        assert_eq!(idx, 1);
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_tie_keeps_first() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let triangles = [xy_triangle(0.0), xy_triangle(0.0)];
        let (idx, _) = nearest_hit(&ray, &triangles).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_nearest_hit_empty() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(nearest_hit(&ray, &[]).is_none());
    }
}
