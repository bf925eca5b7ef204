use glam::Vec3;

use crate::core::triangle_intersection::{nearest_hit, Triangle};
use crate::math::{intersect_aabb, Ray, AABB};

/// The six canonical view directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Top,
        CubeFace::Bottom,
    ];

    /// Outward unit normal (right-handed, +Y up, +Z towards the viewer)
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::Front => Vec3::Z,
            CubeFace::Back => Vec3::NEG_Z,
            CubeFace::Left => Vec3::NEG_X,
            CubeFace::Right => Vec3::X,
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CubeFace::Front => "F",
            CubeFace::Back => "B",
            CubeFace::Left => "L",
            CubeFace::Right => "R",
            CubeFace::Top => "T",
            CubeFace::Bottom => "Bt",
        }
    }

    /// In-plane axes (u, v) with u x v == normal, so quads built from them wind
    /// counter-clockwise when seen from outside
    fn tangents(self) -> (Vec3, Vec3) {
        match self {
            CubeFace::Front => (Vec3::X, Vec3::Y),
            CubeFace::Back => (Vec3::NEG_X, Vec3::Y),
            CubeFace::Left => (Vec3::Z, Vec3::Y),
            CubeFace::Right => (Vec3::NEG_Z, Vec3::Y),
            CubeFace::Top => (Vec3::X, Vec3::NEG_Z),
            CubeFace::Bottom => (Vec3::X, Vec3::Z),
        }
    }
}

/// Text marker floating just outside a face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLabel {
    pub face: CubeFace,
    pub text: &'static str,
    pub position: Vec3,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeHit {
    pub face: CubeFace,
    /// World-space outward normal of the struck face
    pub normal: Vec3,
    pub t: f32,
    pub point: Vec3,
}

/// Static cube mesh centered at the origin: two triangles per face, each tagged
/// with its face, plus the edge outline and face labels used for drawing
#[derive(Debug, Clone)]
pub struct NavigationCube {
    bounds: AABB,
    triangles: Vec<Triangle>,
    triangle_faces: Vec<CubeFace>,
    edges: Vec<[Vec3; 2]>,
    labels: Vec<FaceLabel>,
}

impl NavigationCube {
    pub fn new(size: f32, label_offset: f32, label_scale: f32) -> Self {
        let half = size * 0.5;

        let mut triangles = Vec::with_capacity(12);
        let mut triangle_faces = Vec::with_capacity(12);
        for face in CubeFace::ALL {
            let [a, b, c, d] = face_quad(face, half);
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
            triangle_faces.extend([face, face]);
        }

        let labels = CubeFace::ALL
            .iter()
            .map(|&face| FaceLabel {
                face,
                text: face.label(),
                position: face.normal() * label_offset,
                scale: label_scale,
            })
            .collect();

        Self {
            bounds: AABB::from_center(Vec3::ZERO, Vec3::splat(half)),
            triangles,
            triangle_faces,
            edges: cube_edges(half),
            labels,
        }
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn edges(&self) -> &[[Vec3; 2]] {
        &self.edges
    }

    pub fn labels(&self) -> &[FaceLabel] {
        &self.labels
    }

    /// Corners of one face, counter-clockwise from outside
    pub fn face_quad(&self, face: CubeFace) -> [Vec3; 4] {
        face_quad(face, self.bounds.max.x)
    }

    /// Nearest face struck by the ray. Outline and labels are not pickable.
    pub fn intersect(&self, ray: &Ray) -> Option<CubeHit> {
        intersect_aabb(ray, &self.bounds)?;

        let (idx, hit) = nearest_hit(ray, &self.triangles)?;
        let face = self.triangle_faces[idx];
        Some(CubeHit {
            face,
            normal: face.normal(),
            t: hit.t,
            point: ray.at(hit.t),
        })
    }
}

fn face_quad(face: CubeFace, half: f32) -> [Vec3; 4] {
    let center = face.normal() * half;
    let (u, v) = face.tangents();
    let (u, v) = (u * half, v * half);
    [center - u - v, center + u - v, center + u + v, center - u + v]
}

/// The 12 corner pairs that differ along exactly one axis
fn cube_edges(half: f32) -> Vec<[Vec3; 2]> {
    let corner = |bits: u32| {
        Vec3::new(
            if bits & 1 == 0 { -half } else { half },
            if bits & 2 == 0 { -half } else { half },
            if bits & 4 == 0 { -half } else { half },
        )
    };

    let mut edges = Vec::with_capacity(12);
    for a in 0..8u32 {
        for b in (a + 1)..8 {
            if (a ^ b).count_ones() == 1 {
                edges.push([corner(a), corner(b)]);
            }
        }
    }
    edges
}
