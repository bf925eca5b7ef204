//! Model loading. `load_model` never fails: anything it cannot read becomes a
//! placeholder cube so the viewer always has something to show.

pub mod gltf;
pub mod stl;

use std::path::Path;

use glam::Vec3;

use crate::core::triangle_intersection::Triangle;
use crate::math::AABB;

pub use self::gltf::load_gltf_triangles;
pub use self::stl::{load_stl_triangles, parse_stl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Stl,
    Gltf,
    Step,
}

impl ModelFormat {
    /// Detect by file extension, case-insensitive
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            "gltf" | "glb" => Some(Self::Gltf),
            "step" | "stp" => Some(Self::Step),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stl => "STL",
            Self::Gltf => "glTF",
            Self::Step => "STEP",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelMesh {
    pub triangles: Vec<Triangle>,
    pub bounds: AABB,
}

impl ModelMesh {
    /// None for an empty triangle list
    pub fn new(triangles: Vec<Triangle>) -> Option<Self> {
        let bounds = AABB::from_points(triangles.iter().flatten().copied())?;
        Some(Self { triangles, bounds })
    }

    /// Same mesh translated so its bounds are centered on the origin
    pub fn recentered(self) -> Self {
        let offset = self.bounds.center();
        Self {
            triangles: self
                .triangles
                .into_iter()
                .map(|tri| tri.map(|v| v - offset))
                .collect(),
            bounds: AABB::new(self.bounds.min - offset, self.bounds.max - offset),
        }
    }

    /// Unit cube centered at the origin
    pub fn unit_cube() -> Self {
        let corner = |x: f32, y: f32, z: f32| Vec3::new(x, y, z) * 0.5;
        let quads = [
            [corner(-1., -1., 1.), corner(1., -1., 1.), corner(1., 1., 1.), corner(-1., 1., 1.)],
            [corner(1., -1., -1.), corner(-1., -1., -1.), corner(-1., 1., -1.), corner(1., 1., -1.)],
            [corner(1., -1., 1.), corner(1., -1., -1.), corner(1., 1., -1.), corner(1., 1., 1.)],
            [corner(-1., -1., -1.), corner(-1., -1., 1.), corner(-1., 1., 1.), corner(-1., 1., -1.)],
            [corner(-1., 1., 1.), corner(1., 1., 1.), corner(1., 1., -1.), corner(-1., 1., -1.)],
            [corner(-1., -1., -1.), corner(1., -1., -1.), corner(1., -1., 1.), corner(-1., -1., 1.)],
        ];
        let triangles = quads
            .iter()
            .flat_map(|[a, b, c, d]| [[*a, *b, *c], [*a, *c, *d]])
            .collect();
        Self {
            triangles,
            bounds: AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
        }
    }
}

/// What the viewer ended up with for a project
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedModel {
    Geometry(ModelMesh),
    /// Stand-in shown when the file is missing, unreadable, empty or unsupported
    Placeholder(ModelMesh),
}

impl LoadedModel {
    pub fn mesh(&self) -> &ModelMesh {
        match self {
            Self::Geometry(mesh) | Self::Placeholder(mesh) => mesh,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Move the geometry so its bounds are centered on the origin, where canonical views look
    pub fn recentered(self) -> Self {
        match self {
            Self::Geometry(mesh) => Self::Geometry(mesh.recentered()),
            Self::Placeholder(mesh) => Self::Placeholder(mesh.recentered()),
        }
    }
}

/// Load any supported model, falling back to the placeholder cube on failure
pub fn load_model(path: impl AsRef<Path>) -> LoadedModel {
    let path = path.as_ref();

    let triangles = match ModelFormat::from_path(path) {
        Some(ModelFormat::Stl) => load_stl_triangles(path),
        Some(ModelFormat::Gltf) => load_gltf_triangles(path),
        Some(ModelFormat::Step) => {
            log::warn!("STEP files require conversion to STL or glTF, showing placeholder for {:?}", path);
            return LoadedModel::Placeholder(ModelMesh::unit_cube());
        }
        None => {
            log::warn!("Unknown model format: {:?}", path);
            return LoadedModel::Placeholder(ModelMesh::unit_cube());
        }
    };

    match triangles {
        Ok(triangles) => match ModelMesh::new(triangles) {
            Some(mesh) => {
                log::info!("Loaded {:?}: {} triangles", path, mesh.triangles.len());
                LoadedModel::Geometry(mesh)
            }
            None => {
                log::warn!("Model {:?} has no triangles", path);
                LoadedModel::Placeholder(ModelMesh::unit_cube())
            }
        },
        Err(e) => {
            log::error!("{:#}", e);
            LoadedModel::Placeholder(ModelMesh::unit_cube())
        }
    }
}
