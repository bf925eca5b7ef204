use egui::{Color32, Mesh, Rect};
use glam::Vec3;

use super::ndc_to_screen;
use crate::camera::PerspectiveCamera;
use crate::core::triangle_intersection::Triangle;
use crate::loaders::LoadedModel;

const MODEL_COLOR: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
const PLACEHOLDER_COLOR: Color32 = Color32::from_rgb(0xff, 0x6b, 0x6b);
const AMBIENT: f32 = 0.3;

pub fn model_color(model: &LoadedModel) -> Color32 {
    if model.is_placeholder() {
        PLACEHOLDER_COLOR
    } else {
        MODEL_COLOR
    }
}

/// Flat shaded, back-face culled triangles for the egui background layer.
///
/// Triangles are emitted far to near so egui's in-order painting resolves
/// visibility without a depth buffer. Light comes from the camera.
pub fn build_scene_mesh(
    camera: &PerspectiveCamera,
    triangles: &[Triangle],
    rect: Rect,
    color: Color32,
) -> Mesh {
    let mut mesh = Mesh::default();
    // A camera sitting on its target has no view direction
    if rect.width() <= 0.0 || rect.height() <= 0.0 || camera.forward() == Vec3::ZERO {
        return mesh;
    }

    let aspect = rect.width() / rect.height();
    let view_projection = camera.view_projection(aspect);

    let mut visible: Vec<(f32, [egui::Pos2; 3], Color32)> = triangles
        .iter()
        .filter_map(|tri| {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero();
            let to_eye = camera.position - tri[0];
            if normal == Vec3::ZERO || normal.dot(to_eye) <= 0.0 {
                return None;
            }

            let mut screen = [egui::Pos2::ZERO; 3];
            let mut depth = 0.0;
            for (out, v) in screen.iter_mut().zip(tri) {
                let clip = view_projection * v.extend(1.0);
                if clip.w <= camera.near {
                    return None;
                }
                *out = ndc_to_screen(clip.truncate() / clip.w, rect);
                depth += clip.w;
            }

            let lambert = normal.dot(to_eye.normalize_or_zero()).max(0.0);
            Some((depth, screen, shade(color, AMBIENT + (1.0 - AMBIENT) * lambert)))
        })
        .collect();

    visible.sort_by(|a, b| b.0.total_cmp(&a.0));

    mesh.reserve_triangles(visible.len());
    mesh.reserve_vertices(visible.len() * 3);
    for (_, points, color) in visible {
        let base = mesh.vertices.len() as u32;
        for p in points {
            mesh.colored_vertex(p, color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    mesh
}

fn shade(color: Color32, intensity: f32) -> Color32 {
    let k = intensity.clamp(0.0, 1.0);
    Color32::from_rgb(
        (color.r() as f32 * k) as u8,
        (color.g() as f32 * k) as u8,
        (color.b() as f32 * k) as u8,
    )
}
