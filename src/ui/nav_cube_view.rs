use std::time::Duration;

use egui::{Align2, Color32, CornerRadius, FontId, Margin, Sense, Shape, Stroke};
use glam::Vec3;

use super::ndc_to_screen;
use crate::navigation::{CanvasRect, CubeFace, NavigationWidget};
use crate::viewer::Viewer;
use crate::viewpoint::Viewpoint;

const FACE_COLOR: Color32 = Color32::from_rgba_premultiplied(0xd1, 0xd1, 0xd1, 0xe6);
const EDGE_STROKE: Stroke = Stroke {
    width: 2.0,
    color: Color32::BLACK,
};
const LABEL_COLOR: Color32 = Color32::from_gray(0x30);
const LABEL_POINTS: f32 = 24.0;
const SCREEN_MARGIN: f32 = 16.0;

/// Faces turned towards the widget camera, farthest first
pub fn visible_faces(widget: &NavigationWidget) -> Vec<CubeFace> {
    let eye = widget.camera().position;
    let half = widget.cube().bounds().max.x;

    let mut faces: Vec<(f32, CubeFace)> = CubeFace::ALL
        .iter()
        .filter_map(|&face| {
            let center = face.normal() * half;
            (face.normal().dot(eye - center) > 0.0).then(|| (eye.distance(center), face))
        })
        .collect();
    faces.sort_by(|a, b| b.0.total_cmp(&a.0));
    faces.into_iter().map(|(_, face)| face).collect()
}

/// Draws the cube in a fixed square at the top-right corner and forwards
/// clicks on it to the viewer
pub fn show(ctx: &egui::Context, viewer: &mut Viewer, now: Duration) -> Option<Viewpoint> {
    let size = viewer.widget().size_px();

    egui::Area::new(egui::Id::new("navigation_cube"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-SCREEN_MARGIN, SCREEN_MARGIN))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(Color32::from_white_alpha(26))
                .stroke(Stroke::new(1.0, Color32::from_white_alpha(51)))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::Vec2::splat(size), Sense::click());
                    paint_cube(&ui.painter_at(rect), viewer.widget(), rect);

                    if !response.clicked() {
                        return None;
                    }
                    let pointer = response.interact_pointer_pos()?;
                    let canvas = CanvasRect::new(rect.left(), rect.top(), rect.width(), rect.height());
                    viewer.click_widget(pointer.x, pointer.y, &canvas, now)
                })
                .inner
        })
        .inner
}

fn paint_cube(painter: &egui::Painter, widget: &NavigationWidget, rect: egui::Rect) {
    let camera = widget.camera();
    let cube = widget.cube();
    let half = cube.bounds().max.x;
    let project = |p: Vec3| {
        camera
            .project_to_ndc(p, NavigationWidget::ASPECT)
            .map(|ndc| ndc_to_screen(ndc, rect))
    };

    let faces = visible_faces(widget);

    for &face in &faces {
        let corners: Option<Vec<egui::Pos2>> = cube.face_quad(face).into_iter().map(&project).collect();
        if let Some(points) = corners {
            painter.add(Shape::convex_polygon(points, FACE_COLOR, Stroke::NONE));
        }
    }

    for [a, b] in cube.edges() {
        let mid = (*a + *b) * 0.5;
        let borders_visible = faces
            .iter()
            .any(|face| (mid.dot(face.normal()) - half).abs() < 1e-4);
        if let (true, Some(a), Some(b)) = (borders_visible, project(*a), project(*b)) {
            painter.line_segment([a, b], EDGE_STROKE);
        }
    }

    for label in cube.labels().iter().filter(|l| faces.contains(&l.face)) {
        if let Some(pos) = project(label.position) {
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                label.text,
                FontId::proportional(LABEL_POINTS * label.scale),
                LABEL_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationSettings;

    #[test]
    fn default_widget_shows_front_right_top() {
        let widget = NavigationWidget::new(&NavigationSettings::default());
        let mut faces = visible_faces(&widget);
        assert_eq!(faces.len(), 3);
        faces.sort_by_key(|f| f.label());
        assert_eq!(faces, vec![CubeFace::Front, CubeFace::Right, CubeFace::Top]);
    }

    #[test]
    fn head_on_camera_sees_one_face() {
        let settings = NavigationSettings {
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            ..NavigationSettings::default()
        };
        let widget = NavigationWidget::new(&settings);
        assert_eq!(visible_faces(&widget), vec![CubeFace::Front]);
    }
}
