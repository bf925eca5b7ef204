//! egui drawing for the viewer window: the model, the navigation cube, the
//! controls help and the project slider.

pub mod nav_cube_view;
pub mod overlay;
pub mod scene_view;

use std::time::Duration;

use glam::Vec3;

use crate::loaders::LoadedModel;
use crate::projects::ProjectList;
use crate::viewer::Viewer;
use crate::viewpoint::Viewpoint;

pub use overlay::ProjectStep;

/// NDC (x right, y up) to a screen position inside `rect`
pub fn ndc_to_screen(ndc: Vec3, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        rect.left() + (ndc.x + 1.0) * 0.5 * rect.width(),
        rect.top() + (1.0 - ndc.y) * 0.5 * rect.height(),
    )
}

/// What the user asked for during one UI pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiOutput {
    /// Area left for the model after panels
    pub scene_rect: egui::Rect,
    pub clicked_view: Option<Viewpoint>,
    pub project_step: ProjectStep,
}

pub fn draw_frame(
    ctx: &egui::Context,
    viewer: &mut Viewer,
    model: &LoadedModel,
    projects: &ProjectList,
    show_overlays: bool,
    now: Duration,
) -> UiOutput {
    let mut project_step = ProjectStep::Stay;
    let mut slider_height = 0.0;
    if show_overlays && !projects.is_empty() {
        let (step, height) = overlay::project_slider(ctx, projects);
        project_step = step;
        slider_height = height;
    }

    let scene_rect = ctx.available_rect();
    let mesh = scene_view::build_scene_mesh(
        viewer.camera(),
        &model.mesh().triangles,
        scene_rect,
        scene_view::model_color(model),
    );
    ctx.layer_painter(egui::LayerId::background())
        .add(egui::Shape::mesh(mesh));

    let clicked_view = nav_cube_view::show(ctx, viewer, now);

    if show_overlays {
        overlay::help(ctx, slider_height);
    }

    UiOutput {
        scene_rect,
        clicked_view,
        project_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_map_to_rect_corners() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        assert_eq!(ndc_to_screen(Vec3::new(-1.0, 1.0, 0.0), rect), rect.left_top());
        assert_eq!(ndc_to_screen(Vec3::new(1.0, -1.0, 0.0), rect), rect.right_bottom());
        assert_eq!(ndc_to_screen(Vec3::ZERO, rect), rect.center());
    }
}
