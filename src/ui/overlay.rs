use egui::{Align2, Color32, CornerRadius, Margin, RichText};

use crate::projects::ProjectList;

/// Requested move in the project list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStep {
    Stay,
    Previous,
    Next,
}

const HELP_LINES: [&str; 4] = [
    "Left click + drag to rotate",
    "Right click + drag to pan",
    "Scroll to zoom",
    "Click a cube face to snap the view",
];

/// Controls help in the bottom-left corner, above the project slider
pub fn help(ctx: &egui::Context, bottom_inset: f32) {
    egui::Area::new(egui::Id::new("controls_help"))
        .anchor(Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0 - bottom_inset))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(Color32::from_black_alpha(178))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::symmetric(16, 12))
                .show(ui, |ui| {
                    ui.label(RichText::new("Controls:").strong().color(Color32::WHITE));
                    for line in HELP_LINES {
                        ui.label(RichText::new(format!("• {}", line)).color(Color32::from_gray(204)));
                    }
                });
        });
}

/// Bottom panel with previous/next buttons, progress bar, project name and format.
/// Returns the requested step and the panel height.
pub fn project_slider(ctx: &egui::Context, projects: &ProjectList) -> (ProjectStep, f32) {
    let mut step = ProjectStep::Stay;

    let panel = egui::TopBottomPanel::bottom("project_slider")
        .frame(
            egui::Frame::new()
                .fill(Color32::BLACK)
                .inner_margin(Margin::symmetric(32, 16)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(projects.has_previous(), egui::Button::new("<"))
                    .on_hover_text("Previous project")
                    .clicked()
                {
                    step = ProjectStep::Previous;
                }

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        let bar_width = (ui.available_width() - 120.0).max(40.0);
                        ui.add(
                            egui::ProgressBar::new(projects.progress())
                                .desired_width(bar_width)
                                .desired_height(4.0),
                        );
                        ui.label(RichText::new(projects.position()).color(Color32::WHITE));
                    });
                    if let Some(project) = projects.current() {
                        ui.label(RichText::new(&project.name).heading().color(Color32::WHITE));
                        ui.label(RichText::new(project.format_label()).small().color(Color32::from_gray(153)));
                    }
                });

                if ui
                    .add_enabled(projects.has_next(), egui::Button::new(">"))
                    .on_hover_text("Next project")
                    .clicked()
                {
                    step = ProjectStep::Next;
                }
            });
        });

    (step, panel.response.rect.height())
}
