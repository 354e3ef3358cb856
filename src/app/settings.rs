//! Settings sidebar - shading variant, point size, camera, lattice info.

use eframe::egui;

use super::{format_count, CloudApp, OrbitCamera};
use crate::core::Shading;
use crate::theme::colors;

impl CloudApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        let panel_width = ctx.screen_rect().width() * 0.18;
        egui::SidePanel::left("settings")
            .default_width(panel_width)
            .min_width(220.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, colors::TEXT_MUTED.gamma_multiply(0.6)))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Shading:").color(colors::TEXT_MUTED));

                    let mut shading = self.visual.shading();
                    ui.radio_value(&mut shading, Shading::default_gradient(), "Gradient");
                    ui.radio_value(&mut shading, Shading::HueCycle, "Hue cycle");
                    self.visual.set_shading(shading);
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Animation:").color(colors::TEXT_MUTED));

                    ui.checkbox(&mut self.paused, "Pause");

                    ui.add_space(4.0);
                    let size_label = format!("Point size: {:.1}px", self.point_size);
                    ui.label(egui::RichText::new(size_label).color(colors::TEXT_MUTED));
                    let full_width = ui.available_width();
                    ui.spacing_mut().slider_width = full_width;
                    let size_response = ui.add(
                        egui::Slider::new(&mut self.point_size, 0.5..=6.0)
                            .clamping(egui::SliderClamping::Always)
                            .show_value(false),
                    );
                    if size_response.double_clicked() {
                        self.point_size = 2.0;
                    }
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Camera:").color(colors::TEXT_MUTED));

                    ui.label(
                        egui::RichText::new(format!(
                            "yaw {:.2}  pitch {:.2}  dist {:.2}",
                            self.orbit.yaw, self.orbit.pitch, self.orbit.distance
                        ))
                        .color(colors::TEXT_SECONDARY),
                    );
                    if ui.button("Reset orbit").clicked() {
                        self.orbit = OrbitCamera::default();
                    }
                    ui.label(
                        egui::RichText::new("  Drag to orbit, scroll to zoom")
                            .color(colors::TEXT_MUTED)
                            .small(),
                    );
                });

                ui.add_space(8.0);

                // Lattice is construction-time only: changing it would mean
                // re-running the sampler, so it is shown read-only here.
                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Lattice:").color(colors::TEXT_MUTED));

                    let bounds = self.visual.bounds();
                    ui.label(
                        egui::RichText::new(format!(
                            "{}x{}x{} cells, limit {}",
                            bounds.width, bounds.height, bounds.depth,
                            self.visual.max_iterations()
                        ))
                        .color(colors::TEXT_SECONDARY),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} points in set",
                            format_count(self.visual.points().len())
                        ))
                        .color(colors::TEXT_SECONDARY),
                    );
                });
            });
    }
}
