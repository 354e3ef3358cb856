//! Performance overlay - fps, frame time, and a frame-time sparkline.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use super::{format_count, CloudApp};
use crate::theme::colors;

impl CloudApp {
    pub(crate) fn draw_overlay(&self, ctx: &egui::Context) {
        let last_ms = self.frame_times.last().copied().unwrap_or(0.0);

        egui::Area::new(egui::Id::new("perf_overlay"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 36.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 20, 200))
                    .corner_radius(4.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_min_width(220.0);

                        ui.label(
                            egui::RichText::new(format!(
                                "{:.0} fps  {:.2} ms",
                                self.fps_counter.fps(),
                                last_ms
                            ))
                            .color(colors::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "{} points",
                                format_count(self.visual.points().len())
                            ))
                            .color(colors::TEXT_MUTED),
                        );

                        let y_max = self
                            .frame_times
                            .iter()
                            .cloned()
                            .fold(16.7f32, f32::max);

                        Plot::new("frame_times")
                            .height(48.0)
                            .show_axes([false, false])
                            .show_grid(false)
                            .allow_zoom(false)
                            .allow_drag(false)
                            .allow_scroll(false)
                            .show_background(false)
                            .include_x(0.0)
                            .include_x(self.frame_times.len().max(2) as f64)
                            .include_y(0.0)
                            .include_y(y_max as f64 * 1.1)
                            .show(ui, |plot_ui| {
                                if self.frame_times.len() < 2 {
                                    return;
                                }
                                let points: PlotPoints = self
                                    .frame_times
                                    .iter()
                                    .enumerate()
                                    .map(|(x, &ms)| [x as f64, ms as f64])
                                    .collect();
                                let color = egui::Color32::from_rgba_unmultiplied(
                                    255, 255, 255, 180,
                                );
                                plot_ui.line(Line::new(points).color(color).width(1.0));
                            });
                    });
            });
    }
}
