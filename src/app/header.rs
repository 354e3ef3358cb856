//! Header bar with controls and status.

use eframe::egui;

use super::{format_count, CloudApp};
use crate::theme::colors;
use crate::time::now_seconds;

impl CloudApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        ui.horizontal(|ui| {
            // LEFT: panel toggles
            let settings_text = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
            if ui.button(egui::RichText::new(settings_text)).clicked() {
                self.show_settings = !self.show_settings;
            }

            ui.add_space(10.0);

            if ui
                .selectable_label(self.show_overlay, egui::RichText::new("Perf"))
                .clicked()
            {
                self.show_overlay = !self.show_overlay;
            }

            if self.paused {
                ui.add_space(10.0);
                ui.label(egui::RichText::new("paused").color(colors::TEXT_MUTED));
            }

            // RIGHT: stats (right-to-left order)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let bounds = self.visual.bounds();
                ui.label(
                    egui::RichText::new(self.visual.shading().label())
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!("iter {}", self.visual.max_iterations()))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!(
                        "{}x{}x{}",
                        bounds.width, bounds.height, bounds.depth
                    ))
                    .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!(
                        "{} points",
                        format_count(self.visual.points().len())
                    ))
                    .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );
            });
        });
    }
}

/// FPS counter over a sliding 60-frame window.
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        let now = now_seconds() * 1000.0;
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frames.len() < 2 {
            return 0.0;
        }
        let elapsed = self.frames.last().unwrap() - self.frames.first().unwrap();
        if elapsed == 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
