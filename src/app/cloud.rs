//! CPU point-cloud projection and painting.
//!
//! Rotates the sampled lattice by the visual's coupled angle composed with
//! the orbit camera, perspective-projects, and paints one filled circle per
//! point. Point sprites are order-independent, so no depth sort is needed.

use eframe::egui;
use glam::{EulerRot, Mat3, Vec3};

use super::{CloudApp, OrbitCamera};
use crate::theme::colors;

/// Reference scene scales the cloud by 1/150 before rendering.
const MODEL_SCALE: f32 = 1.0 / 150.0;
/// Reference camera vertical field of view, degrees.
const FOV_Y: f32 = 50.0;
/// Points closer than this to the eye are culled.
const NEAR: f32 = 0.05;

impl CloudApp {
    pub(crate) fn render_cloud(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::SCENE_BG);

        // Orbit controls: drag rotates, scroll zooms, double-click resets
        if response.dragged() {
            let delta = response.drag_delta();
            self.orbit.yaw += delta.x * 0.01;
            self.orbit.pitch = (self.orbit.pitch + delta.y * 0.01)
                .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
        }
        if response.double_clicked() {
            self.orbit = OrbitCamera::default();
        }
        if response.hovered() {
            let scroll = ui.ctx().input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.orbit.distance = (self.orbit.distance * (1.0 - scroll * 0.002))
                    .clamp(0.3, 20.0);
            }
        }

        let [rx, ry, rz] = self.visual.rotation();
        let model = Mat3::from_euler(EulerRot::XYZ, rx, ry, rz);
        let view = Mat3::from_rotation_x(self.orbit.pitch) * Mat3::from_rotation_y(self.orbit.yaw);
        let rot = view * model;

        let focal = 0.5 * rect.height() / (0.5 * FOV_Y.to_radians()).tan();
        let center = rect.center();

        let mut shapes = Vec::with_capacity(self.visual.points().len());
        for &point in self.visual.points().iter() {
            let q = rot * (Vec3::from(point) * MODEL_SCALE);
            let depth = self.orbit.distance - q.z;
            if depth <= NEAR {
                continue;
            }

            let scale = focal / depth;
            let pos = center + egui::vec2(q.x * scale, -q.y * scale);
            if !rect.contains(pos) {
                continue;
            }

            // Shrink with distance, matching a fixed-size screen sprite at
            // the nominal camera distance
            let radius = (0.5 * self.point_size * self.orbit.distance / depth).clamp(0.5, 8.0);

            let [r, g, b] = self.visual.point_color(point);
            let color = egui::Color32::from_rgb(
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8,
            );
            shapes.push(egui::Shape::circle_filled(pos, radius, color));
        }
        painter.extend(shapes);
    }
}
