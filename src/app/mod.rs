//! Point-cloud viewer shell - runs on both native and WASM.
//!
//! This is the "scene host": it drives `FractalVisual::update` once per
//! frame, then reads the rotation/shading state back and paints the cloud.

mod cloud;
mod diagnostics;
mod header;
mod settings;

use eframe::egui;
use tracing::error;
#[cfg(not(target_arch = "wasm32"))]
use tracing::info;

use crate::core::{FractalError, FractalVisual, LatticeBounds, Shading};
use crate::theme::minimal_visuals;
use crate::time::now_seconds;

/// Reference lattice: 100x100x100 cells.
pub const DEFAULT_EXTENT: u32 = 100;
/// Reference iteration limit.
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Frame-time samples kept for the performance overlay (~3s at 60fps).
const FRAME_SAMPLES: usize = 180;

/// Orbit camera around the origin: drag to rotate, scroll to zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Reference camera sits at z = 2.5 looking at the origin.
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 2.5,
        }
    }
}

/// Fractal point-cloud viewer app.
pub struct CloudApp {
    pub(crate) visual: FractalVisual,
    pub(crate) orbit: OrbitCamera,
    pub(crate) fps_counter: header::FpsCounter,
    /// Rendered point diameter in pixels at the nominal camera distance.
    pub(crate) point_size: f32,
    /// Freeze the animation clock (camera stays live).
    pub(crate) paused: bool,
    /// Accumulated animation time, fed to the visual each tick.
    anim_time: f64,
    /// Wall clock of the previous frame.
    last_tick: f64,
    /// Show settings sidebar.
    pub(crate) show_settings: bool,
    /// Show performance overlay.
    pub(crate) show_overlay: bool,
    /// Recent frame times in milliseconds, oldest first.
    pub(crate) frame_times: Vec<f32>,
    /// Timestamp of the last 1-second stats log (native only).
    #[cfg(not(target_arch = "wasm32"))]
    stats_last_tick: f64,
}

impl CloudApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        bounds: LatticeBounds,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        cc.egui_ctx.set_visuals(minimal_visuals());

        // Sampling blocks here; for the reference 100^3 lattice this is the
        // only heavy step the app ever runs.
        let visual = FractalVisual::new(bounds, max_iterations, Shading::default_gradient())?;

        let now = now_seconds();
        Ok(Self {
            visual,
            orbit: OrbitCamera::default(),
            fps_counter: header::FpsCounter::new(),
            point_size: 2.0,
            paused: false,
            anim_time: 0.0,
            last_tick: now,
            show_settings: false,
            show_overlay: false,
            frame_times: Vec::with_capacity(FRAME_SAMPLES),
            #[cfg(not(target_arch = "wasm32"))]
            stats_last_tick: now,
        })
    }
}

impl eframe::App for CloudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous repaint: the cloud animates even without input
        ctx.request_repaint();

        let now = now_seconds();
        let dt = now - self.last_tick;
        self.last_tick = now;

        if self.frame_times.len() >= FRAME_SAMPLES {
            self.frame_times.remove(0);
        }
        self.frame_times.push((dt * 1000.0) as f32);

        if !self.paused {
            self.anim_time += dt;
        }
        // Time is monotone and finite here; a failure would be a bug worth
        // hearing about rather than a crash.
        if let Err(e) = self.visual.update(self.anim_time) {
            error!(error = %e, "animation update failed");
        }

        #[cfg(not(target_arch = "wasm32"))]
        if now - self.stats_last_tick >= 1.0 {
            info!(
                fps = format!("{:.0}", self.fps_counter.fps()),
                points = self.visual.points().len(),
                frame_ms = format!("{:.2}", dt * 1000.0),
                "stats"
            );
            self.stats_last_tick = now;
        }

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(crate::theme::colors::BG_PRIMARY).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        if self.show_settings {
            self.render_settings(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(crate::theme::colors::BG_PRIMARY))
            .show(ctx, |ui| {
                self.render_cloud(ui);
            });

        if self.show_overlay {
            self.draw_overlay(ctx);
        }
    }
}

/// Format a count with human-readable suffix (1234 -> "1.2k", 5000000 -> "5.0M")
pub(crate) fn format_count(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
