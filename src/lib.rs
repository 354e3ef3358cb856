//! mandelcloud - a rotating, colour-shifting 3D Mandelbrot point cloud.
//!
//! The core (`core::lattice`, `core::visual`) samples an escape-time point
//! set once and advances rotation/shading state per frame; the viewer shell
//! (`app`) projects and paints it in an egui canvas with orbit controls.
//! Runs natively and in the browser.

pub mod app;
pub mod core;
pub mod theme;
pub mod time;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Browser entry point: mount the viewer on the page's `#canvas` element.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Route tracing to the browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    let app = app::CloudApp::new(
                        cc,
                        crate::core::LatticeBounds::cubic(app::DEFAULT_EXTENT),
                        app::DEFAULT_ITERATIONS,
                    )?;
                    Ok(Box::new(app))
                }),
            )
            .await
            .expect("Failed to start eframe");
    });
}
