//! Native viewer entry point.
//!
//! Run with: cargo run --bin mandelcloud
//! Lattice extent and iteration limit come from MANDEL_LATTICE / MANDEL_ITER.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use mandelcloud::app::{CloudApp, DEFAULT_EXTENT, DEFAULT_ITERATIONS};
    use mandelcloud::core::LatticeBounds;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mandelcloud=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    fn env_extent(name: &str, default: u32) -> u32 {
        match std::env::var(name) {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(var = name, value = %raw, default, "ignoring invalid value");
                    default
                }
            },
            Err(_) => default,
        }
    }

    let extent = env_extent("MANDEL_LATTICE", DEFAULT_EXTENT);
    let max_iterations = env_extent("MANDEL_ITER", DEFAULT_ITERATIONS);
    info!(extent, max_iterations, "starting viewer");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("mandelcloud"),
        ..Default::default()
    };

    eframe::run_native(
        "mandelcloud",
        native_options,
        Box::new(move |cc| {
            let app = CloudApp::new(cc, LatticeBounds::cubic(extent), max_iterations)?;
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
