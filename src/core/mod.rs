//! Platform-agnostic core module - fractal sampling and animation state.
//! No egui or WASM dependencies, shared by the native and web viewers.

pub mod color;
pub mod lattice;
pub mod visual;

use thiserror::Error;

pub use lattice::{sample, LatticeBounds, PointSet};
pub use visual::{AnimationState, FractalVisual, Shading};

/// Errors from the fractal core. Everything here is a programming error at
/// the call site - there is no I/O and nothing transient to retry.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
