//! Animated fractal point cloud - owns the sampled point set, a shading
//! variant, and the per-tick animation state the viewer shell reads back.
//!
//! The visual never touches the renderer; it exposes a transform/shading
//! value object and the host applies it (composition, not scene-graph
//! inheritance).

use tracing::debug;

use super::color::{clamp01, hsv_to_rgb, mix};
use super::lattice::{sample, LatticeBounds, PointSet};
use super::FractalError;

/// How each rendered point is coloured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Fixed two-colour gradient by distance from the origin.
    /// The mix factor is the raw radial distance (unclamped, shader-style).
    Gradient { center: [f32; 3], outer: [f32; 3] },
    /// Time-varying hue rotation: the whole cloud pulses and colour-cycles.
    HueCycle,
}

impl Shading {
    /// Reference material colours: red core fading to black.
    pub fn default_gradient() -> Self {
        Shading::Gradient {
            center: [1.0, 0.0, 0.0],
            outer: [0.0, 0.0, 0.0],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shading::Gradient { .. } => "Gradient",
            Shading::HueCycle => "Hue cycle",
        }
    }
}

/// Per-tick mutable state, written by [`FractalVisual::update`] and read by
/// the host renderer after the call returns.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Rotation in radians about x, y and z. All three axes share one
    /// scalar, `sin(time / 20)` - a deliberate coupling that produces a
    /// tumbling motion instead of independent spin.
    pub rotation: [f32; 3],
    /// Elapsed time forwarded unchanged as the shading uniform.
    pub time: f64,
}

/// A rotating, colour-shifting fractal point cloud.
///
/// Sampling happens once, synchronously, at construction; the point set is
/// immutable afterwards. Changing the lattice means building a new visual.
#[derive(Debug)]
pub struct FractalVisual {
    bounds: LatticeBounds,
    max_iterations: u32,
    points: PointSet,
    shading: Shading,
    state: AnimationState,
}

impl FractalVisual {
    pub fn new(
        bounds: LatticeBounds,
        max_iterations: u32,
        shading: Shading,
    ) -> Result<Self, FractalError> {
        let points = sample(&bounds, max_iterations)?;
        debug!(points = points.len(), shading = shading.label(), "visual built");
        Ok(Self {
            bounds,
            max_iterations,
            points,
            shading,
            state: AnimationState::default(),
        })
    }

    /// Advance the animation to `time` (elapsed seconds).
    ///
    /// Deterministic and idempotent: the state is a pure function of `time`,
    /// so replaying the same value yields the same rotation and uniform.
    pub fn update(&mut self, time: f64) -> Result<(), FractalError> {
        if !time.is_finite() {
            return Err(FractalError::InvalidArgument(format!(
                "animation time must be finite, got {time}"
            )));
        }
        let angle = (time / 20.0).sin() as f32;
        self.state.rotation = [angle, angle, angle];
        self.state.time = time;
        Ok(())
    }

    /// Colour of one point under the active shading, as linear RGB.
    pub fn point_color(&self, point: [f32; 3]) -> [f32; 3] {
        let radius =
            (point[0] * point[0] + point[1] * point[1] + point[2] * point[2]).sqrt();
        match self.shading {
            Shading::Gradient { center, outer } => clamp01(mix(center, outer, radius)),
            Shading::HueCycle => {
                let t = self.state.time;
                let scale = 0.5 + 0.5 * (t * 0.5).sin();
                let hue = (radius as f64 * 0.1 * scale + t.sin() * 0.5).rem_euclid(1.0);
                hsv_to_rgb(hue as f32, 1.0, 1.0)
            }
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn rotation(&self) -> [f32; 3] {
        self.state.rotation
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn bounds(&self) -> LatticeBounds {
        self.bounds
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    pub fn set_shading(&mut self, shading: Shading) {
        if shading != self.shading {
            debug!(from = self.shading.label(), to = shading.label(), "shading changed");
            self.shading = shading;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_visual(shading: Shading) -> FractalVisual {
        FractalVisual::new(LatticeBounds::cubic(4), 5, shading).unwrap()
    }

    #[test]
    fn test_rotation_axes_are_coupled() {
        let mut v = test_visual(Shading::default_gradient());
        v.update(7.5).unwrap();
        let expected = (7.5f64 / 20.0).sin() as f32;
        assert_eq!(v.rotation(), [expected, expected, expected]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut v = test_visual(Shading::HueCycle);
        v.update(3.25).unwrap();
        let first = v.state();
        v.update(100.0).unwrap();
        v.update(3.25).unwrap();
        assert_eq!(v.state(), first);
    }

    #[test]
    fn test_update_rejects_non_finite_time() {
        let mut v = test_visual(Shading::default_gradient());
        assert!(matches!(
            v.update(f64::NAN),
            Err(FractalError::InvalidArgument(_))
        ));
        assert!(matches!(
            v.update(f64::INFINITY),
            Err(FractalError::InvalidArgument(_))
        ));
        // Failed updates leave the state untouched.
        assert_eq!(v.state(), AnimationState::default());
    }

    #[test]
    fn test_gradient_center_and_far_points() {
        let v = test_visual(Shading::default_gradient());
        // At the origin the mix factor is 0: pure center colour.
        assert_eq!(v.point_color([0.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
        // Far points extrapolate past the outer colour and clamp to black.
        assert_eq!(v.point_color([40.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hue_cycle_tracks_time() {
        let mut v = test_visual(Shading::HueCycle);
        v.update(1.0).unwrap();
        let a = v.point_color([3.0, 0.0, 0.0]);
        v.update(2.0).unwrap();
        let b = v.point_color([3.0, 0.0, 0.0]);
        assert_ne!(a, b);

        // Same time, same colour.
        v.update(1.0).unwrap();
        assert_eq!(v.point_color([3.0, 0.0, 0.0]), a);
    }

    #[test]
    fn test_invalid_lattice_is_rejected() {
        let err = FractalVisual::new(LatticeBounds::new(0, 1, 1), 1, Shading::HueCycle)
            .unwrap_err();
        assert!(matches!(err, FractalError::InvalidArgument(_)));
    }
}
