//! Escape-time lattice sampler for the 3D Mandelbrot-like point set.
//!
//! Walks every cell of an integer lattice centered on the origin, maps it
//! into parameter space, and keeps the cells whose iteration exits before
//! the iteration limit. Runs once at construction; the result is immutable.

use tracing::{debug, info};

use super::FractalError;

/// Component magnitude bound for the iteration loop. The loop keeps going
/// only while all three components stay *below* this - the inverse of a
/// classical escape test. Intentional: the rendered shape depends on it.
const COMPONENT_BOUND: f64 = 0.01;

/// Extent of the sampling lattice on each axis, centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeBounds {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl LatticeBounds {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self { width, height, depth }
    }

    /// Cubic lattice, same extent on all three axes.
    pub fn cubic(extent: u32) -> Self {
        Self::new(extent, extent, extent)
    }

    /// Total number of cells in the lattice.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.depth as u64
    }

    fn validate(&self) -> Result<(), FractalError> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(FractalError::InvalidArgument(format!(
                "lattice extents must be positive, got {}x{}x{}",
                self.width, self.height, self.depth
            )));
        }
        Ok(())
    }
}

/// Immutable ordered set of lattice coordinates belonging to the fractal.
///
/// Coordinates are integers for even extents and half-integers for odd ones
/// (the reference loop runs `x = -w/2; x < w/2; x++`), so they are exact
/// in f32. Order is x-major, then y, then z.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<[f32; 3]>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f32; 3]> {
        self.points.iter()
    }
}

/// Iterate the lifted Mandelbrot recurrence for one parameter triple and
/// return the step count at which the loop exited.
///
/// The recurrence from (0, 0, 0):
///   zx' = zx^2 - zy^2 - zz^2 + cx
///   zy' = 2*zx*zy + cy
///   zz' = 2*zx*zz + cz
///
/// The loop continues only while all component magnitudes stay below
/// [`COMPONENT_BOUND`] and the count is below `max_iterations`. An exact
/// fixed point forces the count to `max_iterations` (the cell is treated
/// as converged and excluded).
pub(crate) fn escape_count(cx: f64, cy: f64, cz: f64, max_iterations: u32) -> u32 {
    let (mut zx, mut zy, mut zz) = (0.0f64, 0.0f64, 0.0f64);
    let mut iteration = 0u32;

    while zx.abs() < COMPONENT_BOUND
        && zy.abs() < COMPONENT_BOUND
        && zz.abs() < COMPONENT_BOUND
        && iteration < max_iterations
    {
        let xtemp = zx * zx - zy * zy - zz * zz + cx;
        let ytemp = 2.0 * zx * zy + cy;
        let ztemp = 2.0 * zx * zz + cz;

        if zx == xtemp && zy == ytemp && zz == ztemp {
            iteration = max_iterations;
            break;
        }

        zx = xtemp;
        zy = ytemp;
        zz = ztemp;
        iteration += 1;
    }

    iteration
}

/// Sample the lattice and return the cells whose iteration count stays
/// strictly below `max_iterations`.
///
/// Pure function of its inputs; repeated calls return identical sequences.
pub fn sample(bounds: &LatticeBounds, max_iterations: u32) -> Result<PointSet, FractalError> {
    bounds.validate()?;
    if max_iterations == 0 {
        return Err(FractalError::InvalidArgument(
            "iteration limit must be positive".to_string(),
        ));
    }

    let (w, h, d) = (
        bounds.width as f64,
        bounds.height as f64,
        bounds.depth as f64,
    );

    let mut points = Vec::new();

    for ix in 0..bounds.width {
        let x = ix as f64 - w / 2.0;
        let cx = x / w * 4.0 - 2.0;
        for iy in 0..bounds.height {
            let y = iy as f64 - h / 2.0;
            let cy = y / h * 4.0 - 2.0;
            for iz in 0..bounds.depth {
                let z = iz as f64 - d / 2.0;
                let cz = z / d * 4.0 - 2.0;

                if escape_count(cx, cy, cz, max_iterations) < max_iterations {
                    points.push([x as f32, y as f32, z as f32]);
                }
            }
        }
    }

    debug!(
        width = bounds.width,
        height = bounds.height,
        depth = bounds.depth,
        max_iterations,
        "lattice sampled"
    );
    info!(
        cells = bounds.cell_count(),
        points = points.len(),
        "fractal point set generated"
    );

    Ok(PointSet { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        let bounds = LatticeBounds::cubic(8);
        let a = sample(&bounds, 10).unwrap();
        let b = sample(&bounds, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_points_lie_within_bounds() {
        let bounds = LatticeBounds::new(6, 4, 8);
        let set = sample(&bounds, 10).unwrap();
        assert!(!set.is_empty());
        for &[x, y, z] in set.iter() {
            assert!((-3.0..3.0).contains(&x), "x out of range: {x}");
            assert!((-2.0..2.0).contains(&y), "y out of range: {y}");
            assert!((-4.0..4.0).contains(&z), "z out of range: {z}");
        }
    }

    #[test]
    fn test_order_is_x_major() {
        // Every parameter component on a 4-lattice has magnitude >= 1, so
        // every cell exits after one step and the set is the full lattice
        // in iteration order.
        let set = sample(&LatticeBounds::cubic(4), 5).unwrap();
        let mut expected = Vec::new();
        for x in -2i32..2 {
            for y in -2i32..2 {
                for z in -2i32..2 {
                    expected.push([x as f32, y as f32, z as f32]);
                }
            }
        }
        assert_eq!(set.points(), expected.as_slice());
    }

    #[test]
    fn test_tiny_lattice_fixture() {
        // Regression fixture: sample({4,4,4}, 5) is exactly the 64-cell
        // lattice (see test_order_is_x_major for why nothing is excluded).
        let set = sample(&LatticeBounds::cubic(4), 5).unwrap();
        assert_eq!(set.len(), 64);
        assert_eq!(set.points()[0], [-2.0, -2.0, -2.0]);
        assert_eq!(set.points()[63], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_iteration_limit_monotonicity() {
        let bounds = LatticeBounds::cubic(6);
        let low = sample(&bounds, 3).unwrap();
        let high = sample(&bounds, 30).unwrap();
        for p in low.iter() {
            assert!(
                high.points().contains(p),
                "point {p:?} lost when raising the iteration limit"
            );
        }
    }

    #[test]
    fn test_unit_lattice_does_not_panic() {
        // Odd extent of 1 yields the single half-integer cell at -0.5.
        let set = sample(&LatticeBounds::cubic(1), 1).unwrap();
        assert!(set.len() <= 1);
    }

    #[test]
    fn test_zero_extent_is_invalid() {
        let err = sample(&LatticeBounds::new(0, 1, 1), 1).unwrap_err();
        assert!(matches!(err, FractalError::InvalidArgument(_)));
    }

    #[test]
    fn test_zero_iteration_limit_is_invalid() {
        let err = sample(&LatticeBounds::cubic(4), 0).unwrap_err();
        assert!(matches!(err, FractalError::InvalidArgument(_)));
    }

    #[test]
    fn test_fixed_point_short_circuits() {
        // c = (0,0,0) maps (0,0,0) to itself: detected on the first step,
        // count forced to the limit, cell excluded.
        assert_eq!(escape_count(0.0, 0.0, 0.0, 50), 50);
    }

    #[test]
    fn test_small_components_iterate_deeply() {
        // All |c| components below the bound: the orbit stays tiny and the
        // loop runs to the limit, excluding the cell.
        assert_eq!(escape_count(0.005, 0.005, 0.005, 40), 40);
    }

    #[test]
    fn test_large_component_exits_after_one_step() {
        // First step lands on c itself; |cx| >= 0.01 ends the loop.
        assert_eq!(escape_count(-2.0, 0.0, 0.0, 40), 1);
    }
}
