//! Colour helpers shared by the shading variants.
//!
//! Colours are linear `[r, g, b]` triples in `[0, 1]`; conversion to the
//! renderer's 8-bit format happens in the viewer shell.

/// Convert hue/saturation/value to RGB. `h` wraps into `[0, 1)`,
/// `s` and `v` are expected in `[0, 1]`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Unclamped linear interpolation between two colours. `t` outside `[0, 1]`
/// extrapolates, matching GLSL `mix` semantics.
pub fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Clamp each channel to `[0, 1]`, as the render stage would.
pub fn clamp01(c: [f32; 3]) -> [f32; 3] {
    [
        c[0].clamp(0.0, 1.0),
        c[1].clamp(0.0, 1.0),
        c[2].clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
        assert!(close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(hsv_to_rgb(1.25, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0)));
        assert!(close(hsv_to_rgb(-0.75, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0)));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert!(close(hsv_to_rgb(0.6, 0.0, 0.5), [0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_mix_endpoints_and_extrapolation() {
        let red = [1.0, 0.0, 0.0];
        let black = [0.0, 0.0, 0.0];
        assert!(close(mix(red, black, 0.0), red));
        assert!(close(mix(red, black, 1.0), black));
        // Extrapolated mix goes negative; the clamp brings it back.
        assert!(close(clamp01(mix(red, black, 2.0)), black));
    }
}
