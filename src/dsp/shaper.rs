//! Waveform shaper — morphs a sine between triangle and square.
//!
//! The shape parameter walks a single axis:
//! `0.0` triangle → `0.5` sine → `1.0` square. Both halves meet at exactly
//! `sin(angle)` so sweeping the control never produces a jump.

use std::f64::consts::FRAC_2_PI;

/// Evaluate the morphing waveform at `angle` (radians).
///
/// `shape` is clamped to `[0, 1]`; the result is always in `[-1, 1]`.
pub fn shape(angle: f64, shape: f64) -> f64 {
    let s = angle.sin();
    let shape = shape.clamp(0.0, 1.0);

    if shape <= 0.5 {
        lerp(triangle(s), s, shape * 2.0)
    } else {
        lerp(s, square(s), (shape - 0.5) * 2.0)
    }
}

/// Triangle wave sharing zero crossings and peaks with `s = sin(angle)`.
fn triangle(s: f64) -> f64 {
    FRAC_2_PI * s.asin()
}

/// Square wave; zero counts as positive.
fn square(s: f64) -> f64 {
    if s >= 0.0 { 1.0 } else { -1.0 }
}

/// Linear interpolation written so that `t == 1.0` returns `b` exactly.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn midpoint_is_exact_sine() {
        for i in 0..1000 {
            let angle = i as f64 * 0.0137 - 5.0;
            assert_eq!(shape(angle, 0.5), angle.sin(), "angle {angle}");
        }
    }

    #[test]
    fn triangle_end_is_linear_between_peaks() {
        // Quarter of the way to the peak should be a quarter of the amplitude.
        let v = shape(FRAC_PI_2 / 4.0, 0.0);
        assert!((v - 0.25).abs() < 1e-12, "Triangle should be linear, got {v}");
        assert!((shape(FRAC_PI_2, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn square_end_is_two_level() {
        assert_eq!(shape(0.3, 1.0), 1.0);
        assert_eq!(shape(PI + 0.3, 1.0), -1.0);
        // sign(0) counts as positive
        assert_eq!(shape(0.0, 1.0), 1.0);
    }

    #[test]
    fn output_range() {
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            for i in 0..500 {
                let angle = i as f64 / 500.0 * TAU * 3.0;
                let v = shape(angle, p);
                assert!((-1.0..=1.0).contains(&v), "shape {p} angle {angle} out of range: {v}");
            }
        }
    }

    #[test]
    fn out_of_range_shape_is_clamped() {
        assert_eq!(shape(1.0, -3.0), shape(1.0, 0.0));
        assert_eq!(shape(1.0, 7.0), shape(1.0, 1.0));
    }

    #[test]
    fn continuous_across_midpoint() {
        let angle = 0.77;
        let below = shape(angle, 0.5 - 1e-9);
        let above = shape(angle, 0.5 + 1e-9);
        assert!((below - above).abs() < 1e-6);
    }
}
