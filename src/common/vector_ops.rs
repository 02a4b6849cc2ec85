use super::types::Scaler;
use core::f32::consts::PI;
use itertools::izip;
#[allow(unused_imports)]
use num_traits::real::Real;

// white noise correction applied to the zero lag of the lag window
const WHITE_NOISE_CORRECTION: Scaler = 1.0001;

/// Multiplies a signal by a window function, one sample at a time
///
/// # Arguments
///
/// * `z` - Windowed output (same length as `x`)
/// * `x` - Signal to window
/// * `y` - Window function
pub fn window(z: &mut [Scaler], x: &[Scaler], y: &[Scaler]) {
    assert_eq!(z.len(), x.len(), "window output length must match the signal length");
    assert_eq!(x.len(), y.len(), "window length must match the signal length");

    for (z, x, y) in izip!(z, x, y) {
        *z = *x * *y;
    }
}

/// Multiplies a vector by a window function in place
pub fn window_in_place(x: &mut [Scaler], y: &[Scaler]) {
    assert_eq!(x.len(), y.len(), "window length must match the signal length");

    for (x, y) in x.iter_mut().zip(y) {
        *x *= *y;
    }
}

/// Convex blend of two parameter vectors: `out = coef * in1 + (1 - coef) * in2`
///
/// `coef` is not clamped, values outside `0..=1` extrapolate.
///
/// # Arguments
///
/// * `out` - Interpolated vector
/// * `in1` - Vector weighted by `coef`
/// * `in2` - Vector weighted by `1 - coef`
/// * `coef` - Interpolation weight
pub fn interpolate(out: &mut [Scaler], in1: &[Scaler], in2: &[Scaler], coef: Scaler) {
    assert_eq!(out.len(), in1.len(), "interpolation output length must match the inputs");
    assert_eq!(in1.len(), in2.len(), "interpolation inputs must have the same length");

    let invcoef = 1.0 - coef;
    for (out, in1, in2) in izip!(out, in1, in2) {
        *out = coef * *in1 + invcoef * *in2;
    }
}

/// Fills `out` with a gaussian lag window to be applied to an autocorrelation vector
///
/// # Arguments
///
/// * `out` - Lag window, one entry per lag (order + 1)
/// * `bandwidth_hz` - Bandwidth of the gaussian smoothing (e.g. 60.0)
/// * `sample_rate` - Sampling frequency in hz (e.g. 8000)
pub fn lag_window(out: &mut [Scaler], bandwidth_hz: Scaler, sample_rate: usize) {
    let step = 2.0 * PI * bandwidth_hz / sample_rate as Scaler;
    for (lag, w) in out.iter_mut().enumerate() {
        let x = step * lag as Scaler;
        *w = (-0.5 * x * x).exp();
    }

    if let Some(w0) = out.first_mut() {
        *w0 = WHITE_NOISE_CORRECTION;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn window_multiplies_pointwise() {
        let x = [1.0, -2.0, 3.0, 4.0];
        let y = [0.5, 0.5, 0.0, 1.0];
        let mut z = [0.0; 4];

        window(&mut z, &x, &y);

        assert_eq!(z, [0.5, -1.0, 0.0, 4.0]);
    }

    #[test]
    fn window_in_place_matches_window() {
        let mut x = [2.0, 4.0, 8.0];
        window_in_place(&mut x, &[0.25, 0.5, 1.0]);

        assert_eq!(x, [0.5, 2.0, 8.0]);
    }

    #[test]
    #[should_panic(expected = "window length must match the signal length")]
    fn window_rejects_mismatched_lengths() {
        let mut z = [0.0; 3];
        window(&mut z, &[1.0, 2.0, 3.0], &[1.0, 1.0]);
    }

    #[test]
    fn interpolate_endpoints_and_midpoint() {
        let in1 = [1.0, 2.0, -4.0];
        let in2 = [3.0, -2.0, 4.0];
        let mut out = [0.0; 3];

        interpolate(&mut out, &in1, &in2, 1.0);
        assert_eq!(out, in1);

        interpolate(&mut out, &in1, &in2, 0.0);
        assert_eq!(out, in2);

        interpolate(&mut out, &in1, &in2, 0.5);
        assert_eq!(out, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn interpolate_extrapolates_outside_unit_range() {
        let mut out = [0.0; 2];
        interpolate(&mut out, &[1.0, 0.0], &[0.0, 1.0], 2.0);

        assert_eq!(out, [2.0, -1.0]);
    }

    #[test]
    fn lag_window_matches_60hz_at_8khz() {
        let mut w = [0.0; 11];
        lag_window(&mut w, 60.0, 8000);

        assert_eq!(w[0], 1.0001);
        assert!((w[1] - 0.998890).abs() < 1e-5);
        assert!((w[5] - 0.972623).abs() < 1e-5);
        assert!((w[10] - 0.894909).abs() < 1e-5);
        assert!(w.windows(2).skip(1).all(|pair| pair[1] < pair[0]));
    }
}
