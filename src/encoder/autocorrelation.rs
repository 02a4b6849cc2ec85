use crate::common::types::Scaler;

/// Computes the autocorrelation of a signal for lags `0..=order`
///
/// `r[lag] = sum(x[n] * x[n + lag])` for `n = 0..N - lag`. No normalization or windowing is
/// applied, use `vector_ops::window` on the signal beforehand if required.
///
/// # Arguments
///
/// * `r` - Autocorrelation output (length order + 1)
/// * `x` - Signal frame
/// * `order` - Largest lag to calculate (must be less than the frame length)
pub fn autocorrelation(r: &mut [Scaler], x: &[Scaler], order: usize) {
    assert!(order < x.len(), "order {} must be less than the frame length {}", order, x.len());
    assert!(r.len() > order, "autocorrelation output must hold order + 1 values");

    for (lag, r) in r[..=order].iter_mut().enumerate() {
        *r = x[..x.len() - lag].iter().zip(&x[lag..]).map(|(a, b)| *a * *b).sum();
    }
}
