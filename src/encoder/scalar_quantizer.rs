use crate::common::types::Scaler;

/// Nearest neighbour quantization of a value against a strictly increasing codebook
///
/// Scans forward to the first codeword at or above `x` and then picks between it and its lower
/// neighbour using their midpoint. A value exactly on the midpoint goes to the lower codeword.
///
/// Returns `(index, quantized value)`
///
/// # Arguments
///
/// * `x` - Value to quantize
/// * `cb` - Increasing codebook with at least two entries
pub fn scalar_quantize(x: Scaler, cb: &[Scaler]) -> (usize, Scaler) {
    assert!(cb.len() >= 2, "scalar codebook needs at least two entries, got {}", cb.len());
    debug_assert!(cb.windows(2).all(|pair| pair[0] < pair[1]), "scalar codebook must be increasing");

    if x <= cb[0] {
        return (0, cb[0]);
    }

    // x is above cb[0] here so the scan can start at the second codeword
    let mut i = 1;
    while x > cb[i] && i < cb.len() - 1 {
        i += 1;
    }

    if x > (cb[i] + cb[i - 1]) / 2.0 {
        (i, cb[i])
    } else {
        (i - 1, cb[i - 1])
    }
}
