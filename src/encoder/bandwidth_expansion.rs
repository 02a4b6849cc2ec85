use crate::common::types::Scaler;

/// Lpc bandwidth expansion: `out[i] = coef^i * input[i]`
///
/// Moves the poles of the lpc filter towards the origin which widens the formant bandwidths and
/// keeps the synthesis filter well conditioned. `out[0]` is copied unchanged.
///
/// # Arguments
///
/// * `out` - Bandwidth expanded lpc coefficients
/// * `input` - Lpc coefficients before bandwidth expansion
/// * `coef` - Bandwidth expansion (chirp) factor in the range (0, 1]
pub fn bandwidth_expand(out: &mut [Scaler], input: &[Scaler], coef: Scaler) {
    assert_eq!(out.len(), input.len(), "bandwidth expansion output length must match the input");

    let Some((out_first, out_rest)) = out.split_first_mut() else {
        return;
    };
    *out_first = input[0];

    let mut chirp = coef;
    for (out, input) in out_rest.iter_mut().zip(&input[1..]) {
        *out = chirp * *input;
        chirp *= coef;
    }
}

/// Same as `bandwidth_expand` but mutates the lpc coefficients in place
pub fn bandwidth_expand_in_place(a: &mut [Scaler], coef: Scaler) {
    let mut chirp = coef;
    for a in a.iter_mut().skip(1) {
        *a *= chirp;
        chirp *= coef;
    }
}
