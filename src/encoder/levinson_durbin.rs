use crate::common::{constants::ENERGY_EPS, types::Scaler};

/// Solves the normal equations for the lpc coefficients of an autocorrelation vector using the
/// Levinson-Durbin recursion
///
/// A frame with zero lag energy below `ENERGY_EPS` is modelled as a flat spectrum: all reflection
/// coefficients and all lpc coefficients after `a[0]` are set to zero. No stability check is made
/// on the resulting filter (see `bandwidth_expansion`).
///
/// Returns the prediction error energy of the final order (`r[0]` for a silent frame)
///
/// # Arguments
///
/// * `a` - Lpc coefficients, starting with 1.0 (length order + 1)
/// * `k` - Reflection coefficients (length order)
/// * `r` - Autocorrelation vector (length order + 1)
/// * `order` - Order of the lpc filter
pub fn levinson_durbin(a: &mut [Scaler], k: &mut [Scaler], r: &[Scaler], order: usize) -> Scaler {
    assert!(a.len() > order, "lpc coefficients must hold order + 1 values");
    assert!(k.len() >= order, "reflection coefficients must hold order values");
    assert!(r.len() > order, "autocorrelation vector must hold order + 1 values");

    a[0] = 1.0;
    if order == 0 {
        return r[0];
    }

    if r[0] < ENERGY_EPS {
        log::debug!("zero energy frame (r[0] = {}), using a flat lpc model", r[0]);
        k[..order].fill(0.0);
        a[1..=order].fill(0.0);
        return r[0];
    }

    k[0] = -r[1] / r[0];
    a[1] = k[0];
    let mut alpha = r[0] + r[1] * k[0];

    for m in 1..order {
        let mut sum = r[m + 1];
        for i in 0..m {
            sum += a[i + 1] * r[m - i];
        }

        let rc = -sum / alpha;
        k[m] = rc;
        alpha += rc * sum;

        // symmetric in-place update, both sides computed from the previous order
        for i in 0..(m + 1) / 2 {
            let lower = a[i + 1] + rc * a[m - i];
            a[m - i] += rc * a[i + 1];
            a[i + 1] = lower;
        }
        a[m + 1] = rc;
    }

    alpha
}
