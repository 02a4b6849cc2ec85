use crate::common::{
    constants::{LSF_MAX, LSF_MIN, LSF_MIN_SEPARATION, LSF_SEPARATION_STEP, LSF_STABILITY_PASSES},
    types::Scaler,
};

/// Enforces a minimum spacing and valid frequency range on a table of lsf vectors (in place)
///
/// Makes a fixed number of passes over every vector. Each adjacent pair closer than
/// `LSF_MIN_SEPARATION` is pushed apart by `LSF_SEPARATION_STEP` and both values are clamped to
/// `LSF_MIN..=LSF_MAX`. For an inverted pair only `lsf[k + 1]` moves, to `LSF_SEPARATION_STEP`
/// above `lsf[k]`, so the pair is reordered first and spread on a later pass.
///
/// Returns true if any value was changed
///
/// # Arguments
///
/// * `lsf` - Table of lsf vectors, stored one after the other
/// * `dim` - Number of frequencies in each vector (e.g. 10)
/// * `num_analyses` - Number of vectors in the table (e.g. 2)
pub fn lsf_check(lsf: &mut [Scaler], dim: usize, num_analyses: usize) -> bool {
    assert!(dim > 0, "lsf vectors must have at least one frequency");
    assert!(lsf.len() >= dim * num_analyses, "lsf table is shorter than dim * num_analyses");

    let mut change = false;
    for _ in 0..LSF_STABILITY_PASSES {
        for vector in lsf.chunks_exact_mut(dim).take(num_analyses) {
            for k in 0..dim - 1 {
                if vector[k + 1] - vector[k] < LSF_MIN_SEPARATION {
                    if vector[k + 1] < vector[k] {
                        // lsf[k] ends up where it was, the next pass spreads the pair
                        vector[k + 1] = vector[k] + LSF_SEPARATION_STEP;
                        vector[k] = vector[k + 1] - LSF_SEPARATION_STEP;
                    } else {
                        vector[k] -= LSF_SEPARATION_STEP;
                        vector[k + 1] += LSF_SEPARATION_STEP;
                    }
                    change = true;
                }

                change |= clamp_lsf(&mut vector[k]);
                change |= clamp_lsf(&mut vector[k + 1]);
            }

            if dim == 1 {
                change |= clamp_lsf(&mut vector[0]);
            }
        }
    }

    if change {
        log::trace!("lsf table of {} vectors adjusted for stability", num_analyses);
    }

    change
}

fn clamp_lsf(value: &mut Scaler) -> bool {
    if *value < LSF_MIN {
        *value = LSF_MIN;
        true
    } else if *value > LSF_MAX {
        *value = LSF_MAX;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    #[allow(unused_imports)]
    use num_traits::real::Real;

    fn assert_close(actual: &[Scaler], expected: &[Scaler]) {
        assert_eq!(actual.len(), expected.len());
        for (actual, expected) in actual.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-6, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn stable_table_is_unchanged() {
        let mut lsf = [0.2, 0.4, 0.6, 0.9, 1.3, 1.7, 2.0, 2.4, 2.7, 3.0];
        let original = lsf;

        let change = lsf_check(&mut lsf, 10, 1);

        assert!(!change);
        assert_eq!(lsf, original);
    }

    #[test]
    fn spreads_crowded_pair() {
        let mut lsf = [0.2, 0.5, 0.51, 1.0, 1.5];

        let change = lsf_check(&mut lsf, 5, 1);

        assert!(change);
        assert_close(&lsf, &[0.2, 0.4805, 0.5295, 1.0, 1.5]);
    }

    #[test]
    fn reorders_then_spreads_inverted_pair() {
        let mut lsf = [0.6, 0.5];

        let change = lsf_check(&mut lsf, 2, 1);

        // first pass: [0.6, 0.6195], second pass spreads it like any crowded pair
        assert!(change);
        assert_close(&lsf, &[0.5805, 0.639]);
    }

    #[test]
    fn inverted_pair_keeps_lower_frequency_on_first_pass() {
        let mut lsf = [1.0, 0.2, 2.0];

        assert!(lsf_check(&mut lsf, 3, 1));

        // pass one gives [1.0, 1.0195, 2.0], pass two spreads 1.0 and 1.0195
        assert_close(&lsf, &[0.9805, 1.039, 2.0]);
    }

    #[test]
    fn clamps_to_valid_range() {
        let mut lsf = [0.0, 1.0, 3.5];

        assert!(lsf_check(&mut lsf, 3, 1));
        assert_eq!(lsf, [LSF_MIN, 1.0, LSF_MAX]);

        // a second run finds nothing left to do
        assert!(!lsf_check(&mut lsf, 3, 1));
        assert_eq!(lsf, [LSF_MIN, 1.0, LSF_MAX]);
    }

    #[test]
    fn each_analysis_is_checked_and_trailing_data_ignored() {
        let mut lsf = [0.1, 0.5, 1.0, 0.1, 0.11, 1.0, 0.3, 0.3, 0.3];

        let change = lsf_check(&mut lsf, 3, 2);

        assert!(change);
        assert_close(&lsf, &[0.1, 0.5, 1.0, 0.0805, 0.1295, 1.0, 0.3, 0.3, 0.3]);
    }

    #[test]
    fn crowded_vector_gets_minimum_spacing() {
        let mut lsf = [0.5, 0.51, 0.52, 0.53];

        assert!(lsf_check(&mut lsf, 4, 1));

        assert_close(&lsf, &[0.4805, 0.51, 0.549, 0.588]);
        for pair in lsf.windows(2) {
            assert!(pair[1] - pair[0] >= LSF_MIN_SEPARATION - LSF_SEPARATION_STEP - 1e-6);
        }
        assert!(lsf.iter().all(|f| *f >= LSF_MIN && *f <= LSF_MAX));
    }

    #[test]
    fn single_frequency_is_only_clamped() {
        let mut lsf = [4.0];

        assert!(lsf_check(&mut lsf, 1, 1));
        assert_eq!(lsf, [LSF_MAX]);
    }
}
