use crate::common::types::Scaler;
use core::mem;
use itertools::izip;

/// Nearest neighbour search of a vector against a flat codebook using squared euclidean distance
///
/// Every codeword is compared (no early exit). On equal distances the first codeword wins.
///
/// Returns the index of the selected codeword
///
/// # Arguments
///
/// * `xq` - Quantized vector, a copy of the selected codeword (same length as `x`)
/// * `x` - Vector to quantize
/// * `cb` - Codebook of `cb.len() / x.len()` contiguous codewords
pub fn vector_quantize(xq: &mut [Scaler], x: &[Scaler], cb: &[Scaler]) -> usize {
    let dim = x.len();
    assert!(dim > 0, "cannot quantize an empty vector");
    assert_eq!(xq.len(), dim, "quantized vector length must match the target vector");
    assert!(
        !cb.is_empty() && cb.len() % dim == 0,
        "codebook length {} is not a non-zero multiple of the dimension {}",
        cb.len(),
        dim
    );

    let mut min_dist = Scaler::INFINITY;
    let mut min_index = 0;
    for (j, codeword) in cb.chunks_exact(dim).enumerate() {
        let dist: Scaler = x
            .iter()
            .zip(codeword)
            .map(|(x, c)| {
                let diff = *x - *c;
                diff * diff
            })
            .sum();

        if dist < min_dist {
            min_dist = dist;
            min_index = j;
        }
    }

    xq.copy_from_slice(&cb[min_index * dim..(min_index + 1) * dim]);
    min_index
}

/// Split vector quantization: the vector and codebook are cut into contiguous sub-vectors and
/// sub-codebooks which are quantized independently of each other
///
/// # Arguments
///
/// * `qx` - Quantized vector (length sum of `dims`)
/// * `indices` - One codebook index per split
/// * `x` - Vector to quantize (length sum of `dims`)
/// * `cb` - Concatenated codebook, split `i` occupies `dims[i] * cb_sizes[i]` scalers
/// * `dims` - Dimension of each split
/// * `cb_sizes` - Number of codewords in each split codebook
pub fn split_vector_quantize(
    qx: &mut [Scaler],
    indices: &mut [usize],
    x: &[Scaler],
    cb: &[Scaler],
    dims: &[usize],
    cb_sizes: &[usize],
) {
    assert_eq!(dims.len(), cb_sizes.len(), "each split needs a dimension and a codebook size");
    assert!(indices.len() >= dims.len(), "indices must hold one value per split");
    let vector_len: usize = dims.iter().sum();
    assert!(x.len() >= vector_len, "vector is shorter than the sum of the split dimensions");
    assert!(qx.len() >= vector_len, "quantized vector is shorter than the sum of the split dimensions");
    let codebook_len: usize = dims.iter().zip(cb_sizes).map(|(dim, cb_size)| dim * cb_size).sum();
    assert!(cb.len() >= codebook_len, "codebook is shorter than the split layout requires");

    let mut x_rest = x;
    let mut qx_rest = qx;
    let mut cb_rest = cb;
    for (index, dim, cb_size) in izip!(indices.iter_mut(), dims, cb_sizes) {
        let (x_split, x_tail) = x_rest.split_at(*dim);
        let (qx_split, qx_tail) = mem::take(&mut qx_rest).split_at_mut(*dim);
        let (cb_split, cb_tail) = cb_rest.split_at(*dim * *cb_size);

        *index = vector_quantize(qx_split, x_split, cb_split);

        x_rest = x_tail;
        qx_rest = qx_tail;
        cb_rest = cb_tail;
    }
}
