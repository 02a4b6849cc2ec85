// Copyright 2026 The lpc-toolkit Authors
// Licensed under the Apache License, Version 2.0 (the "License");

use super::lsf_stability::lsf_check;
use crate::common::{config::SplitLayout, types::Scaler};
use itertools::izip;

#[derive(Debug, PartialEq, Eq)]
pub enum LsfDequantizeError {
    // split, index, codebook size
    IndexOutOfRange(usize, usize, usize),
    NotEnoughIndices(usize, usize),
    CodebookTooShort(usize, usize),
    OutputTooShort(usize, usize),
}

/// Looks up the codeword of every split and writes them one after the other into `out`
///
/// This is the inverse of `split_vector_quantize`. The indices are checked against the layout
/// before anything is written.
///
/// # Arguments
///
/// * `out` - Dequantized vector (length `layout.vector_len()`)
/// * `indices` - One codebook index per split
/// * `cb` - Concatenated split codebook (length `layout.codebook_len()`)
/// * `layout` - Dimensions and codebook sizes of the splits
pub fn dequantize_split(
    out: &mut [Scaler],
    indices: &[usize],
    cb: &[Scaler],
    layout: &SplitLayout,
) -> Result<(), LsfDequantizeError> {
    if indices.len() < layout.num_splits() {
        return Err(LsfDequantizeError::NotEnoughIndices(indices.len(), layout.num_splits()));
    }
    if cb.len() < layout.codebook_len() {
        return Err(LsfDequantizeError::CodebookTooShort(cb.len(), layout.codebook_len()));
    }
    if out.len() < layout.vector_len() {
        return Err(LsfDequantizeError::OutputTooShort(out.len(), layout.vector_len()));
    }
    for (split, (index, cb_size)) in indices.iter().zip(layout.cb_sizes()).enumerate() {
        if *index >= *cb_size {
            return Err(LsfDequantizeError::IndexOutOfRange(split, *index, *cb_size));
        }
    }

    let mut out_pos = 0;
    let mut cb_pos = 0;
    for (index, dim, cb_size) in izip!(indices, layout.dims(), layout.cb_sizes()) {
        let from = cb_pos + *index * *dim;
        out[out_pos..out_pos + *dim].copy_from_slice(&cb[from..from + *dim]);
        out_pos += *dim;
        cb_pos += *dim * *cb_size;
    }

    Ok(())
}

/// Dequantizes `num_analyses` consecutive groups of split indices into a table of lsf vectors and
/// then enforces lsf stability on the whole table
///
/// Returns true if the stability check had to alter any frequency
///
/// # Arguments
///
/// * `lsf` - Table of lsf vectors (length `num_analyses * layout.vector_len()`)
/// * `indices` - Split indices, `layout.num_splits()` per analysis
/// * `cb` - Concatenated split codebook
/// * `layout` - Dimensions and codebook sizes of the splits
/// * `num_analyses` - Number of lsf vectors to decode
pub fn decode_lsf_table(
    lsf: &mut [Scaler],
    indices: &[usize],
    cb: &[Scaler],
    layout: &SplitLayout,
    num_analyses: usize,
) -> Result<bool, LsfDequantizeError> {
    let dim = layout.vector_len();
    let num_splits = layout.num_splits();
    if indices.len() < num_splits * num_analyses {
        return Err(LsfDequantizeError::NotEnoughIndices(indices.len(), num_splits * num_analyses));
    }
    if lsf.len() < dim * num_analyses {
        return Err(LsfDequantizeError::OutputTooShort(lsf.len(), dim * num_analyses));
    }

    for (vector, indices) in lsf.chunks_exact_mut(dim).zip(indices.chunks_exact(num_splits)).take(num_analyses) {
        dequantize_split(vector, indices, cb, layout)?;
    }

    Ok(lsf_check(lsf, dim, num_analyses))
}
