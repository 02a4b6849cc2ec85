use super::types::Scaler;

// max lpc filter order supported by the fixed size scratch buffers
pub const MAX_LPC_ORDER: usize = 16;

// max number of samples in one analysis window (block length plus look-back)
pub const MAX_ANALYSIS_LEN: usize = 300;

// max number of sub-vectors in a split codebook
pub const MAX_SPLITS: usize = 8;

// lpc filter order used for speech at 8khz
pub const LPC_FILTER_ORDER: usize = 10;

/// Zero-lag energy below this value is treated as a silent frame by the Levinson-Durbin recursion
pub const ENERGY_EPS: Scaler = 2.220446e-16;

/// Minimum distance between adjacent line spectral frequencies (50 Hz)
pub const LSF_MIN_SEPARATION: Scaler = 0.039;

/// Amount each frequency of a crowded pair is pushed away from its neighbour
pub const LSF_SEPARATION_STEP: Scaler = 0.0195;

/// Lowest allowed line spectral frequency in radians
pub const LSF_MIN: Scaler = 0.01;

/// Highest allowed line spectral frequency in radians (4000 Hz)
pub const LSF_MAX: Scaler = 3.14;

// number of sweeps the stability check makes over a table of lsf vectors
pub const LSF_STABILITY_PASSES: usize = 2;
