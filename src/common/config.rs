use super::{
    constants::{LPC_FILTER_ORDER, MAX_SPLITS},
    types::Scaler,
};
use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    TwentyMs,
    ThirtyMs,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SplitLayoutError {
    Empty,
    TooManySplits(usize),
    MismatchedLengths(usize, usize),
    ZeroDimension(usize),
    ZeroCodebookSize(usize),
}

/// Describes how a parameter vector and its concatenated codebook are divided into
/// independently quantized sub-vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLayout {
    dims: Vec<usize, MAX_SPLITS>,
    cb_sizes: Vec<usize, MAX_SPLITS>,
}

impl SplitLayout {
    /// Creates a layout from per-split dimensions and codebook sizes
    ///
    /// # Arguments
    ///
    /// * `dims` - Dimension of each sub-vector (e.g. [3, 3, 4])
    /// * `cb_sizes` - Number of codewords in each sub-codebook (e.g. [64, 128, 128])
    pub fn new(dims: &[usize], cb_sizes: &[usize]) -> Result<Self, SplitLayoutError> {
        if dims.is_empty() {
            return Err(SplitLayoutError::Empty);
        }
        if dims.len() != cb_sizes.len() {
            return Err(SplitLayoutError::MismatchedLengths(dims.len(), cb_sizes.len()));
        }
        if dims.len() > MAX_SPLITS {
            return Err(SplitLayoutError::TooManySplits(dims.len()));
        }
        if let Some(split) = dims.iter().position(|dim| *dim == 0) {
            return Err(SplitLayoutError::ZeroDimension(split));
        }
        if let Some(split) = cb_sizes.iter().position(|cb_size| *cb_size == 0) {
            return Err(SplitLayoutError::ZeroCodebookSize(split));
        }

        // capacity checked above
        let dims = Vec::from_slice(dims).map_err(|_| SplitLayoutError::TooManySplits(dims.len()))?;
        let cb_sizes = Vec::from_slice(cb_sizes).map_err(|_| SplitLayoutError::TooManySplits(cb_sizes.len()))?;
        Ok(Self { dims, cb_sizes })
    }

    /// The three way split used for 10th order line spectral frequencies
    pub fn lsf() -> Self {
        let mut dims = Vec::new();
        let mut cb_sizes = Vec::new();
        for (dim, cb_size) in [(3, 64), (3, 128), (4, 128)] {
            dims.push(dim).ok();
            cb_sizes.push(cb_size).ok();
        }

        Self { dims, cb_sizes }
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn cb_sizes(&self) -> &[usize] {
        &self.cb_sizes
    }

    pub fn num_splits(&self) -> usize {
        self.dims.len()
    }

    /// Length of the full (unsplit) parameter vector
    pub fn vector_len(&self) -> usize {
        self.dims.iter().sum()
    }

    /// Number of scalers in the concatenated codebook
    pub fn codebook_len(&self) -> usize {
        self.dims.iter().zip(&self.cb_sizes).map(|(dim, cb_size)| dim * cb_size).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LpcConfig {
    /// Frame mode (e.g. ThirtyMs)
    pub mode: FrameMode,

    /// Sampling frequency in hz (e.g. 8000)
    pub fs: usize,

    /// Number of samples in one block (e.g. 240)
    pub block_len: usize,

    /// Number of lpc analyses made per block (e.g. 2)
    pub num_analyses: usize,

    /// Lpc filter order (e.g. 10)
    pub order: usize,

    /// Number of samples from the previous block included in the analysis window (e.g. 60)
    pub lookback: usize,

    /// Bandwidth expansion factor for the synthesis filter (e.g. 0.9025)
    pub chirp_synthesis: Scaler,

    /// Bandwidth expansion factor for the perceptual weighting filter (e.g. 0.4222)
    pub chirp_weighting: Scaler,

    /// Bandwidth of the gaussian lag window in hz (e.g. 60.0)
    pub lag_window_hz: Scaler,

    /// Split codebook layout for the quantized line spectral frequencies
    pub lsf_layout: SplitLayout,
}

impl LpcConfig {
    pub fn new(mode: FrameMode) -> Self {
        let (block_len, num_analyses) = match mode {
            FrameMode::TwentyMs => (160, 1),
            FrameMode::ThirtyMs => (240, 2),
        };

        Self {
            mode,
            fs: 8000,
            block_len,
            num_analyses,
            order: LPC_FILTER_ORDER,
            lookback: 60,
            chirp_synthesis: 0.9025,
            chirp_weighting: 0.4222,
            lag_window_hz: 60.0,
            lsf_layout: SplitLayout::lsf(),
        }
    }

    /// Number of samples in one analysis window
    pub fn analysis_len(&self) -> usize {
        self.block_len + self.lookback
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::constants::MAX_ANALYSIS_LEN;

    #[test]
    fn thirty_ms_config() {
        let config = LpcConfig::new(FrameMode::ThirtyMs);

        assert_eq!(config.mode, FrameMode::ThirtyMs);
        assert_eq!(config.fs, 8000);
        assert_eq!(config.block_len, 240);
        assert_eq!(config.num_analyses, 2);
        assert_eq!(config.order, 10);
        assert_eq!(config.analysis_len(), 300);
        assert!(config.analysis_len() <= MAX_ANALYSIS_LEN);
    }

    #[test]
    fn twenty_ms_config() {
        let config = LpcConfig::new(FrameMode::TwentyMs);

        assert_eq!(config.block_len, 160);
        assert_eq!(config.num_analyses, 1);
        assert_eq!(config.analysis_len(), 220);
    }

    #[test]
    fn lsf_layout() {
        let layout = SplitLayout::lsf();

        assert_eq!(layout.dims(), &[3, 3, 4]);
        assert_eq!(layout.cb_sizes(), &[64, 128, 128]);
        assert_eq!(layout.num_splits(), 3);
        assert_eq!(layout.vector_len(), LPC_FILTER_ORDER);
        assert_eq!(layout.codebook_len(), 1088);
        assert_eq!(SplitLayout::new(&[3, 3, 4], &[64, 128, 128]), Ok(layout));
    }

    #[test]
    fn invalid_layouts() {
        assert_eq!(SplitLayout::new(&[], &[]), Err(SplitLayoutError::Empty));
        assert_eq!(
            SplitLayout::new(&[2, 2], &[4]),
            Err(SplitLayoutError::MismatchedLengths(2, 1))
        );
        assert_eq!(
            SplitLayout::new(&[1; 9], &[1; 9]),
            Err(SplitLayoutError::TooManySplits(9))
        );
        assert_eq!(
            SplitLayout::new(&[2, 0], &[4, 4]),
            Err(SplitLayoutError::ZeroDimension(1))
        );
        assert_eq!(
            SplitLayout::new(&[2, 2], &[0, 4]),
            Err(SplitLayoutError::ZeroCodebookSize(0))
        );
    }
}
