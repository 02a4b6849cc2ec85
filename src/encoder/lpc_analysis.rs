// Copyright 2026 The lpc-toolkit Authors
// Licensed under the Apache License, Version 2.0 (the "License");

use super::{autocorrelation::autocorrelation, bandwidth_expansion::bandwidth_expand, levinson_durbin::levinson_durbin};
use crate::common::{
    config::LpcConfig,
    constants::{ENERGY_EPS, MAX_ANALYSIS_LEN, MAX_LPC_ORDER},
    types::Scaler,
    vector_ops::{lag_window, window, window_in_place},
};

#[derive(Debug, PartialEq, Eq)]
pub enum LpcAnalysisError {
    EmptyWindow,
    WindowTooLong(usize),
    OrderTooHigh(usize),
    WindowNotLongerThanOrder(usize, usize),
}

#[derive(Debug, Clone, Copy)]
pub struct LpcAnalysisResult {
    /// Prediction error energy after the Levinson-Durbin recursion
    pub prediction_error: Scaler,

    /// The windowed frame had (numerically) zero energy and a flat model was produced
    pub is_silent: bool,
}

/// Main entry point for lpc analysis of a single analysis window
pub struct LpcAnalysis<'a> {
    order: usize,
    chirp: Scaler,
    window: &'a [Scaler],
    lag_window: [Scaler; MAX_LPC_ORDER + 1],
}

impl<'a> LpcAnalysis<'a> {
    /// Creates an analysis stage for one window shape
    ///
    /// # Arguments
    ///
    /// * `config` - Order, chirp factor and lag window bandwidth are taken from here
    /// * `window` - Analysis window, its length is the number of samples passed to `run`
    pub fn new(config: &LpcConfig, window: &'a [Scaler]) -> Result<Self, LpcAnalysisError> {
        if window.is_empty() {
            return Err(LpcAnalysisError::EmptyWindow);
        }
        if window.len() > MAX_ANALYSIS_LEN {
            return Err(LpcAnalysisError::WindowTooLong(window.len()));
        }
        if config.order > MAX_LPC_ORDER {
            return Err(LpcAnalysisError::OrderTooHigh(config.order));
        }
        if window.len() <= config.order {
            return Err(LpcAnalysisError::WindowNotLongerThanOrder(window.len(), config.order));
        }

        let mut lag = [0.0; MAX_LPC_ORDER + 1];
        lag_window(&mut lag[..=config.order], config.lag_window_hz, config.fs);

        Ok(Self {
            order: config.order,
            chirp: config.chirp_synthesis,
            window,
            lag_window: lag,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Windows the frame, estimates its lag windowed autocorrelation and solves for bandwidth
    /// expanded lpc coefficients
    ///
    /// # Arguments
    ///
    /// * `frame` - Input samples (same length as the analysis window)
    /// * `a` - Bandwidth expanded lpc coefficients (length order + 1)
    /// * `k` - Reflection coefficients (length order)
    pub fn run(&self, frame: &[Scaler], a: &mut [Scaler], k: &mut [Scaler]) -> LpcAnalysisResult {
        assert_eq!(frame.len(), self.window.len(), "frame length must match the analysis window");
        let order = self.order;
        let len = frame.len();

        let mut windowed = [0.0; MAX_ANALYSIS_LEN];
        window(&mut windowed[..len], frame, self.window);

        let mut r = [0.0; MAX_LPC_ORDER + 1];
        autocorrelation(&mut r[..=order], &windowed[..len], order);
        window_in_place(&mut r[..=order], &self.lag_window[..=order]);
        let is_silent = r[0] < ENERGY_EPS;

        let mut a_raw = [0.0; MAX_LPC_ORDER + 1];
        let prediction_error = levinson_durbin(&mut a_raw[..=order], k, &r[..=order], order);
        bandwidth_expand(&mut a[..=order], &a_raw[..=order], self.chirp);

        LpcAnalysisResult {
            prediction_error,
            is_silent,
        }
    }
}
