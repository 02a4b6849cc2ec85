use lpc_toolkit::common::{
    config::{FrameMode, LpcConfig},
    types::Scaler,
};
use lpc_toolkit::decoder::lsf_stability::lsf_check;
use lpc_toolkit::encoder::{
    lpc_analysis::{LpcAnalysis, LpcAnalysisError},
    bandwidth_expansion::bandwidth_expand_in_place,
    scalar_quantizer::scalar_quantize,
};
use simple_logger::SimpleLogger;
use std::f32::consts::PI;

#[macro_use]
extern crate log;

fn main() -> Result<(), LpcAnalysisError> {
    SimpleLogger::new().init().unwrap();

    let config = LpcConfig::new(FrameMode::ThirtyMs);
    let len = config.analysis_len();

    // hann analysis window and a two formant test signal
    let window: Vec<Scaler> = (0..len)
        .map(|n| 0.5 - 0.5 * (2.0 * PI * n as Scaler / len as Scaler).cos())
        .collect();
    let frame: Vec<Scaler> = (0..len)
        .map(|n| {
            let t = n as Scaler / config.fs as Scaler;
            1000.0 * (2.0 * PI * 500.0 * t).sin() + 400.0 * (2.0 * PI * 1500.0 * t).sin()
        })
        .collect();

    let analysis = LpcAnalysis::new(&config, &window)?;
    let mut a = vec![0.0; analysis.order() + 1];
    let mut k = vec![0.0; analysis.order()];
    let result = analysis.run(&frame, &mut a, &mut k);
    info!("prediction error: {} silent: {}", result.prediction_error, result.is_silent);
    info!("lpc coefficients: {:?}", a);

    let mut weighting = a.clone();
    bandwidth_expand_in_place(&mut weighting, config.chirp_weighting);
    info!("weighting filter: {:?}", weighting);
    info!("reflection coefficients: {:?}", k);

    // quantize the first reflection coefficient against a uniform 16 level codebook
    let cb: Vec<Scaler> = (0..16).map(|i| -0.9375 + 0.125 * i as Scaler).collect();
    let (index, value) = scalar_quantize(k[0], &cb);
    info!("k[0] = {} quantized to index {} ({})", k[0], index, value);

    // a deliberately crowded lsf vector
    let mut lsf = [0.005, 0.3, 0.31, 0.9, 1.2, 1.5, 1.9, 2.3, 2.31, 3.2];
    let lsf_len = lsf.len();
    let change = lsf_check(&mut lsf, lsf_len, 1);
    info!("lsf changed: {} -> {:?}", change, lsf);

    Ok(())
}
