pub mod autocorrelation;
pub mod bandwidth_expansion;
pub mod levinson_durbin;
pub mod lpc_analysis;
pub mod scalar_quantizer;
pub mod vector_quantizer;
