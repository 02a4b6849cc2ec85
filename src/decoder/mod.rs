pub mod lsf_dequantizer;
pub mod lsf_stability;
