#![no_std]

pub mod common;
pub mod decoder;
pub mod encoder;
