//! Digital modulation: QAM mapping and OFDM symbol generation

pub mod ofdm;
pub mod qam;

pub use ofdm::OfdmPlan;
pub use qam::{Constellation, QamModulator};
