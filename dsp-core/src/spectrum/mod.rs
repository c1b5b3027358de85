//! Spectral analysis: FFT engine, frequency axis, dB spectrum, DTFT sampling

pub mod axis;
pub mod dtft;
pub mod fft;
pub mod analysis;

pub use analysis::{Spectrum, SpectrumAnalyzer, SpectrumConfig};
pub use axis::frequency_axis;
pub use dtft::{dtft, omega_grid};
pub use fft::{fftshift, ifftshift, FftEngine};
