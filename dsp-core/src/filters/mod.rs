//! FIR filter design and filtering

pub mod windows;
pub mod design;
pub mod fir;

pub use design::{design_bandpass, design_frequency_sampling, design_highpass, design_lowpass};
pub use fir::{convolve, FirFilter};
pub use windows::{generate_window, WindowType};
