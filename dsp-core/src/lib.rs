//! Classical DSP building blocks
//!
//! Spectral analysis (zero-centered, peak-normalized dB spectra), FIR
//! design and filtering, frequency mixing, QAM/OFDM modulation, multirate
//! resampling, and antenna-array radiation patterns. Every operation is a
//! pure, synchronous computation over caller-owned sequences; presentation
//! of the results is out of scope.

pub mod antenna;
pub mod error;
pub mod filters;
pub mod mixing;
pub mod modem;
pub mod multirate;
pub mod spectrum;

pub use error::{DspError, Result};
pub use filters::{FirFilter, WindowType};
pub use mixing::Nco;
pub use modem::{Constellation, OfdmPlan, QamModulator};
pub use spectrum::{frequency_axis, Spectrum, SpectrumAnalyzer, SpectrumConfig};
