//! Peak-normalized dB spectrum of a finite sequence
//!
//! The analyzer oversamples the DFT of its input (zero-padding to a multiple
//! of the signal length), centers frequency zero, normalizes the peak to
//! 0 dB and returns the magnitude in dB together with the matching frequency
//! axis. It computes only; plotting the pair is the caller's business.

use num_complex::Complex64;

use super::axis::frequency_axis;
use super::fft::{fftshift, FftEngine};
use crate::error::{DspError, Result};

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct SpectrumConfig {
    /// Transform oversampling factor: the DFT length is `oversampling`
    /// times the input length. Purely a resolution choice that makes the
    /// sampled spectrum approximate the continuous one; 10 is plenty for
    /// visual work.
    pub oversampling: usize,

    /// Sampling rate in Hz; use 1.0 for normalized digital frequency
    pub sample_rate: f64,

    /// Display floor in dB; bins with zero magnitude clamp here instead of
    /// going to negative infinity
    pub floor_db: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            oversampling: 10,
            sample_rate: 1.0,
            floor_db: -120.0,
        }
    }
}

/// Result of a spectrum analysis: two parallel sequences of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Zero-centered frequency axis, [-fs/2, fs/2)
    pub frequencies: Vec<f64>,

    /// Peak-normalized magnitude in dB (peak = 0 dB)
    pub magnitude_db: Vec<f64>,
}

impl Spectrum {
    /// Number of spectral samples
    pub fn len(&self) -> usize {
        self.magnitude_db.len()
    }

    /// True for the empty spectrum (never produced by the analyzer)
    pub fn is_empty(&self) -> bool {
        self.magnitude_db.is_empty()
    }

    /// Index and frequency of the strongest bin
    pub fn peak(&self) -> (usize, f64) {
        let mut peak_idx = 0;
        let mut peak_db = f64::NEG_INFINITY;
        for (i, &db) in self.magnitude_db.iter().enumerate() {
            if db > peak_db {
                peak_db = db;
                peak_idx = i;
            }
        }
        (peak_idx, self.frequencies[peak_idx])
    }
}

/// Spectrum analyzer for real or complex sample sequences
pub struct SpectrumAnalyzer {
    config: SpectrumConfig,
}

impl SpectrumAnalyzer {
    /// Create an analyzer with the given configuration
    pub fn new(config: SpectrumConfig) -> Self {
        Self { config }
    }

    /// Analyzer with the default configuration (10x oversampling,
    /// normalized frequency)
    pub fn with_defaults() -> Self {
        Self::new(SpectrumConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    /// Analyze a real sample sequence
    ///
    /// # Arguments
    /// * `signal` - Input samples, length N >= 1; not mutated
    ///
    /// # Returns
    /// A [`Spectrum`] of `oversampling * N` points, or `DegenerateInput`
    /// for an all-zero signal whose peak normalization is undefined.
    pub fn analyze(&self, signal: &[f64]) -> Result<Spectrum> {
        let nfft = self.transform_length(signal.len())?;
        let engine = FftEngine::new(nfft);
        self.finish(engine.fft_real(signal), signal.len())
    }

    /// Analyze a complex sample sequence
    pub fn analyze_complex(&self, signal: &[Complex64]) -> Result<Spectrum> {
        let nfft = self.transform_length(signal.len())?;
        let engine = FftEngine::new(nfft);
        self.finish(engine.fft_complex(signal), signal.len())
    }

    fn transform_length(&self, input_len: usize) -> Result<usize> {
        if input_len == 0 {
            return Err(DspError::invalid("signal", "input must not be empty"));
        }
        if self.config.oversampling == 0 {
            return Err(DspError::invalid(
                "oversampling",
                "oversampling factor must be > 0",
            ));
        }
        if !(self.config.sample_rate > 0.0) {
            return Err(DspError::invalid(
                "sample_rate",
                "sampling rate must be > 0",
            ));
        }
        Ok(self.config.oversampling * input_len)
    }

    fn finish(&self, transform: Vec<Complex64>, input_len: usize) -> Result<Spectrum> {
        let nfft = transform.len();
        let shifted = fftshift(&transform);

        // Energy normalization is by the original length, not the padded one
        let scale = 1.0 / input_len as f64;
        let magnitudes: Vec<f64> = shifted.iter().map(|c| c.norm() * scale).collect();

        let peak = magnitudes.iter().cloned().fold(0.0, f64::max);
        if peak == 0.0 {
            return Err(DspError::DegenerateInput(
                "all-zero signal has no peak to normalize against",
            ));
        }

        let magnitude_db = magnitudes
            .iter()
            .map(|&m| {
                if m == 0.0 {
                    self.config.floor_db
                } else {
                    (20.0 * (m / peak).log10()).max(self.config.floor_db)
                }
            })
            .collect();

        Ok(Spectrum {
            frequencies: frequency_axis(nfft, self.config.sample_rate)?,
            magnitude_db,
        })
    }
}
