//! Frequency mixing with a numerically controlled oscillator
//!
//! A real mixer multiplies by a cosine carrier and lands energy at the four
//! combinations +-fNCO +- f0; a complex mixer multiplies by e^{j2pi fNCO n/fs}
//! and produces only the two shifted images. A negative NCO frequency
//! downconverts.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{DspError, Result};

/// Numerically controlled oscillator
///
/// Keeps its phase as a unit complex number advanced by a fixed per-sample
/// rotation, so repeated calls stay phase-continuous across block
/// boundaries.
pub struct Nco {
    /// Current carrier phasor
    phase: Complex64,

    /// Per-sample rotation e^{j2pi f/fs}
    step: Complex64,
}

impl Nco {
    /// Create an oscillator at `freq` Hz for signals sampled at
    /// `sample_rate` Hz
    ///
    /// # Arguments
    /// * `freq` - Carrier frequency; negative values downconvert
    /// * `sample_rate` - Sampling rate, must be > 0
    pub fn new(freq: f64, sample_rate: f64) -> Result<Self> {
        if !(sample_rate > 0.0) {
            return Err(DspError::invalid(
                "sample_rate",
                "sampling rate must be > 0",
            ));
        }
        if !freq.is_finite() {
            return Err(DspError::invalid("freq", "carrier frequency must be finite"));
        }

        let angle = 2.0 * PI * freq / sample_rate;
        Ok(Self {
            phase: Complex64::new(1.0, 0.0),
            step: Complex64::new(angle.cos(), angle.sin()),
        })
    }

    /// Advance one sample and return the carrier phasor used for it
    #[inline]
    fn next_phasor(&mut self) -> Complex64 {
        let current = self.phase;
        self.phase *= self.step;
        current
    }

    /// Keep the phasor on the unit circle; the recurrence drifts slowly
    fn renormalize(&mut self) {
        let norm = self.phase.norm();
        if norm > 0.0 {
            self.phase /= norm;
        }
    }

    /// Mix a real signal with the cosine carrier (real mixer)
    pub fn mix_real(&mut self, signal: &[f64]) -> Vec<f64> {
        let output = signal.iter().map(|&x| x * self.next_phasor().re).collect();
        self.renormalize();
        output
    }

    /// Mix a real signal with the complex carrier (complex mixer)
    pub fn mix_complex(&mut self, signal: &[f64]) -> Vec<Complex64> {
        let output = signal.iter().map(|&x| x * self.next_phasor()).collect();
        self.renormalize();
        output
    }

    /// Rotate an already-complex signal by the carrier
    pub fn rotate(&mut self, signal: &[Complex64]) -> Vec<Complex64> {
        let output = signal.iter().map(|&x| x * self.next_phasor()).collect();
        self.renormalize();
        output
    }

    /// Reset the oscillator phase to zero
    pub fn reset(&mut self) {
        self.phase = Complex64::new(1.0, 0.0);
    }
}
