//! Multirate operations: integer up/downsampling and Fourier resampling
//!
//! `upsample` and `downsample` are the bare rate changes; imaging and
//! aliasing are left for the caller to handle (or to observe). `resample`
//! is the Fourier-domain method (FFT, crop or extend the spectrum, inverse
//! FFT) with its implicit brick-wall anti-alias behavior.

use num_complex::Complex64;

use crate::error::{DspError, Result};
use crate::spectrum::FftEngine;

/// Insert `factor - 1` zeros between consecutive samples
///
/// Output length is `signal.len() * factor`. The spectrum is unchanged but
/// repeats `factor` times across the new Nyquist range (imaging).
pub fn upsample(signal: &[f64], factor: usize) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(DspError::invalid("signal", "input must not be empty"));
    }
    if factor == 0 {
        return Err(DspError::invalid("factor", "rate factor must be > 0"));
    }

    let mut output = vec![0.0; signal.len() * factor];
    for (i, &x) in signal.iter().enumerate() {
        output[i * factor] = x;
    }
    Ok(output)
}

/// Keep every `factor`-th sample, starting with the first
///
/// No anti-alias filtering is applied; content above the new Nyquist folds
/// back.
pub fn downsample(signal: &[f64], factor: usize) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(DspError::invalid("signal", "input must not be empty"));
    }
    if factor == 0 {
        return Err(DspError::invalid("factor", "rate factor must be > 0"));
    }

    Ok(signal.iter().step_by(factor).copied().collect())
}

/// Resample to `target_len` samples with the Fourier method
///
/// Transforms the signal, keeps the `min(N, target_len)` lowest-frequency
/// bins, and inverse-transforms at the new length with gain
/// `target_len / N`. A band-limited signal survives the trip unchanged
/// apart from the rate.
pub fn resample(signal: &[f64], target_len: usize) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(DspError::invalid("signal", "input must not be empty"));
    }
    if target_len == 0 {
        return Err(DspError::invalid("target_len", "target length must be > 0"));
    }

    let n = signal.len();
    let spectrum = FftEngine::new(n).fft_real(signal);

    // Copy the low half of the spectrum into the new length from both ends
    let mut stretched = vec![Complex64::new(0.0, 0.0); target_len];
    let half = n.min(target_len) / 2;
    stretched[..half].copy_from_slice(&spectrum[..half]);
    stretched[target_len - half..].copy_from_slice(&spectrum[n - half..]);

    let gain = target_len as f64 / n as f64;
    let output = FftEngine::new(target_len).ifft(&stretched);
    Ok(output.iter().map(|c| c.re * gain).collect())
}
