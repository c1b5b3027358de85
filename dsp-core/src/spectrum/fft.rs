//! FFT engine built on rustfft/realfft
//!
//! Wraps transform planning behind the zero-pad/truncate call convention of
//! the rest of the crate: every transform is taken at a fixed length `nfft`
//! regardless of the input length, the way `fft(x, Nfft)` works in the usual
//! numeric packages.

use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Fixed-length DFT engine for real and complex sequences
pub struct FftEngine {
    /// Transform length
    nfft: usize,

    /// Forward complex FFT
    forward: Arc<dyn Fft<f64>>,

    /// Inverse complex FFT
    inverse: Arc<dyn Fft<f64>>,

    /// Real-to-complex FFT for the real-input fast path
    r2c: Arc<dyn RealToComplex<f64>>,
}

impl FftEngine {
    /// Create an engine for transforms of length `nfft` (must be >= 1)
    pub fn new(nfft: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(nfft);
        let inverse = planner.plan_fft_inverse(nfft);

        let mut real_planner = RealFftPlanner::<f64>::new();
        let r2c = real_planner.plan_fft_forward(nfft);

        Self {
            nfft,
            forward,
            inverse,
            r2c,
        }
    }

    /// Get the transform length
    pub fn nfft(&self) -> usize {
        self.nfft
    }

    /// Forward DFT of a real sequence, zero-padded or truncated to `nfft`
    ///
    /// Uses the half-spectrum real FFT internally and mirrors the result, so
    /// the output is the full two-sided spectrum X[k] for k = 0..nfft with
    /// X[nfft-k] = conj(X[k]).
    pub fn fft_real(&self, signal: &[f64]) -> Vec<Complex64> {
        let mut input = vec![0.0; self.nfft];
        let copy_len = signal.len().min(self.nfft);
        input[..copy_len].copy_from_slice(&signal[..copy_len]);

        let mut half = self.r2c.make_output_vec();
        self.r2c
            .process(&mut input, &mut half)
            .expect("real FFT processing failed");

        let mut full = vec![Complex64::new(0.0, 0.0); self.nfft];
        full[..half.len()].copy_from_slice(&half);
        for k in 1..(self.nfft + 1) / 2 {
            full[self.nfft - k] = half[k].conj();
        }
        full
    }

    /// Forward DFT of a complex sequence, zero-padded or truncated to `nfft`
    pub fn fft_complex(&self, signal: &[Complex64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = signal.iter().copied().take(self.nfft).collect();
        buffer.resize(self.nfft, Complex64::new(0.0, 0.0));
        self.forward.process(&mut buffer);
        buffer
    }

    /// Inverse DFT, normalized by 1/nfft
    pub fn ifft(&self, spectrum: &[Complex64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = spectrum.iter().copied().take(self.nfft).collect();
        buffer.resize(self.nfft, Complex64::new(0.0, 0.0));
        self.inverse.process(&mut buffer);

        let scale = 1.0 / self.nfft as f64;
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
        buffer
    }
}

/// Reorder transform output so frequency zero sits at the center
///
/// Index 0 of the result corresponds to the most negative frequency. For
/// even lengths the two halves are swapped; odd lengths keep the result
/// fully symmetric around the zero bin.
pub fn fftshift<T: Copy>(spectrum: &[T]) -> Vec<T> {
    let mut shifted = spectrum.to_vec();
    let pivot = (spectrum.len() + 1) / 2;
    shifted.rotate_left(pivot);
    shifted
}

/// Inverse of [`fftshift`], restoring natural DFT bin order
pub fn ifftshift<T: Copy>(spectrum: &[T]) -> Vec<T> {
    let mut unshifted = spectrum.to_vec();
    let pivot = spectrum.len() / 2;
    unshifted.rotate_left(pivot);
    unshifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn real_and_complex_paths_agree() {
        let signal: Vec<f64> = (0..13).map(|n| (0.3 * n as f64).sin() + 0.5).collect();
        let as_complex: Vec<Complex64> = signal.iter().map(|&s| Complex64::new(s, 0.0)).collect();

        let engine = FftEngine::new(40);
        let from_real = engine.fft_real(&signal);
        let from_complex = engine.fft_complex(&as_complex);

        assert_eq!(from_real.len(), 40);
        for (a, b) in from_real.iter().zip(from_complex.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn fft_of_impulse_is_flat() {
        let engine = FftEngine::new(16);
        let spectrum = engine.fft_real(&[1.0]);

        for bin in &spectrum {
            assert!((bin.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn ifft_inverts_fft() {
        let signal: Vec<Complex64> = (0..32)
            .map(|n| {
                let phase = 2.0 * PI * 3.0 * n as f64 / 32.0;
                Complex64::new(phase.cos(), phase.sin())
            })
            .collect();

        let engine = FftEngine::new(32);
        let round_trip = engine.ifft(&engine.fft_complex(&signal));

        for (a, b) in round_trip.iter().zip(signal.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn fftshift_even_swaps_halves() {
        let shifted = fftshift(&[0, 1, 2, 3]);
        assert_eq!(shifted, vec![2, 3, 0, 1]);
    }

    #[test]
    fn fftshift_odd_centers_zero_bin() {
        let shifted = fftshift(&[0, 1, 2, 3, 4]);
        assert_eq!(shifted, vec![3, 4, 0, 1, 2]);
    }

    #[test]
    fn ifftshift_undoes_fftshift() {
        for len in [1usize, 2, 5, 8, 11] {
            let original: Vec<usize> = (0..len).collect();
            assert_eq!(ifftshift(&fftshift(&original)), original);
        }
    }
}
