//! Dense sampling of the discrete-time Fourier transform
//!
//! The DTFT of a finite sequence is continuous in frequency; sampled on a
//! dense enough grid it can be read as such. This is the direct evaluation,
//! used both for inspecting signals and for the frequency response of FIR
//! coefficient vectors.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Uniform radian-frequency grid
///
/// `whole == false` covers [0, pi), `whole == true` covers [0, 2*pi); the
/// endpoint is excluded in both cases.
pub fn omega_grid(points: usize, whole: bool) -> Vec<f64> {
    let span = if whole { 2.0 * PI } else { PI };
    (0..points)
        .map(|i| span * i as f64 / points as f64)
        .collect()
}

/// Evaluate the DTFT of `x` at the given radian frequencies
///
/// Computes X(e^jw) = sum over n of x[n] * e^{-jwn} for each w in `omegas`.
/// Magnitude and phase extraction are left to the caller.
///
/// # Arguments
/// * `x` - Real sample sequence
/// * `omegas` - Radian frequencies, typically from [`omega_grid`]
pub fn dtft(x: &[f64], omegas: &[f64]) -> Vec<Complex64> {
    let mut response = Vec::with_capacity(omegas.len());

    for &omega in omegas {
        let mut sum = Complex64::new(0.0, 0.0);
        for (n, &sample) in x.iter().enumerate() {
            let phase = -(omega * n as f64);
            sum += sample * Complex64::new(phase.cos(), phase.sin());
        }
        response.push(sum);
    }

    response
}
