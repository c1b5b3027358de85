//! Linear-phase FIR design
//!
//! Two classical methods: the windowing method (ideal sinc response times a
//! window) for the standard lowpass/highpass/bandpass shapes, and
//! frequency sampling for arbitrary piecewise-linear magnitude targets.
//! Frequencies are normalized so that 1.0 is the Nyquist frequency (pi
//! rad/sample).

use num_complex::Complex64;
use std::f64::consts::PI;

use super::windows::{generate_window, WindowType};
use crate::error::{DspError, Result};
use crate::spectrum::FftEngine;

fn check_cutoff(arg: &'static str, cutoff: f64) -> Result<()> {
    if !(cutoff > 0.0 && cutoff < 1.0) {
        return Err(DspError::invalid(arg, "cutoff must lie strictly in (0, 1)"));
    }
    Ok(())
}

/// Common windowing-method scaffold: sample the ideal impulse response
/// centered at (M-1)/2 and taper it with the window.
fn windowed_ideal<F>(
    window: WindowType,
    transition_width: f64,
    ideal: F,
    center_value: f64,
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    let num_taps = window.filter_length(transition_width)?;
    let taper = generate_window(window, num_taps)?;
    let center = (num_taps - 1) as f64 / 2.0;

    let mut h = Vec::with_capacity(num_taps);
    for n in 0..num_taps {
        let m = n as f64 - center;
        // The sinc forms are 0/0 at the center tap; use the analytic limit
        let value = if m.abs() < 1e-10 {
            center_value
        } else {
            ideal(m)
        };
        h.push(value * taper[n]);
    }
    Ok(h)
}

/// Design a lowpass FIR filter with the windowing method
///
/// # Arguments
/// * `cutoff` - Cutoff frequency, units of Nyquist (0, 1)
/// * `transition_width` - Transition width in radians
/// * `window` - Window type; sets the filter length via its mainlobe rule
pub fn design_lowpass(cutoff: f64, transition_width: f64, window: WindowType) -> Result<Vec<f64>> {
    check_cutoff("cutoff", cutoff)?;
    let wc = cutoff * PI;
    windowed_ideal(
        window,
        transition_width,
        |m| (wc * m).sin() / (PI * m),
        wc / PI,
    )
}

/// Design a highpass FIR filter with the windowing method
pub fn design_highpass(cutoff: f64, transition_width: f64, window: WindowType) -> Result<Vec<f64>> {
    check_cutoff("cutoff", cutoff)?;
    let wc = cutoff * PI;
    // Spectral inversion of the lowpass prototype
    windowed_ideal(
        window,
        transition_width,
        |m| -((wc * m).sin() / (PI * m)),
        1.0 - wc / PI,
    )
}

/// Design a bandpass FIR filter with the windowing method
///
/// # Arguments
/// * `low_cutoff` - Lower cutoff, units of Nyquist
/// * `high_cutoff` - Upper cutoff, units of Nyquist (must exceed the lower)
/// * `transition_width` - Transition width in radians
/// * `window` - Window type
pub fn design_bandpass(
    low_cutoff: f64,
    high_cutoff: f64,
    transition_width: f64,
    window: WindowType,
) -> Result<Vec<f64>> {
    check_cutoff("low_cutoff", low_cutoff)?;
    check_cutoff("high_cutoff", high_cutoff)?;
    if low_cutoff >= high_cutoff {
        return Err(DspError::invalid(
            "high_cutoff",
            "upper cutoff must exceed the lower cutoff",
        ));
    }

    let w1 = low_cutoff * PI;
    let w2 = high_cutoff * PI;
    windowed_ideal(
        window,
        transition_width,
        |m| ((w2 * m).sin() - (w1 * m).sin()) / (PI * m),
        (w2 - w1) / PI,
    )
}

/// Design an FIR filter from a piecewise-linear magnitude target
/// (frequency-sampling method)
///
/// The target is given as breakpoints: `freqs` in units of Nyquist, starting
/// at 0.0 and ending at 1.0, strictly increasing; `gains` the desired linear
/// magnitude at each breakpoint. The target is interpolated onto a dense
/// grid, given the linear-phase term for a causal filter, and transformed
/// back to `num_taps` coefficients which are then windowed.
///
/// # Arguments
/// * `freqs` - Breakpoint frequencies, [0, 1], strictly increasing
/// * `gains` - Target magnitudes at the breakpoints (>= 0)
/// * `num_taps` - Filter length; odd, >= 3
/// * `window` - Taper applied to the truncated impulse response
pub fn design_frequency_sampling(
    freqs: &[f64],
    gains: &[f64],
    num_taps: usize,
    window: WindowType,
) -> Result<Vec<f64>> {
    if freqs.len() < 2 || freqs.len() != gains.len() {
        return Err(DspError::invalid(
            "freqs",
            "need at least two breakpoints, one gain per frequency",
        ));
    }
    if freqs[0] != 0.0 || *freqs.last().unwrap() != 1.0 {
        return Err(DspError::invalid(
            "freqs",
            "breakpoints must start at 0.0 and end at 1.0",
        ));
    }
    if freqs.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(DspError::invalid(
            "freqs",
            "breakpoints must be strictly increasing",
        ));
    }
    if gains.iter().any(|&g| !(g >= 0.0) || !g.is_finite()) {
        return Err(DspError::invalid(
            "gains",
            "gains must be finite and non-negative",
        ));
    }
    if num_taps < 3 || num_taps % 2 == 0 {
        return Err(DspError::invalid("num_taps", "tap count must be odd, >= 3"));
    }

    // Dense half-spectrum grid, a power of two above the tap count
    let mut nfreqs = 2usize;
    while nfreqs < num_taps {
        nfreqs *= 2;
    }
    nfreqs += 1;

    let delay = (num_taps - 1) as f64 / 2.0;
    let mut half_spectrum = Vec::with_capacity(nfreqs);
    for i in 0..nfreqs {
        let f = i as f64 / (nfreqs - 1) as f64;
        let gain = interpolate(freqs, gains, f);
        let phase = -delay * f * PI;
        half_spectrum.push(gain * Complex64::new(phase.cos(), phase.sin()));
    }

    // Hermitian extension and inverse transform back to time domain
    let nfft = 2 * (nfreqs - 1);
    let mut full = vec![Complex64::new(0.0, 0.0); nfft];
    full[..nfreqs].copy_from_slice(&half_spectrum);
    for i in 1..nfreqs - 1 {
        full[nfft - i] = half_spectrum[i].conj();
    }

    let impulse = FftEngine::new(nfft).ifft(&full);
    let taper = generate_window(window, num_taps)?;
    Ok(impulse
        .iter()
        .take(num_taps)
        .zip(taper.iter())
        .map(|(c, w)| c.re * w)
        .collect())
}

/// Linear interpolation of the gain target at frequency `f`
fn interpolate(freqs: &[f64], gains: &[f64], f: f64) -> f64 {
    let upper = match freqs.iter().position(|&x| x >= f) {
        Some(0) => return gains[0],
        Some(i) => i,
        None => return *gains.last().unwrap(),
    };
    let (f0, f1) = (freqs[upper - 1], freqs[upper]);
    let (g0, g1) = (gains[upper - 1], gains[upper]);
    g0 + (g1 - g0) * (f - f0) / (f1 - f0)
}
