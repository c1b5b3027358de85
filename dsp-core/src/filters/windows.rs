//! Window functions for FIR design and spectral shaping

use std::f64::consts::PI;

use crate::error::{DspError, Result};

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann: mainlobe width 8pi/M, ~44 dB sidelobe attenuation
    Hann,

    /// Hamming: mainlobe width 8pi/M, ~53 dB sidelobe attenuation
    Hamming,

    /// Blackman: mainlobe width 12pi/M, ~74 dB sidelobe attenuation
    Blackman,

    /// Rectangular (no shaping): mainlobe width 4pi/M, ~21 dB
    Rectangular,
}

impl WindowType {
    /// Mainlobe width factor `a` such that the mainlobe width is a*pi/M
    fn mainlobe_factor(self) -> f64 {
        match self {
            WindowType::Hann | WindowType::Hamming => 8.0,
            WindowType::Blackman => 12.0,
            WindowType::Rectangular => 4.0,
        }
    }

    /// Filter length needed for a given transition width
    ///
    /// Returns an odd M (Type I linear phase) satisfying the window's
    /// mainlobe-width rule for the requested transition band.
    ///
    /// # Arguments
    /// * `transition_width` - Transition width in radians (0, pi]
    pub fn filter_length(self, transition_width: f64) -> Result<usize> {
        if !(transition_width > 0.0) {
            return Err(DspError::invalid(
                "transition_width",
                "transition width must be > 0",
            ));
        }

        let m = (self.mainlobe_factor() * PI / transition_width).ceil() as usize;
        Ok(if m % 2 == 0 { m + 1 } else { m })
    }

    /// Window sample w[n] for a window of `length` samples
    fn sample(self, n: usize, length: usize) -> f64 {
        if length == 1 {
            return 1.0;
        }
        let angle = 2.0 * PI * n as f64 / (length - 1) as f64;
        match self {
            WindowType::Hann => 0.5 - 0.5 * angle.cos(),
            WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
            WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
            WindowType::Rectangular => 1.0,
        }
    }
}

/// Generate window coefficients w[n] for n = 0..length
///
/// # Arguments
/// * `window` - Window type
/// * `length` - Number of samples (must be > 0)
pub fn generate_window(window: WindowType, length: usize) -> Result<Vec<f64>> {
    if length == 0 {
        return Err(DspError::invalid("length", "window length must be > 0"));
    }
    Ok((0..length).map(|n| window.sample(n, length)).collect())
}
