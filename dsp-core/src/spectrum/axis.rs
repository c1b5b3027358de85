//! Frequency-axis builder for zero-centered spectra
//!
//! Produces the axis matching a transform that has been reordered with
//! [`fftshift`](super::fftshift): `nfft` uniformly spaced points covering
//! [-fs/2, fs/2) with bin spacing fs/nfft.

use crate::error::{DspError, Result};

/// Build the zero-centered frequency axis for an `nfft`-point spectrum
///
/// Pass the sampling rate in hertz, or `1.0` to get the normalized digital
/// frequency axis [-0.5, 0.5).
///
/// Even `nfft` yields `[-fs/2, ..., fs/2 - deltaf]` (the positive Nyquist
/// sample is left out); odd `nfft` yields the fully symmetric
/// `[-(fs-deltaf)/2, ..., +(fs-deltaf)/2]`. `nfft == 1` is valid and
/// produces `[0.0]`.
///
/// # Arguments
/// * `nfft` - Transform length (must be > 0)
/// * `sample_rate` - Sampling rate in Hz (must be > 0)
pub fn frequency_axis(nfft: usize, sample_rate: f64) -> Result<Vec<f64>> {
    if nfft == 0 {
        return Err(DspError::invalid("nfft", "transform length must be > 0"));
    }
    if !(sample_rate > 0.0) {
        return Err(DspError::invalid(
            "sample_rate",
            "sampling rate must be > 0",
        ));
    }

    let deltaf = sample_rate / nfft as f64;
    let start = if nfft % 2 == 0 {
        -sample_rate / 2.0
    } else {
        -(sample_rate - deltaf) / 2.0
    };

    Ok((0..nfft).map(|i| start + i as f64 * deltaf).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_axis_endpoints_and_spacing() {
        let axis = frequency_axis(256, 1000.0).unwrap();
        let deltaf = 1000.0 / 256.0;

        assert_eq!(axis.len(), 256);
        assert!((axis[0] - (-500.0)).abs() < 1e-12);
        assert!((axis[255] - (500.0 - deltaf)).abs() < 1e-9);

        for pair in axis.windows(2) {
            assert!((pair[1] - pair[0] - deltaf).abs() < 1e-9);
        }
    }

    #[test]
    fn odd_axis_is_symmetric() {
        let axis = frequency_axis(41, 1.0).unwrap();

        assert_eq!(axis.len(), 41);
        for i in 0..axis.len() {
            assert!((axis[i] + axis[axis.len() - 1 - i]).abs() < 1e-12);
        }
        assert!(axis[20].abs() < 1e-12);
    }

    #[test]
    fn single_point_axis_is_zero() {
        let axis = frequency_axis(1, 48000.0).unwrap();
        assert_eq!(axis, vec![0.0]);
    }

    #[test]
    fn rejects_zero_length() {
        assert!(matches!(
            frequency_axis(0, 1.0),
            Err(DspError::InvalidArgument { arg: "nfft", .. })
        ));
    }

    #[test]
    fn rejects_nonpositive_rate() {
        assert!(frequency_axis(8, 0.0).is_err());
        assert!(frequency_axis(8, -44100.0).is_err());
        assert!(frequency_axis(8, f64::NAN).is_err());
    }

    #[test]
    fn axis_is_deterministic() {
        assert_eq!(
            frequency_axis(100, 8000.0).unwrap(),
            frequency_axis(100, 8000.0).unwrap()
        );
    }
}
