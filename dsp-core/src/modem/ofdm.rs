//! OFDM symbol assembly and modulation
//!
//! A symbol is laid out on the zero-centered frequency axis: unit pilots at
//! a regular spacing across the active span, a guard of empty subcarriers
//! around DC, data amplitudes on the rest. Modulation is the inverse
//! transform of that layout with a cyclic prefix prepended.

use num_complex::Complex64;

use crate::error::{DspError, Result};
use crate::spectrum::{ifftshift, FftEngine};

/// Subcarrier layout and sizing of one OFDM symbol
#[derive(Debug, Clone)]
pub struct OfdmPlan {
    /// Transform length (total subcarrier slots)
    nfft: usize,

    /// Cyclic prefix length in samples
    guard_len: usize,

    /// Pilot positions on the centered axis, ascending
    pilot_positions: Vec<i64>,

    /// Data positions on the centered axis, ascending
    data_positions: Vec<i64>,
}

impl OfdmPlan {
    /// Build a subcarrier plan
    ///
    /// Active subcarriers occupy [-active_half_width, active_half_width] on
    /// the centered axis. Pilots sit every `pilot_spacing` positions
    /// starting from the band edge (mirrored about DC); the three
    /// subcarriers around DC stay empty; every remaining active position
    /// carries data.
    ///
    /// # Arguments
    /// * `nfft` - Transform length; even, >= 4
    /// * `guard_len` - Cyclic prefix length; at most `nfft`
    /// * `active_half_width` - Half-width of the active band; >= 2, less
    ///   than `nfft / 2`
    /// * `pilot_spacing` - Distance between pilots; >= 1
    pub fn new(
        nfft: usize,
        guard_len: usize,
        active_half_width: usize,
        pilot_spacing: usize,
    ) -> Result<Self> {
        if nfft < 4 || nfft % 2 != 0 {
            return Err(DspError::invalid("nfft", "transform length must be even, >= 4"));
        }
        if guard_len > nfft {
            return Err(DspError::invalid(
                "guard_len",
                "cyclic prefix cannot exceed the transform length",
            ));
        }
        if active_half_width < 2 || active_half_width >= nfft / 2 {
            return Err(DspError::invalid(
                "active_half_width",
                "active band must cover [2, nfft/2) positions per side",
            ));
        }
        if pilot_spacing == 0 {
            return Err(DspError::invalid("pilot_spacing", "pilot spacing must be > 0"));
        }

        let w = active_half_width as i64;
        let step = pilot_spacing as i64;

        // Pilots walk in from the band edge on the negative side and are
        // mirrored onto the positive side
        let mut pilot_positions: Vec<i64> = (0..)
            .map(|k| -w + k * step)
            .take_while(|&p| p < 0)
            .filter(|&p| p < -1)
            .collect();
        let mirrored: Vec<i64> = pilot_positions.iter().rev().map(|&p| -p).collect();
        pilot_positions.extend(mirrored);

        let dc_guard = [-1i64, 0, 1];
        let data_positions = (-w..=w)
            .filter(|p| !pilot_positions.contains(p) && !dc_guard.contains(p))
            .collect();

        Ok(Self {
            nfft,
            guard_len,
            pilot_positions,
            data_positions,
        })
    }

    /// Transform length
    pub fn nfft(&self) -> usize {
        self.nfft
    }

    /// Cyclic prefix length
    pub fn guard_len(&self) -> usize {
        self.guard_len
    }

    /// Pilot positions on the centered axis
    pub fn pilot_positions(&self) -> &[i64] {
        &self.pilot_positions
    }

    /// Data positions on the centered axis
    pub fn data_positions(&self) -> &[i64] {
        &self.data_positions
    }

    /// Number of data amplitudes one symbol carries
    pub fn data_slots(&self) -> usize {
        self.data_positions.len()
    }

    fn index_of(&self, position: i64) -> usize {
        (position + (self.nfft / 2) as i64) as usize
    }

    /// Place pilots and data on the centered frequency grid
    ///
    /// # Arguments
    /// * `data` - One amplitude per data slot, in ascending position order
    ///
    /// # Returns
    /// The frequency-domain symbol, length `nfft`, centered ordering
    pub fn assemble(&self, data: &[Complex64]) -> Result<Vec<Complex64>> {
        if data.len() != self.data_slots() {
            return Err(DspError::invalid(
                "data",
                "amplitude count must equal the plan's data slots",
            ));
        }

        let mut symbol = vec![Complex64::new(0.0, 0.0); self.nfft];
        for &p in &self.pilot_positions {
            symbol[self.index_of(p)] = Complex64::new(1.0, 0.0);
        }
        for (&p, &amplitude) in self.data_positions.iter().zip(data.iter()) {
            symbol[self.index_of(p)] = amplitude;
        }
        Ok(symbol)
    }

    /// Produce the time-domain symbol: inverse transform plus cyclic prefix
    ///
    /// # Returns
    /// `nfft + guard_len` complex samples; the first `guard_len` repeat the
    /// symbol tail
    pub fn modulate(&self, data: &[Complex64]) -> Result<Vec<Complex64>> {
        let spectrum = self.assemble(data)?;
        let core = FftEngine::new(self.nfft).ifft(&ifftshift(&spectrum));

        let mut symbol = Vec::with_capacity(self.nfft + self.guard_len);
        symbol.extend_from_slice(&core[self.nfft - self.guard_len..]);
        symbol.extend_from_slice(&core);
        Ok(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modem::qam::Constellation;
    use crate::spectrum::fftshift;

    /// 256 subcarriers, 64-sample prefix, active span +-103, pilots every 5
    fn example_plan() -> OfdmPlan {
        OfdmPlan::new(256, 64, 103, 5).unwrap()
    }

    #[test]
    fn example_plan_slot_counts() {
        let plan = example_plan();
        assert_eq!(plan.pilot_positions().len(), 42);
        assert_eq!(plan.data_slots(), 162);

        assert_eq!(plan.pilot_positions()[0], -103);
        assert_eq!(*plan.pilot_positions().last().unwrap(), 103);
        assert!(plan.pilot_positions().contains(&-3));
        assert!(plan.pilot_positions().contains(&3));
    }

    #[test]
    fn dc_guard_is_empty() {
        let plan = example_plan();
        let data = vec![Complex64::new(1.0, 0.0); plan.data_slots()];
        let symbol = plan.assemble(&data).unwrap();

        for p in [-1i64, 0, 1] {
            let idx = (p + 128) as usize;
            assert_eq!(symbol[idx], Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn inactive_band_is_empty() {
        let plan = example_plan();
        let data = vec![Complex64::new(2.0, -1.0); plan.data_slots()];
        let symbol = plan.assemble(&data).unwrap();

        for (i, value) in symbol.iter().enumerate() {
            let position = i as i64 - 128;
            if position.abs() > 103 {
                assert_eq!(*value, Complex64::new(0.0, 0.0));
            }
        }
    }

    #[test]
    fn modulated_symbol_has_prefix_equal_to_tail() {
        let plan = example_plan();
        let data = Constellation::Qam16
            .map_symbols(&(0..162).map(|i| (i % 16) as u8).collect::<Vec<_>>())
            .unwrap();

        let symbol = plan.modulate(&data).unwrap();
        assert_eq!(symbol.len(), 256 + 64);

        for i in 0..64 {
            assert!((symbol[i] - symbol[256 + i]).norm() < 1e-12);
        }
    }

    #[test]
    fn demodulation_recovers_the_grid() {
        let plan = example_plan();
        let data = Constellation::Qam16
            .map_symbols(&(0..162).map(|i| ((7 * i) % 16) as u8).collect::<Vec<_>>())
            .unwrap();

        let tx = plan.modulate(&data).unwrap();

        // Strip the prefix and transform back
        let core = &tx[64..];
        let spectrum = fftshift(&FftEngine::new(256).fft_complex(core));
        let expected = plan.assemble(&data).unwrap();

        for (a, b) in spectrum.iter().zip(expected.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn mismatched_data_length_is_rejected() {
        let plan = example_plan();
        assert!(plan.assemble(&[Complex64::new(1.0, 0.0); 10]).is_err());
    }

    #[test]
    fn degenerate_plans_are_rejected() {
        assert!(OfdmPlan::new(255, 16, 100, 5).is_err());
        assert!(OfdmPlan::new(256, 300, 100, 5).is_err());
        assert!(OfdmPlan::new(256, 16, 1, 5).is_err());
        assert!(OfdmPlan::new(256, 16, 128, 5).is_err());
        assert!(OfdmPlan::new(256, 16, 100, 0).is_err());
    }

    #[test]
    fn zero_guard_is_allowed() {
        let plan = OfdmPlan::new(64, 0, 20, 4).unwrap();
        let data = vec![Complex64::new(1.0, 1.0); plan.data_slots()];
        assert_eq!(plan.modulate(&data).unwrap().len(), 64);
    }
}
